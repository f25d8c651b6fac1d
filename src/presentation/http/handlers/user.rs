//! User Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::RegisterUserRequest;
use crate::application::dto::response::{UserResponse, UserRoomsResponse};
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

use super::parse_user_id;

/// Register a new user with a unique display name
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let profile = state.directory.register(&body.display_name)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(profile))))
}

/// Look up a registered user by id
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let profile = state.directory.user_profile(user_id)?;

    Ok(Json(UserResponse::from(profile)))
}

/// Get the rooms a user has joined, in join order
pub async fn get_user_rooms(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRoomsResponse>, AppError> {
    let user_id = parse_user_id(&user_id)?;

    let rooms = state.directory.user_rooms(user_id)?;

    Ok(Json(UserRoomsResponse { rooms }))
}
