//! Message Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{BroadcastMessageRequest, PrivateMessageRequest};
use crate::application::dto::response::MessageResponse;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

use super::parse_user_id;

/// Broadcast a message into a room
pub async fn broadcast(
    State(state): State<AppState>,
    Path(room): Path<String>,
    Json(body): Json<BroadcastMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    body.validate().map_err(validation_error)?;
    let user_id = parse_user_id(&body.user_id)?;

    let message = state.publisher.broadcast(user_id, &room, &body.content)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::from(message.as_ref())),
    ))
}

/// Send a direct message to another user
pub async fn send_private(
    State(state): State<AppState>,
    Json(body): Json<PrivateMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    body.validate().map_err(validation_error)?;
    let from_id = parse_user_id(&body.from_user_id)?;
    let to_id = parse_user_id(&body.to_user_id)?;

    let message = state.publisher.send_private(from_id, to_id, &body.content)?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::from(message.as_ref())),
    ))
}
