//! Room Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::JoinRoomRequest;
use crate::application::dto::response::{JoinRoomResponse, RoomListResponse};
use crate::shared::error::AppError;
use crate::shared::validation::validate_room_name;
use crate::startup::AppState;

use super::parse_user_id;

/// List all known rooms
pub async fn list_rooms(State(state): State<AppState>) -> Json<RoomListResponse> {
    Json(RoomListResponse {
        rooms: state.directory.list_rooms(),
    })
}

/// Join a room, creating it on first join
pub async fn join_room(
    State(state): State<AppState>,
    Path(room): Path<String>,
    Json(body): Json<JoinRoomRequest>,
) -> Result<Json<JoinRoomResponse>, AppError> {
    validate_room_name(&room)?;
    let user_id = parse_user_id(&body.user_id)?;

    let members = state.directory.join_room(user_id, &room)?;

    Ok(Json(JoinRoomResponse { room, members }))
}
