//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_routes())
        // Health check endpoint
        .route("/health", get(handlers::health::health_check))
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", post(handlers::user::register))
        .route("/users/{user_id}", get(handlers::user::get_user))
        .route("/users/{user_id}/rooms", get(handlers::user::get_user_rooms))
        // Rooms
        .route("/rooms", get(handlers::room::list_rooms))
        .route("/rooms/{room}/members", post(handlers::room::join_room))
        .route("/rooms/{room}/messages", post(handlers::message::broadcast))
        // Private messages
        .route("/messages/private", post(handlers::message::send_private))
        // SSE streams
        .route(
            "/users/{user_id}/messages/stream",
            get(handlers::stream::user_messages),
        )
        .route(
            "/users/{user_id}/private/stream",
            get(handlers::stream::private_messages),
        )
        .route("/rooms/{room}/stream", get(handlers::stream::room_content))
}
