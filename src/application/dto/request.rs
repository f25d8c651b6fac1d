//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;
use validator::Validate;

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 2, max = 32, message = "Display name must be 2-32 characters"))]
    pub display_name: String,
}

/// Join room request (room name comes from the path)
#[derive(Debug, Deserialize)]
pub struct JoinRoomRequest {
    pub user_id: String,
}

/// Broadcast message request (room name comes from the path)
#[derive(Debug, Deserialize, Validate)]
pub struct BroadcastMessageRequest {
    pub user_id: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}

/// Private message request
#[derive(Debug, Deserialize, Validate)]
pub struct PrivateMessageRequest {
    pub from_user_id: String,
    pub to_user_id: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}
