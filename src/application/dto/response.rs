//! Response DTOs
//!
//! Data structures for API response bodies and stream event payloads.

use serde::Serialize;

use crate::application::services::UserProfile;
use crate::domain::ChatMessage;

/// A user profile as rendered on the wire (registration and lookup)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: String,
    pub display_name: String,
    pub created_at: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.id.to_string(),
            display_name: profile.display_name,
            created_at: profile.created_at.to_rfc3339(),
        }
    }
}

/// Known rooms response
#[derive(Debug, Serialize)]
pub struct RoomListResponse {
    pub rooms: Vec<String>,
}

/// A user's joined rooms, in join order
#[derive(Debug, Serialize)]
pub struct UserRoomsResponse {
    pub rooms: Vec<String>,
}

/// Join acknowledgment with the updated member list
#[derive(Debug, Serialize)]
pub struct JoinRoomResponse {
    pub room: String,
    pub members: Vec<String>,
}

/// A delivered message, as rendered on the wire (REST and SSE payloads)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub content: String,
    pub timestamp: String,
}

impl From<&ChatMessage> for MessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            sender_name: message.sender_name.clone(),
            room: message.room.clone(),
            content: message.content.clone(),
            timestamp: message.timestamp.to_rfc3339(),
        }
    }
}
