//! Chat message entity.

use chrono::{DateTime, Utc};

/// Snowflake id of a registered user
pub type UserId = i64;

/// Snowflake id of a delivered message
pub type MessageId = i64;

/// A single chat message, either room-broadcast or private.
///
/// Messages are immutable once published; the publisher shares one
/// allocation between the room log, every recipient mailbox and every
/// per-user replay log via `Arc<ChatMessage>`.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Snowflake ID, unique for the process lifetime
    pub id: MessageId,

    /// Sending user
    pub sender_id: UserId,

    /// Display name of the sender at send time
    pub sender_name: String,

    /// Target room name; `None` for private messages
    pub room: Option<String>,

    /// Message body
    pub content: String,

    /// Publication timestamp
    pub timestamp: DateTime<Utc>,
}
