//! User entity.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::mailbox::Mailbox;
use super::message::{ChatMessage, UserId};

/// A registered user and its delivery state.
///
/// Created on first connection with a display name and never destroyed
/// (process-lifetime). Structural fields (`room_memberships`,
/// `all_room_messages`) are mutated only while the directory lock is held;
/// the mailboxes are safe for concurrent delivery without it.
#[derive(Debug)]
pub struct User {
    /// Snowflake ID, immutable
    pub id: UserId,

    /// Display name, unique process-wide at creation time
    pub display_name: String,

    /// Names of joined rooms, in join order (append-only)
    pub room_memberships: Vec<String>,

    /// One bounded mailbox for room-broadcast messages, shared by all of
    /// this user's live connections
    pub broadcast_mailbox: Mailbox,

    /// One bounded mailbox for direct messages
    pub private_mailbox: Mailbox,

    /// Every broadcast message ever delivered to this user, for snapshot
    /// replay on late stream attach. Unbounded by design.
    pub all_room_messages: Vec<Arc<ChatMessage>>,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh user with empty state and mailboxes of the given
    /// capacity.
    pub fn new(id: UserId, display_name: impl Into<String>, mailbox_capacity: usize) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            room_memberships: Vec::new(),
            broadcast_mailbox: Mailbox::new(mailbox_capacity),
            private_mailbox: Mailbox::new(mailbox_capacity),
            all_room_messages: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
