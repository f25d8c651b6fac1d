//! Fan-out Publisher
//!
//! Delivers one message to a room's log and to every current member's
//! mailbox, or to a single recipient's private mailbox.
//!
//! The member set is snapshotted under the directory lock before fan-out,
//! so membership changes concurrent with delivery can never tear the
//! iteration; every enqueue is a non-blocking ring-buffer send, so the
//! whole fan-out completes before `broadcast` returns and a slow
//! subscriber can only lose its own oldest pending messages, never stall
//! the room.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{ChatMessage, UserId};
use crate::shared::snowflake::SnowflakeGenerator;

use super::directory::{ChatError, Directory, DirectoryInner};

/// Message fan-out service.
pub struct Publisher {
    directory: Arc<Directory>,
    ids: Arc<SnowflakeGenerator>,
}

impl Publisher {
    pub fn new(directory: Arc<Directory>, ids: Arc<SnowflakeGenerator>) -> Self {
        Self { directory, ids }
    }

    /// Broadcast a message into a room.
    ///
    /// Appends to the room log, emits the room's message signal, then
    /// enqueues one copy into each member's broadcast mailbox and replay
    /// log. A room with zero members still records the message; there is
    /// just nobody to deliver it to.
    pub fn broadcast(
        &self,
        sender_id: UserId,
        room_name: &str,
        content: &str,
    ) -> Result<Arc<ChatMessage>, ChatError> {
        let mut inner = self.directory.lock();
        let DirectoryInner { users, rooms, .. } = &mut *inner;

        let sender = users
            .get(&sender_id)
            .ok_or(ChatError::UserNotFound(sender_id))?;
        let sender_name = sender.display_name.clone();

        let room = rooms
            .get_mut(room_name)
            .ok_or_else(|| ChatError::RoomNotFound(room_name.to_string()))?;

        let message = Arc::new(ChatMessage {
            id: self.ids.generate(),
            sender_id,
            sender_name,
            room: Some(room_name.to_string()),
            content: content.to_string(),
            timestamp: Utc::now(),
        });

        room.record_message(message.clone());

        // Snapshot the member set while still holding the lock
        let members = room.members.clone();
        for member_id in members {
            if let Some(member) = users.get_mut(&member_id) {
                member.broadcast_mailbox.deliver(message.clone());
                member.all_room_messages.push(message.clone());
            }
        }

        tracing::debug!(
            message_id = message.id,
            sender_id,
            room = room_name,
            "message broadcast to room"
        );
        Ok(message)
    }

    /// Send a direct message. The error names whichever side is missing.
    /// Delivery goes to the recipient's single private mailbox; every live
    /// private stream of that recipient is a subscriber of it. No history
    /// is kept for private messages.
    pub fn send_private(
        &self,
        from_id: UserId,
        to_id: UserId,
        content: &str,
    ) -> Result<Arc<ChatMessage>, ChatError> {
        let inner = self.directory.lock();

        let sender = inner
            .users
            .get(&from_id)
            .ok_or(ChatError::UserNotFound(from_id))?;
        let recipient = inner
            .users
            .get(&to_id)
            .ok_or(ChatError::UserNotFound(to_id))?;

        let message = Arc::new(ChatMessage {
            id: self.ids.generate(),
            sender_id: from_id,
            sender_name: sender.display_name.clone(),
            room: None,
            content: content.to_string(),
            timestamp: Utc::now(),
        });

        recipient.private_mailbox.deliver(message.clone());

        tracing::debug!(
            message_id = message.id,
            from_id,
            to_id,
            "private message delivered"
        );
        Ok(message)
    }
}
