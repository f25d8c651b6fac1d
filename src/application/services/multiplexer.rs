//! Stream Multiplexer
//!
//! Builds, for one live subscribing connection, a single ordered stream of
//! tagged events out of that connection's sources: a user's broadcast or
//! private mailbox, or a room's message and membership signals.
//!
//! Attachment is atomic: the snapshot of existing state and the channel
//! subscription happen under the same directory lock the publisher writes
//! under, so a late subscriber sees every message published before attach
//! exactly once in the snapshot and every later one exactly once live.
//!
//! The multiplexer spawns no tasks. Dropping the returned stream drops
//! every receiver it holds, so nothing can outlive the connection.

use std::sync::Arc;

use futures::stream::{self, BoxStream};
use futures::StreamExt;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

use crate::application::dto::response::MessageResponse;
use crate::domain::UserId;
use serde::Serialize;

use super::directory::{ChatError, Directory};

/// One ordered sequence of events for a single subscribing connection.
pub type EventStream = BoxStream<'static, StreamEvent>;

/// Tagged events emitted on a subscription, mirroring the wire event names.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StreamEvent {
    /// Snapshot: every broadcast message delivered to the user so far
    RoomMessagesUser { messages: Vec<MessageResponse> },

    /// One new broadcast message delivered to the user's mailbox
    NewRoomMessage { message: MessageResponse },

    /// Snapshot: the full message log of a room
    AllMessages { messages: Vec<MessageResponse> },

    /// Snapshot: the current member list of a room
    AllUsers { members: Vec<String> },

    /// One new message in a watched room
    NewMessage { message: MessageResponse },

    /// Membership changed in a watched room; carries the new member list
    NewUser { members: Vec<String> },

    /// One direct message to the subscribing user
    PrivateMessage { message: MessageResponse },
}

impl StreamEvent {
    /// The SSE event name for this payload
    pub fn event_name(&self) -> &'static str {
        match self {
            StreamEvent::RoomMessagesUser { .. } => "room-messages-user",
            StreamEvent::NewRoomMessage { .. } => "new-room-message",
            StreamEvent::AllMessages { .. } => "all-messages",
            StreamEvent::AllUsers { .. } => "all-users",
            StreamEvent::NewMessage { .. } => "new-message",
            StreamEvent::NewUser { .. } => "new-user",
            StreamEvent::PrivateMessage { .. } => "private-message",
        }
    }
}

/// Fan-in service: one instance serves every connection.
pub struct Multiplexer {
    directory: Arc<Directory>,
}

impl Multiplexer {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self { directory }
    }

    /// Subscribe to every broadcast message delivered to a user.
    ///
    /// Emits one `room-messages-user` snapshot of the user's full replay
    /// log, then `new-room-message` events as the mailbox fills.
    pub fn user_messages(&self, user_id: UserId) -> Result<EventStream, ChatError> {
        let (snapshot, rx) = {
            let inner = self.directory.lock();
            let user = inner
                .users
                .get(&user_id)
                .ok_or(ChatError::UserNotFound(user_id))?;
            let messages: Vec<MessageResponse> = user
                .all_room_messages
                .iter()
                .map(|m| MessageResponse::from(m.as_ref()))
                .collect();
            (messages, user.broadcast_mailbox.subscribe())
        };

        let stream_id = Uuid::new_v4();
        tracing::debug!(%stream_id, user_id, "user message stream attached");

        let initial = stream::iter([StreamEvent::RoomMessagesUser { messages: snapshot }]);
        let live = BroadcastStream::new(rx).filter_map(move |item| {
            futures::future::ready(accept(item, stream_id).map(|message| {
                StreamEvent::NewRoomMessage {
                    message: MessageResponse::from(message.as_ref()),
                }
            }))
        });

        Ok(initial.chain(live).boxed())
    }

    /// Subscribe to a user's direct messages. Live events only; no history
    /// is kept for private messages.
    pub fn private_messages(&self, user_id: UserId) -> Result<EventStream, ChatError> {
        let rx = {
            let inner = self.directory.lock();
            let user = inner
                .users
                .get(&user_id)
                .ok_or(ChatError::UserNotFound(user_id))?;
            user.private_mailbox.subscribe()
        };

        let stream_id = Uuid::new_v4();
        tracing::debug!(%stream_id, user_id, "private message stream attached");

        let live = BroadcastStream::new(rx).filter_map(move |item| {
            futures::future::ready(accept(item, stream_id).map(|message| {
                StreamEvent::PrivateMessage {
                    message: MessageResponse::from(message.as_ref()),
                }
            }))
        });

        Ok(live.boxed())
    }

    /// Subscribe to a room's live contents.
    ///
    /// Emits `all-messages` and `all-users` snapshots, then merges the
    /// room's message and membership signals first-ready-first-served.
    pub fn room_content(&self, user_id: UserId, room_name: &str) -> Result<EventStream, ChatError> {
        let (log, members, message_rx, membership_rx) = {
            let inner = self.directory.lock();
            if !inner.users.contains_key(&user_id) {
                return Err(ChatError::UserNotFound(user_id));
            }
            let room = inner
                .rooms
                .get(room_name)
                .ok_or_else(|| ChatError::RoomNotFound(room_name.to_string()))?;
            let log: Vec<MessageResponse> = room
                .message_log
                .iter()
                .map(|m| MessageResponse::from(m.as_ref()))
                .collect();
            (
                log,
                room.member_ids(),
                room.subscribe_messages(),
                room.subscribe_membership(),
            )
        };

        let stream_id = Uuid::new_v4();
        tracing::debug!(%stream_id, user_id, room = room_name, "room content stream attached");

        let initial = stream::iter([
            StreamEvent::AllMessages { messages: log },
            StreamEvent::AllUsers { members },
        ]);
        let messages = BroadcastStream::new(message_rx).filter_map(move |item| {
            futures::future::ready(accept(item, stream_id).map(|message| StreamEvent::NewMessage {
                message: MessageResponse::from(message.as_ref()),
            }))
        });
        let membership = BroadcastStream::new(membership_rx).filter_map(move |item| {
            futures::future::ready(
                accept(item, stream_id).map(|members| StreamEvent::NewUser { members }),
            )
        });

        Ok(initial.chain(stream::select(messages, membership)).boxed())
    }
}

/// Unwrap one broadcast item; a lagged receiver loses its oldest pending
/// events, which is logged and skipped rather than killing the stream.
fn accept<T>(item: Result<T, BroadcastStreamRecvError>, stream_id: Uuid) -> Option<T> {
    match item {
        Ok(value) => Some(value),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!(%stream_id, skipped, "subscriber lagged; oldest pending events dropped");
            None
        }
    }
}
