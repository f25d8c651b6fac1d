//! Room entity.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::message::{ChatMessage, UserId};

/// A named chat room: membership set, message log and two signal channels.
///
/// Rooms are created lazily on first join and live for the process
/// lifetime. The room is a passive holder; `record_message` and
/// `record_membership_change` must only be invoked while the caller holds
/// the directory lock, so the log and member set stay consistent with what
/// subscribers observe.
///
/// The signals use the observer pattern: every room-content stream holds
/// its own receiver, and each event carries its payload (the new message
/// or the updated member list) computed at emit time, so consumers never
/// re-acquire the lock to render it. Sends are non-blocking; with no
/// subscribers the event is dropped.
#[derive(Debug)]
pub struct Room {
    /// Unique case-sensitive key
    pub name: String,

    /// Member user ids, in join order
    pub members: Vec<UserId>,

    /// Every message broadcast into this room
    pub message_log: Vec<Arc<ChatMessage>>,

    message_signal: broadcast::Sender<Arc<ChatMessage>>,
    membership_signal: broadcast::Sender<Vec<String>>,
}

impl Room {
    /// Create an empty room with signal channels of the given capacity.
    pub fn new(name: impl Into<String>, signal_capacity: usize) -> Self {
        let (message_signal, _) = broadcast::channel(signal_capacity);
        let (membership_signal, _) = broadcast::channel(signal_capacity);
        Self {
            name: name.into(),
            members: Vec::new(),
            message_log: Vec::new(),
            message_signal,
            membership_signal,
        }
    }

    /// Append a message to the log and wake room-content subscribers.
    /// Caller must hold the directory lock.
    pub fn record_message(&mut self, message: Arc<ChatMessage>) {
        self.message_log.push(message.clone());
        let _ = self.message_signal.send(message);
    }

    /// Emit one membership-changed event carrying the current member list.
    /// Caller must hold the directory lock.
    pub fn record_membership_change(&self) {
        let _ = self.membership_signal.send(self.member_ids());
    }

    /// Member ids rendered for the wire, in join order.
    pub fn member_ids(&self) -> Vec<String> {
        self.members.iter().map(|id| id.to_string()).collect()
    }

    /// Subscribe to new-message events.
    pub fn subscribe_messages(&self) -> broadcast::Receiver<Arc<ChatMessage>> {
        self.message_signal.subscribe()
    }

    /// Subscribe to membership-changed events.
    pub fn subscribe_membership(&self) -> broadcast::Receiver<Vec<String>> {
        self.membership_signal.subscribe()
    }
}
