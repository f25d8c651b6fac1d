//! Per-user mailbox.
//!
//! A mailbox is a bounded queue of pending messages shared by every live
//! subscribing connection of one user. It is backed by a
//! `tokio::sync::broadcast` channel: the user record owns the sender, each
//! attached stream holds its own receiver.
//!
//! Overflow policy: ring-buffer semantics. A receiver that falls more than
//! `capacity` messages behind loses its oldest pending entries
//! (`RecvError::Lagged`); the sender never blocks and never fails on a
//! slow subscriber.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::message::ChatMessage;

/// Bounded multi-consumer mailbox for one user.
#[derive(Debug)]
pub struct Mailbox {
    tx: broadcast::Sender<Arc<ChatMessage>>,
}

impl Mailbox {
    /// Create a mailbox with the given pending-message capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Enqueue a message for delivery. Non-blocking; returns `false` when
    /// nobody is currently subscribed (the message is simply dropped, the
    /// per-user replay log is the only history).
    pub fn deliver(&self, message: Arc<ChatMessage>) -> bool {
        self.tx.send(message).is_ok()
    }

    /// Attach a new consumer. Only messages delivered after this call are
    /// observed; snapshot replay is the multiplexer's job.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<ChatMessage>> {
        self.tx.subscribe()
    }

    /// Number of currently attached consumers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
