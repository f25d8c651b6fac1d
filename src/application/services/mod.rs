//! Application Services
//!
//! The three collaborating services of the message engine:
//!
//! - [`Directory`]: single source of truth for users and rooms, guarded by
//!   one exclusivity lock
//! - [`Publisher`]: fans one message out to a room log and every member
//!   mailbox
//! - [`Multiplexer`]: fans many per-connection sources into one ordered
//!   event stream

pub mod directory;
pub mod multiplexer;
pub mod publisher;

pub use directory::{ChatError, Directory, UserProfile};
pub use multiplexer::{EventStream, Multiplexer, StreamEvent};
pub use publisher::Publisher;
