//! # Domain Layer
//!
//! Core entities of the chat backend, independent of any framework or
//! transport concern.
//!
//! - **entities**: User, Room, ChatMessage, Mailbox
//!
//! Entities here are passive holders: all structural mutation happens
//! through the application layer while the directory lock is held.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
