//! Domain Entities

pub mod mailbox;
pub mod message;
pub mod room;
pub mod user;

pub use mailbox::Mailbox;
pub use message::{ChatMessage, MessageId, UserId};
pub use room::Room;
pub use user::User;
