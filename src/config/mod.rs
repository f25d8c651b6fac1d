//! Configuration Management
//!
//! Settings loaded from config files and environment variables.

pub mod settings;

pub use settings::{
    CorsSettings, MailboxSettings, ServerSettings, Settings, SnowflakeSettings, StreamSettings,
};
