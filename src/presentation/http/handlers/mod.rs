//! Request Handlers

pub mod health;
pub mod message;
pub mod room;
pub mod stream;
pub mod user;

use crate::domain::UserId;
use crate::shared::error::AppError;
use crate::shared::snowflake;

/// Parse a user id taken from a path segment or request body.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    snowflake::from_string(raw).map_err(|_| AppError::BadRequest("Invalid user ID".into()))
}
