pub mod cache;
pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::ApplicationResult;

use crate::domain::user::UserId;
use error::ApplicationError;

/// Ids that can never exist (zero or negative) resolve to `NotFound` rather
/// than a validation failure.
pub(crate) fn resolve_user_id(raw: i64) -> ApplicationResult<UserId> {
    UserId::new(raw).map_err(|_| ApplicationError::not_found("user not found"))
}
