// src/application/ports/cache.rs
use crate::application::{ApplicationResult, dto::UserDto};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Look-aside store for single users keyed by id. Implementations may fail
/// freely; callers treat every error as a miss or a no-op.
#[async_trait]
pub trait UserCache: Send + Sync {
    async fn get(&self, id: UserId) -> ApplicationResult<Option<UserDto>>;

    /// Stores the entry under the implementation's fixed TTL.
    async fn put(&self, user: &UserDto) -> ApplicationResult<()>;

    async fn invalidate(&self, id: UserId) -> ApplicationResult<()>;

    async fn ping(&self) -> ApplicationResult<()>;
}
