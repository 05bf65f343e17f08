use crate::application::{ApplicationResult, dto::UserDto, ports::cache::UserCache};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Stand-in when no cache is configured. Every read misses and every write is
/// discarded.
#[derive(Default, Clone)]
pub struct NoopUserCache;

#[async_trait]
impl UserCache for NoopUserCache {
    async fn get(&self, _id: UserId) -> ApplicationResult<Option<UserDto>> {
        Ok(None)
    }

    async fn put(&self, _user: &UserDto) -> ApplicationResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _id: UserId) -> ApplicationResult<()> {
        Ok(())
    }

    async fn ping(&self) -> ApplicationResult<()> {
        Ok(())
    }
}
