use super::UserQueryService;
use crate::application::{dto::UserDto, error::ApplicationResult, resolve_user_id};

pub struct GetUserQuery {
    pub user_id: i64,
}

impl UserQueryService {
    /// Cache-aside read: a hit returns immediately; a miss loads from the
    /// store and queues a repopulate without waiting for it.
    #[tracing::instrument(name = "user.get", skip_all, fields(user_id = query.user_id))]
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user_id = resolve_user_id(query.user_id)?;

        if let Some(cached) = self.cache.lookup(user_id).await {
            return Ok(cached);
        }

        let user = self.user_repo.get_by_id(user_id).await?;
        let dto = UserDto::from(user);
        self.cache.populate(dto.clone());

        Ok(dto)
    }
}
