use super::UserQueryService;
use crate::{
    application::{
        dto::{PaginatedResult, UserDto},
        error::ApplicationResult,
    },
    domain::user::{PageRequest, UserSearchQuery},
};

pub struct SearchUsersQuery {
    pub keyword: String,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl UserQueryService {
    #[tracing::instrument(name = "user.search", skip_all)]
    pub async fn search_users(
        &self,
        query: SearchUsersQuery,
    ) -> ApplicationResult<PaginatedResult<UserDto>> {
        let page = PageRequest::normalize(query.page, query.limit);
        let query = UserSearchQuery::new(&query.keyword, page)?;

        let (users, total) = self.user_repo.search(&query).await?;
        Ok(PaginatedResult::new(users, total, page).map(UserDto::from))
    }
}
