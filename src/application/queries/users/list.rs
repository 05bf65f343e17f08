use super::UserQueryService;
use crate::{
    application::{
        dto::{PaginatedResult, UserDto},
        error::ApplicationResult,
    },
    domain::user::{
        PageRequest, SortDirection, UserFilter, UserListQuery, UserSort, UserSortField,
    },
};

/// Raw list parameters as they arrive from the boundary. Nothing here is
/// rejected; out-of-range values are normalized.
#[derive(Debug, Clone, Default)]
pub struct ListUsersQuery {
    pub search: Option<String>,
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListUsersQuery {
    pub fn normalize(&self) -> UserListQuery {
        UserListQuery::new(
            UserFilter::new(self.search.as_deref(), self.age_min, self.age_max),
            UserSort::new(
                UserSortField::parse(self.sort.as_deref()),
                SortDirection::parse(self.order.as_deref()),
            ),
            PageRequest::normalize(self.page, self.limit),
        )
    }
}

impl UserQueryService {
    /// Never cached: filter/sort/page combinations form an unbounded key space.
    #[tracing::instrument(name = "user.list", skip_all)]
    pub async fn list_users(
        &self,
        query: ListUsersQuery,
    ) -> ApplicationResult<PaginatedResult<UserDto>> {
        let query = query.normalize();
        let (users, total) = self.user_repo.list(&query).await?;

        tracing::debug!(total, returned = users.len(), "listed users");
        Ok(PaginatedResult::new(users, total, query.page).map(UserDto::from))
    }
}
