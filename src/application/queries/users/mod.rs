mod get;
mod list;
mod search;
mod service;

pub use get::GetUserQuery;
pub use list::ListUsersQuery;
pub use search::SearchUsersQuery;
pub use service::UserQueryService;
