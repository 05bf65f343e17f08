pub mod pagination;
pub mod serde_time;
pub mod users;

pub use pagination::PaginatedResult;
pub use users::UserDto;
