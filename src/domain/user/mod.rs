// src/domain/user/mod.rs
pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, ProfileChanges, User, UserDraft};
pub use query::{
    PageRequest, SortDirection, UserFilter, UserListQuery, UserSearchQuery, UserSort,
    UserSortField,
};
pub use repository::UserRepository;
pub use value_objects::{Age, Email, PasswordHash, UserId, UserName};
