use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    query::{UserListQuery, UserSearchQuery},
    value_objects::{Email, UserId},
};
use async_trait::async_trait;

/// Persistence contract for the user aggregate. Each call is atomic on its own;
/// nothing here spans more than one statement in a transaction.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the email is already taken, even if the
    /// caller's pre-check passed.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn get_by_id(&self, id: UserId) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Full replace of the mutable columns. `NotFound` when the row is gone.
    async fn update(&self, user: &User) -> DomainResult<User>;

    async fn delete(&self, id: UserId) -> DomainResult<()>;

    async fn list(&self, query: &UserListQuery) -> DomainResult<(Vec<User>, u64)>;

    async fn search(&self, query: &UserSearchQuery) -> DomainResult<(Vec<User>, u64)>;
}
