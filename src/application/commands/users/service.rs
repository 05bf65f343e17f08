use std::sync::Arc;

use crate::application::{
    cache::CacheAside,
    error::{ApplicationError, ApplicationResult},
    ports::{security::PasswordHasher, time::Clock},
};
use crate::domain::user::{Email, UserId, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) cache: CacheAside,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        cache: CacheAside,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            clock,
            cache,
        }
    }

    /// Pre-check only: the unique constraint in the store remains the
    /// authoritative guard, and a lost race still surfaces as `Conflict`.
    pub(super) async fn ensure_email_available(
        &self,
        email: &Email,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match self.user_repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(ApplicationError::conflict(
                "user with this email already exists",
            )),
            _ => Ok(()),
        }
    }
}
