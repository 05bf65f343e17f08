// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One-way credential hashing. Failures of the underlying primitive are
/// reported as `Unexpected`, never as user input errors.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on a mismatch; `Err` only when the stored hash is unusable.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
