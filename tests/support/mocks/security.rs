// tests/support/mocks/security.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use user_service::application::{ApplicationResult, ports::security::PasswordHasher};

const PREFIX: &str = "hash::";

/// 決定論的なハッシャー。`hash::<平文>` を返し、照合は完全一致で行う。
#[derive(Debug, Default)]
pub struct StrictPasswordHasher {
    hashes: AtomicUsize,
}

impl StrictPasswordHasher {
    pub fn hashed(password: &str) -> String {
        format!("{PREFIX}{password}")
    }

    pub fn hash_calls(&self) -> usize {
        self.hashes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        Ok(Self::hashed(password))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(Self::hashed(password) == expected_hash)
    }
}
