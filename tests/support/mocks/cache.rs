// tests/support/mocks/cache.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use user_service::application::{
    ApplicationResult, dto::UserDto, error::ApplicationError, ports::cache::UserCache,
};
use user_service::domain::user::UserId;

/// ヒット/ミス数を記録するインメモリキャッシュ。`set_failing(true)` で
/// すべての操作をエラーにできる。
#[derive(Default)]
pub struct InMemoryUserCache {
    entries: Mutex<HashMap<i64, UserDto>>,
    failing: AtomicBool,
    hits: AtomicUsize,
    misses: AtomicUsize,
    puts: AtomicUsize,
    invalidations: AtomicUsize,
}

impl InMemoryUserCache {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// キャッシュへ直接書き込む（古いエントリの再現用）
    pub fn seed(&self, user: UserDto) {
        self.entries.lock().unwrap().insert(user.id, user);
    }

    pub fn entry(&self, id: i64) -> Option<UserDto> {
        self.entries.lock().unwrap().get(&id).cloned()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::SeqCst)
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }

    fn check(&self) -> ApplicationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ApplicationError::unexpected("cache unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserCache for InMemoryUserCache {
    async fn get(&self, id: UserId) -> ApplicationResult<Option<UserDto>> {
        self.check()?;
        let found = self.entries.lock().unwrap().get(&i64::from(id)).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::SeqCst);
        } else {
            self.misses.fetch_add(1, Ordering::SeqCst);
        }
        Ok(found)
    }

    async fn put(&self, user: &UserDto) -> ApplicationResult<()> {
        self.check()?;
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(user.id, user.clone());
        Ok(())
    }

    async fn invalidate(&self, id: UserId) -> ApplicationResult<()> {
        self.check()?;
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }

    async fn ping(&self) -> ApplicationResult<()> {
        self.check()
    }
}
