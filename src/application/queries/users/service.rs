use std::sync::Arc;

use crate::application::cache::CacheAside;
use crate::domain::user::UserRepository;

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) cache: CacheAside,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, cache: CacheAside) -> Self {
        Self { user_repo, cache }
    }
}
