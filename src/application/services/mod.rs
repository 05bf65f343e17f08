// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        cache::CacheAside,
        commands::users::UserCommandService,
        ports::{ClockPort, PasswordHasherPort},
        queries::users::UserQueryService,
    },
    domain::user::UserRepository,
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    cache: CacheAside,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
        cache: CacheAside,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&clock),
            cache.clone(),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            cache.clone(),
        ));

        Self {
            user_commands,
            user_queries,
            cache,
        }
    }

    pub fn cache(&self) -> &CacheAside {
        &self.cache
    }
}
