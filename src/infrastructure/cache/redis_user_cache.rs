// src/infrastructure/cache/redis_user_cache.rs
use crate::application::ApplicationResult;
use crate::application::dto::UserDto;
use crate::application::error::ApplicationError;
use crate::application::ports::cache::UserCache;
use crate::domain::user::UserId;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

pub const DEFAULT_TTL_SECS: u64 = 300;

fn cache_key(id: UserId) -> String {
    format!("user:{id}")
}

fn redis_err(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::unexpected(format!("redis: {err}"))
}

/// Stores the public user view as JSON under `user:{id}` with a fixed TTL.
#[derive(Clone)]
pub struct RedisUserCache {
    pool: Pool,
    ttl_secs: u64,
}

impl RedisUserCache {
    /// Create a cache from a redis URL (e.g. redis://:password@host:6379/0).
    /// No connection is opened until first use.
    pub fn from_url(url: &str, ttl_secs: u64) -> Result<Self, ApplicationError> {
        let pool = DeadpoolConfig::from_url(url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(redis_err)?;

        Ok(Self {
            pool,
            ttl_secs: ttl_secs.max(1),
        })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool.get().await.map_err(redis_err)
    }
}

#[async_trait]
impl UserCache for RedisUserCache {
    async fn get(&self, id: UserId) -> ApplicationResult<Option<UserDto>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(cache_key(id)).await.map_err(redis_err)?;

        match raw {
            Some(json) => match serde_json::from_str::<UserDto>(&json) {
                Ok(user) => Ok(Some(user)),
                Err(err) => {
                    // Unreadable entries are treated as absent; the next
                    // populate overwrites them.
                    tracing::warn!(user_id = %id, error = %err, "discarding malformed cache entry");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn put(&self, user: &UserDto) -> ApplicationResult<()> {
        let id = UserId::new(user.id)?;
        let json = serde_json::to_string(user).map_err(redis_err)?;

        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(cache_key(id), json, self.ttl_secs)
            .await
            .map_err(redis_err)
    }

    async fn invalidate(&self, id: UserId) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(cache_key(id)).await.map_err(redis_err)
    }

    async fn ping(&self) -> ApplicationResult<()> {
        let mut conn = self.connection().await?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(redis_err)
    }
}
