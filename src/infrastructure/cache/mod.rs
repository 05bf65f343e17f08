// src/infrastructure/cache/mod.rs
mod noop;
mod redis_user_cache;

pub use noop::NoopUserCache;
pub use redis_user_cache::{DEFAULT_TTL_SECS, RedisUserCache};
