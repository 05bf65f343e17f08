// src/config.rs
use crate::application::cache::CacheSettings;
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    db_max_connections: u32,
    listen_addr: String,
    redis_url: Option<String>,
    cache_ttl_secs: u64,
    cache_op_timeout: Duration,
    cache_queue_capacity: usize,
    request_timeout: Duration,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

/// Positive integer setting; absent or blank falls back to `default`.
fn positive<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer, got {raw:?}"
        ))),
    }
}

fn text<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl AppConfig {
    /// Build configuration from the process environment, after letting a
    /// `.env` file populate it when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                text(&lookup, "DB_USER", "postgres"),
                text(&lookup, "DB_PASSWORD", "postgres"),
                text(&lookup, "DB_HOST", "localhost"),
                positive::<u16, _>(&lookup, "DB_PORT", 5432)?,
                text(&lookup, "DB_NAME", "userdb"),
            ),
        };

        let listen_addr = match lookup("LISTEN_ADDR").filter(|v| !v.trim().is_empty()) {
            Some(addr) => addr,
            None => format!("0.0.0.0:{}", positive::<u16, _>(&lookup, "SERVER_PORT", 8080)?),
        };

        let redis_url = match lookup("REDIS_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => Some(url),
            None => match lookup("REDIS_HOST").filter(|v| !v.trim().is_empty()) {
                Some(host) => Some(format!(
                    "redis://{}:{}/0",
                    host.trim(),
                    positive::<u16, _>(&lookup, "REDIS_PORT", 6379)?
                )),
                None => None,
            },
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            database_url,
            db_max_connections: positive(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            listen_addr,
            redis_url,
            cache_ttl_secs: positive(&lookup, "CACHE_TTL_SECONDS", 300)?,
            cache_op_timeout: Duration::from_millis(positive(&lookup, "CACHE_OP_TIMEOUT_MS", 2000)?),
            cache_queue_capacity: positive(&lookup, "CACHE_QUEUE_CAPACITY", 1024)?,
            request_timeout: Duration::from_secs(positive(&lookup, "REQUEST_TIMEOUT_SECONDS", 15)?),
            allowed_origins,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// `None` disables caching entirely.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub fn cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs
    }

    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            op_timeout: self.cache_op_timeout,
            queue_capacity: self.cache_queue_capacity,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
