// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of creation and modification timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
