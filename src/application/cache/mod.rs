// src/application/cache/mod.rs
//! Cache-aside coordination for by-id reads.
//!
//! Reads consult the cache first and fall back to the store. Writes after a
//! miss and invalidations after a mutation are queued to a single writer task
//! and never awaited by the request. The cache fails open: errors and
//! timeouts are logged and otherwise ignored.

mod writer;

use crate::application::{dto::UserDto, ports::UserCachePort};
use crate::domain::user::UserId;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{
        mpsc::{self, error::TrySendError},
        oneshot,
    },
    task::JoinHandle,
    time::timeout,
};
use writer::{CacheOp, CacheWriter, apply_invalidate};

pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy)]
pub struct CacheSettings {
    /// Budget for each individual cache round-trip, foreground or background.
    pub op_timeout: Duration,
    pub queue_capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            op_timeout: DEFAULT_OP_TIMEOUT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

#[derive(Clone)]
pub struct CacheAside {
    cache: Arc<UserCachePort>,
    sender: mpsc::Sender<CacheOp>,
    op_timeout: Duration,
}

impl CacheAside {
    /// Starts the background writer. Must be called from within a Tokio runtime.
    pub fn spawn(cache: Arc<UserCachePort>, settings: CacheSettings) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(settings.queue_capacity.max(1));
        let writer = CacheWriter::new(Arc::clone(&cache), receiver, settings.op_timeout);
        let handle = tokio::spawn(writer.run());

        (
            Self {
                cache,
                sender,
                op_timeout: settings.op_timeout,
            },
            handle,
        )
    }

    /// Foreground read. Any failure degrades to a miss.
    pub async fn lookup(&self, id: UserId) -> Option<UserDto> {
        match timeout(self.op_timeout, self.cache.get(id)).await {
            Ok(Ok(Some(user))) => {
                tracing::debug!(user_id = %id, "cache hit");
                Some(user)
            }
            Ok(Ok(None)) => {
                tracing::debug!(user_id = %id, "cache miss");
                None
            }
            Ok(Err(err)) => {
                tracing::warn!(user_id = %id, error = %err, "cache read failed; using store");
                None
            }
            Err(_) => {
                tracing::warn!(user_id = %id, "cache read timed out; using store");
                None
            }
        }
    }

    /// Queue a write of a freshly loaded user. Dropped if the queue is full;
    /// the next read simply repopulates.
    pub fn populate(&self, user: UserDto) {
        match self.sender.try_send(CacheOp::Populate(user)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("cache queue full; skipping populate");
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("cache writer stopped; skipping populate");
            }
        }
    }

    /// Queue removal of a stale entry. Invalidations are never dropped: when
    /// the queue cannot take one it runs as a detached task instead.
    pub fn invalidate(&self, id: UserId) {
        if let Err(err) = self.sender.try_send(CacheOp::Invalidate(id)) {
            if matches!(err, TrySendError::Full(_)) {
                tracing::warn!(user_id = %id, "cache queue full; invalidating out of band");
            }
            let cache = Arc::clone(&self.cache);
            let op_timeout = self.op_timeout;
            tokio::spawn(async move {
                apply_invalidate(cache.as_ref(), id, op_timeout).await;
            });
        }
    }

    /// Wait until every operation queued so far has been applied.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.sender.send(CacheOp::Flush(ack)).await.is_ok() {
            let _ = done.await;
        }
    }

    pub async fn ping(&self) -> bool {
        matches!(timeout(self.op_timeout, self.cache.ping()).await, Ok(Ok(())))
    }
}
