// src/application/cache/writer.rs
use crate::application::{dto::UserDto, ports::cache::UserCache};
use crate::domain::user::UserId;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{mpsc, oneshot},
    time::timeout,
};

pub(super) enum CacheOp {
    Populate(UserDto),
    Invalidate(UserId),
    /// Acknowledged once every operation queued before it has been applied.
    Flush(oneshot::Sender<()>),
}

/// Dedicated consumer of the cache queue. Runs until every sender is dropped.
pub(super) struct CacheWriter {
    cache: Arc<dyn UserCache>,
    receiver: mpsc::Receiver<CacheOp>,
    op_timeout: Duration,
}

impl CacheWriter {
    pub(super) fn new(
        cache: Arc<dyn UserCache>,
        receiver: mpsc::Receiver<CacheOp>,
        op_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            receiver,
            op_timeout,
        }
    }

    pub(super) async fn run(mut self) {
        while let Some(op) = self.receiver.recv().await {
            match op {
                CacheOp::Populate(user) => {
                    apply_populate(self.cache.as_ref(), &user, self.op_timeout).await;
                }
                CacheOp::Invalidate(id) => {
                    apply_invalidate(self.cache.as_ref(), id, self.op_timeout).await;
                }
                CacheOp::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }
        tracing::debug!("cache writer stopped");
    }
}

pub(super) async fn apply_populate(cache: &dyn UserCache, user: &UserDto, op_timeout: Duration) {
    match timeout(op_timeout, cache.put(user)).await {
        Ok(Ok(())) => tracing::debug!(user_id = user.id, "cache populated"),
        Ok(Err(err)) => tracing::warn!(user_id = user.id, error = %err, "failed to cache user"),
        Err(_) => tracing::warn!(user_id = user.id, "cache populate timed out"),
    }
}

pub(super) async fn apply_invalidate(cache: &dyn UserCache, id: UserId, op_timeout: Duration) {
    match timeout(op_timeout, cache.invalidate(id)).await {
        Ok(Ok(())) => tracing::debug!(user_id = %id, "cache entry invalidated"),
        Ok(Err(err)) => {
            tracing::warn!(user_id = %id, error = %err, "failed to invalidate cached user");
        }
        Err(_) => tracing::warn!(user_id = %id, "cache invalidation timed out"),
    }
}
