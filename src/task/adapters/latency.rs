//! Repository decorator that simulates network latency.

use async_trait::async_trait;
use std::time::Duration;
use tracing::trace;

use crate::config::LatencyConfig;
use crate::task::{
    domain::{CompletionPolicy, StatusChange, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryResult},
};

/// Waits a configured delay before delegating each call to `inner`.
#[derive(Debug, Clone)]
pub struct LatencyTaskRepository<R> {
    inner: R,
    latency: LatencyConfig,
}

impl<R> LatencyTaskRepository<R> {
    /// Wraps `inner` with the given delays.
    #[must_use]
    pub const fn new(inner: R, latency: LatencyConfig) -> Self {
        Self { inner, latency }
    }

    /// Returns the wrapped repository.
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.inner
    }
}

async fn pause(operation: &'static str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    trace!(operation, ?delay, "simulating backend latency");
    tokio::time::sleep(delay).await;
}

#[async_trait]
impl<R: TaskRepository> TaskRepository for LatencyTaskRepository<R> {
    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        pause("list", self.latency.list()).await;
        self.inner.list().await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        pause("find_by_id", self.latency.detail()).await;
        self.inner.find_by_id(id).await
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        pause("store", self.latency.create()).await;
        self.inner.store(task).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        pause("update", self.latency.update()).await;
        self.inner.update(task).await
    }

    async fn apply_status_change(
        &self,
        id: TaskId,
        change: StatusChange,
        policy: CompletionPolicy,
    ) -> TaskRepositoryResult<Task> {
        pause("apply_status_change", self.latency.update()).await;
        self.inner.apply_status_change(id, change, policy).await
    }
}
