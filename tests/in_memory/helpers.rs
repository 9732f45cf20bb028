//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use helpdesk::task::{
    adapters::{fixture::seed_tasks, memory::InMemoryTaskRepository},
    domain::{Task, TaskId},
    services::{TaskBoardService, TaskLifecycleService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Lifecycle service over the in-memory repository.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Board service over the in-memory repository.
pub type TestBoard = TaskBoardService<InMemoryTaskRepository>;

/// Anchor instant for seeded timestamps.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Repository pre-loaded with the seed collection.
#[fixture]
pub fn seeded() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::with_tasks(seed_tasks(anchor())))
}

/// Lifecycle and board services sharing one seeded repository.
#[fixture]
pub fn services(seeded: Arc<InMemoryTaskRepository>) -> (TestService, TestBoard) {
    (
        TaskLifecycleService::new(Arc::clone(&seeded), Arc::new(DefaultClock)),
        TaskBoardService::new(seeded),
    )
}

/// Returns the identifiers of `tasks`, in order.
pub fn ids(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}
