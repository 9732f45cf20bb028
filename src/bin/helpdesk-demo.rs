//! Runs the helpdesk core against the seeded task collection.
//!
//! Usage:
//!
//! ```text
//! helpdesk-demo
//! ```
//!
//! Configuration is read from `helpdesk.toml` in the working directory and
//! `HELPDESK_*` environment variables, for example
//! `HELPDESK_LATENCY__LIST_MS=0`. Log output is controlled with `RUST_LOG`.

use std::sync::Arc;

use helpdesk::config::HelpdeskConfig;
use helpdesk::task::{
    adapters::{LatencyTaskRepository, fixture::seed_tasks, memory::InMemoryTaskRepository},
    domain::{TaskPriority, TaskStatus},
    query::{Selection, SortKey},
    services::{ChangeStatusRequest, TaskBoardService, TaskLifecycleService},
    view::{TaskListAction, TaskListView},
};
use mockable::{Clock, DefaultClock};
use tokio::runtime::Builder;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = HelpdeskConfig::load()?;
    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(run(config))
}

async fn run(config: HelpdeskConfig) -> Result<(), BoxError> {
    let HelpdeskConfig {
        latency,
        lifecycle,
        dashboard,
    } = config;
    let clock = Arc::new(DefaultClock);
    let seeded = InMemoryTaskRepository::with_tasks(seed_tasks(clock.utc()));
    let repository = Arc::new(LatencyTaskRepository::new(seeded, latency));
    let board = TaskBoardService::with_settings(Arc::clone(&repository), dashboard);
    let lifecycle = TaskLifecycleService::with_settings(repository, clock, lifecycle);

    let snapshot = board.dashboard().await?;
    info!(
        pending = snapshot.metrics.pending,
        in_progress = snapshot.metrics.in_progress,
        completed = snapshot.metrics.completed,
        cancelled = snapshot.metrics.cancelled,
        urgent = snapshot.metrics.urgent,
        total = snapshot.metrics.total,
        "dashboard loaded"
    );
    debug!(snapshot = %serde_json::to_string(&snapshot)?, "dashboard snapshot");
    for task in &snapshot.urgent {
        info!(task_id = %task.id(), title = task.title(), status = task.status().label(), "urgent");
    }

    let view = TaskListView::default()
        .apply(TaskListAction::Loaded)
        .apply(TaskListAction::FilterPriority(Selection::Only(
            TaskPriority::Urgent,
        )))
        .apply(TaskListAction::SortBy(SortKey::DueDate))
        .apply(TaskListAction::SortBy(SortKey::DueDate));
    let rows = board.list_view(&view).await?;
    info!(rows = rows.len(), sort = %view.sort().key, "urgent tasks listed");

    let Some(next) = rows
        .iter()
        .find(|task| task.status() == TaskStatus::Pending)
    else {
        warn!("no pending urgent task to start");
        return Ok(());
    };
    let started = lifecycle
        .change_status(ChangeStatusRequest::to_status(
            next.id(),
            TaskStatus::InProgress,
        ))
        .await?;
    info!(
        task_id = %started.id(),
        history = started.history().len(),
        "started work on urgent task"
    );

    let metrics = board.metrics().await?;
    info!(
        pending = metrics.pending,
        in_progress = metrics.in_progress,
        "dashboard refreshed"
    );
    Ok(())
}
