//! Dashboard projections: counters, urgent work, and recent activity.

use super::{SortKey, SortSpec, TaskFilter, query, sort_tasks};
use crate::task::domain::{DashboardMetrics, Task, TaskPriority, TaskStatus};
use serde::Serialize;

/// Everything the dashboard page shows, computed from one task collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    /// Status, urgent, and total counters.
    pub metrics: DashboardMetrics,
    /// Open urgent tasks, earliest deadline first.
    pub urgent: Vec<Task>,
    /// Most recently created tasks.
    pub recent: Vec<Task>,
}

impl DashboardSnapshot {
    /// Builds the snapshot, capping the urgent and recent lists.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], urgent_limit: usize, recent_limit: usize) -> Self {
        Self {
            metrics: DashboardMetrics::from_tasks(tasks),
            urgent: urgent_tasks(tasks, urgent_limit),
            recent: recent_tasks(tasks, recent_limit),
        }
    }
}

/// Urgent tasks still pending or in progress, earliest deadline first.
#[must_use]
pub fn urgent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut open: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            task.priority() == TaskPriority::Urgent
                && matches!(task.status(), TaskStatus::Pending | TaskStatus::InProgress)
        })
        .cloned()
        .collect();
    sort_tasks(&mut open, SortSpec::ascending(SortKey::DueDate));
    open.truncate(limit);
    open
}

/// The `limit` newest tasks.
#[must_use]
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut recent = query(tasks, &TaskFilter::default(), SortSpec::newest_first());
    recent.truncate(limit);
    recent
}
