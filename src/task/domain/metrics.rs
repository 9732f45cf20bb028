//! Dashboard counters derived from a task collection.

use super::{Task, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

/// Per-status task counts plus urgent and total tallies.
///
/// Always recomputed from the current collection; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: usize,
    /// Tasks in [`TaskStatus::Cancelled`].
    pub cancelled: usize,
    /// Tasks with [`TaskPriority::Urgent`], whatever their status.
    pub urgent: usize,
    /// All tasks.
    pub total: usize,
}

impl DashboardMetrics {
    /// Tallies `tasks` in a single pass.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut metrics, task| {
            match task.status() {
                TaskStatus::Pending => metrics.pending += 1,
                TaskStatus::InProgress => metrics.in_progress += 1,
                TaskStatus::Completed => metrics.completed += 1,
                TaskStatus::Cancelled => metrics.cancelled += 1,
            }
            if task.priority() == TaskPriority::Urgent {
                metrics.urgent += 1;
            }
            metrics.total += 1;
            metrics
        })
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
            TaskStatus::Cancelled => self.cancelled,
        }
    }
}
