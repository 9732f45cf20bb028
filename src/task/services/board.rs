//! Read-side service backing the task list and dashboard pages.

use crate::config::DashboardConfig;
use crate::task::{
    domain::{DashboardMetrics, Task},
    ports::{TaskRepository, TaskRepositoryError},
    query::{DashboardSnapshot, SortSpec, TaskFilter, query},
    view::TaskListView,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board queries.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Lists, filters, and summarises tasks.
#[derive(Clone)]
pub struct TaskBoardService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    settings: DashboardConfig,
}

impl<R> TaskBoardService<R>
where
    R: TaskRepository,
{
    /// Creates a service with default dashboard settings.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_settings(repository, DashboardConfig::default())
    }

    /// Creates a service with explicit dashboard settings.
    #[must_use]
    pub const fn with_settings(repository: Arc<R>, settings: DashboardConfig) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Returns the tasks matching `filter`, ordered by `sort`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when listing fails.
    pub async fn list_tasks(
        &self,
        filter: &TaskFilter,
        sort: SortSpec,
    ) -> TaskBoardResult<Vec<Task>> {
        let tasks = self.repository.list().await?;
        let visible = query(&tasks, filter, sort);
        debug!(
            total = tasks.len(),
            visible = visible.len(),
            sort_key = %sort.key,
            "task list queried"
        );
        Ok(visible)
    }

    /// Returns the rows for the list page's current selections.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when listing fails.
    pub async fn list_view(&self, view: &TaskListView) -> TaskBoardResult<Vec<Task>> {
        self.list_tasks(view.filter(), view.sort()).await
    }

    /// Returns the dashboard counters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when listing fails.
    pub async fn metrics(&self) -> TaskBoardResult<DashboardMetrics> {
        let tasks = self.repository.list().await?;
        Ok(DashboardMetrics::from_tasks(&tasks))
    }

    /// Returns counters plus the urgent and recent task lists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when listing fails.
    pub async fn dashboard(&self) -> TaskBoardResult<DashboardSnapshot> {
        let tasks = self.repository.list().await?;
        Ok(DashboardSnapshot::from_tasks(
            &tasks,
            self.settings.urgent_limit,
            self.settings.recent_limit,
        ))
    }
}
