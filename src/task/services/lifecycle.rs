//! Service layer for task creation, lookup, and status changes.

use crate::config::LifecycleConfig;
use crate::task::{
    domain::{
        CompletionPolicy, ParseTaskStatusError, StatusChange, Task, TaskDomainError, TaskDraft,
        TaskId, TaskPriority, TaskStatus, TaskType,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload mirroring the "new task" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    task_type: TaskType,
    priority: TaskPriority,
    assigned_to: String,
    location: String,
    computer_id: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required form fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        task_type: TaskType,
        priority: TaskPriority,
        assigned_to: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            task_type,
            priority,
            assigned_to: assigned_to.into(),
            location: location.into(),
            computer_id: None,
            due_date: None,
        }
    }

    /// Sets the asset identifier.
    #[must_use]
    pub fn with_computer_id(mut self, computer_id: impl Into<String>) -> Self {
        self.computer_id = Some(computer_id.into());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for moving a task to another status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    task_id: TaskId,
    status: String,
    actor: Option<String>,
}

impl ChangeStatusRequest {
    /// Creates a request from the raw status value chosen by the user.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
            actor: None,
        }
    }

    /// Creates a request for an already-typed status.
    #[must_use]
    pub fn to_status(task_id: TaskId, status: TaskStatus) -> Self {
        Self::new(task_id, status.as_str())
    }

    /// Records `actor` instead of the configured default.
    #[must_use]
    pub fn performed_by(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested status is not one of the known values.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// No task has the given identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    settings: LifecycleConfig,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with default lifecycle settings.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_settings(repository, clock, LifecycleConfig::default())
    }

    /// Creates a service with explicit lifecycle settings.
    #[must_use]
    pub const fn with_settings(
        repository: Arc<R>,
        clock: Arc<C>,
        settings: LifecycleConfig,
    ) -> Self {
        Self {
            repository,
            clock,
            settings,
        }
    }

    /// Returns the completion policy applied on status changes.
    #[must_use]
    pub const fn completion_policy(&self) -> CompletionPolicy {
        self.settings.completion_policy
    }

    /// Validates and stores a new pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a required field is blank
    /// or [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let mut draft = TaskDraft::new(
            &request.title,
            &request.description,
            request.task_type,
            request.priority,
            &request.assigned_to,
            &request.location,
        )?;
        if let Some(computer_id) = request.computer_id {
            draft = draft.with_computer_id(&computer_id);
        }
        if let Some(due_date) = request.due_date {
            draft = draft.with_due_date(due_date);
        }

        let task = Task::create(draft, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), priority = %task.priority(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        let found = self.repository.find_by_id(task_id).await?;
        if found.is_none() {
            debug!(%task_id, "task lookup missed");
        }
        Ok(found)
    }

    /// Moves a task to the requested status and records the change.
    ///
    /// Every status may move to every other status, including itself.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown status
    /// value, [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn change_status(&self, request: ChangeStatusRequest) -> TaskLifecycleResult<Task> {
        let status = TaskStatus::try_from(request.status.as_str())?;
        let actor = request
            .actor
            .unwrap_or_else(|| self.settings.default_actor.clone());
        let change = StatusChange::new(status, actor, self.clock.utc());
        let updated = self
            .repository
            .apply_status_change(request.task_id, change, self.settings.completion_policy)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(id) => TaskLifecycleError::NotFound(id),
                other => TaskLifecycleError::Repository(other),
            })?;

        info!(
            task_id = %updated.id(),
            to = %updated.status(),
            change = updated.history().last().map_or("", |entry| entry.description()),
            "task status changed"
        );
        Ok(updated)
    }
}
