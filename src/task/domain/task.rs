//! Task aggregate root and the values used to create it.

use super::{
    CompletionPolicy, StatusChange, TaskDomainError, TaskHistory, TaskId, TaskPriority,
    TaskStatus, TaskType,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated input for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    task_type: TaskType,
    priority: TaskPriority,
    assigned_to: String,
    location: String,
    computer_id: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft from the required task fields.
    ///
    /// Text fields are trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyField`] naming the first required text
    /// field that is empty after trimming.
    pub fn new(
        title: &str,
        description: &str,
        task_type: TaskType,
        priority: TaskPriority,
        assigned_to: &str,
        location: &str,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: required("title", title)?,
            description: required("description", description)?,
            task_type,
            priority,
            assigned_to: required("assigned_to", assigned_to)?,
            location: required("location", location)?,
            computer_id: None,
            due_date: None,
        })
    }

    /// Sets the asset identifier; blank values are ignored.
    #[must_use]
    pub fn with_computer_id(mut self, computer_id: &str) -> Self {
        let trimmed = computer_id.trim();
        self.computer_id = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

fn required(field: &'static str, value: &str) -> Result<String, TaskDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    task_type: TaskType,
    assigned_to: String,
    computer_id: Option<String>,
    location: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    history: Vec<TaskHistory>,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored task identifier.
    pub id: TaskId,
    /// Short summary.
    pub title: String,
    /// Full problem description.
    pub description: String,
    /// Current status.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Work category.
    pub task_type: TaskType,
    /// Responsible technician.
    pub assigned_to: String,
    /// Asset identifier, if the task concerns one machine.
    pub computer_id: Option<String>,
    /// Where the work happens.
    pub location: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Deadline, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Last completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Audit trail in chronological order.
    pub history: Vec<TaskHistory>,
}

impl Task {
    /// Creates a pending task from a validated draft.
    #[must_use]
    pub fn create(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Pending,
            priority: draft.priority,
            task_type: draft.task_type,
            assigned_to: draft.assigned_to,
            computer_id: draft.computer_id,
            location: draft.location,
            created_at: timestamp,
            updated_at: timestamp,
            due_date: draft.due_date,
            completed_at: None,
            history: Vec::new(),
        }
    }

    /// Reconstructs a task from storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            task_type: data.task_type,
            assigned_to: data.assigned_to,
            computer_id: data.computer_id,
            location: data.location,
            created_at: data.created_at,
            updated_at: data.updated_at,
            due_date: data.due_date,
            completed_at: data.completed_at,
            history: data.history,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the short summary.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the full description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the urgency.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the work category.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the responsible technician.
    #[must_use]
    pub fn assigned_to(&self) -> &str {
        &self.assigned_to
    }

    /// Returns the asset identifier, if any.
    #[must_use]
    pub fn computer_id(&self) -> Option<&str> {
        self.computer_id.as_deref()
    }

    /// Returns where the work happens.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the last completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the audit trail, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TaskHistory] {
        &self.history
    }

    /// Moves the task to a new status and records the change.
    pub(crate) fn apply_status_change(&mut self, change: StatusChange, policy: CompletionPolicy) {
        let previous = self.status;
        self.status = change.status;
        self.updated_at = change.at;
        if change.status == TaskStatus::Completed {
            self.completed_at = Some(change.at);
        } else if policy == CompletionPolicy::Clear {
            self.completed_at = None;
        }
        self.history.push(TaskHistory::status_changed(
            change.history_id,
            previous,
            change.status,
            change.actor,
            change.at,
        ));
    }
}
