//! Unit tests for the task module.


use crate::task::domain::{
    PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus, TaskType,
};
use chrono::{DateTime, TimeZone, Utc};

/// Fixed reference instant for deterministic timestamps.
pub(super) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Midnight UTC on the given January 2024 day.
pub(super) fn january(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Builds tasks with sensible defaults for tests.
#[derive(Debug, Clone)]
pub(super) struct TaskBuilder {
    data: PersistedTaskData,
}

impl TaskBuilder {
    pub(super) fn new(title: &str) -> Self {
        Self {
            data: PersistedTaskData {
                id: TaskId::new(),
                title: title.to_owned(),
                description: format!("{title} details"),
                status: TaskStatus::Pending,
                priority: TaskPriority::Medium,
                task_type: TaskType::Hardware,
                assigned_to: "Carlos Silva".to_owned(),
                computer_id: None,
                location: "Sala 101".to_owned(),
                created_at: epoch(),
                updated_at: epoch(),
                due_date: None,
                completed_at: None,
                history: Vec::new(),
            },
        }
    }

    pub(super) fn description(mut self, description: &str) -> Self {
        self.data.description = description.to_owned();
        self
    }

    pub(super) const fn status(mut self, status: TaskStatus) -> Self {
        self.data.status = status;
        self
    }

    pub(super) const fn priority(mut self, priority: TaskPriority) -> Self {
        self.data.priority = priority;
        self
    }

    pub(super) const fn task_type(mut self, task_type: TaskType) -> Self {
        self.data.task_type = task_type;
        self
    }

    pub(super) fn assigned_to(mut self, assigned_to: &str) -> Self {
        self.data.assigned_to = assigned_to.to_owned();
        self
    }

    pub(super) fn location(mut self, location: &str) -> Self {
        self.data.location = location.to_owned();
        self
    }

    pub(super) const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.data.created_at = created_at;
        self.data.updated_at = created_at;
        self
    }

    pub(super) const fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.data.due_date = Some(due_date);
        self
    }

    pub(super) const fn completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.data.completed_at = Some(completed_at);
        self
    }

    pub(super) fn build(self) -> Task {
        Task::from_persisted(self.data)
    }
}

/// Returns the titles of `tasks`, in order.
pub(super) fn titles(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::title).collect()
}
