//! Audit records appended to a task whenever its status changes.

use super::{HistoryId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action label recorded for status changes.
pub const STATUS_CHANGED_ACTION: &str = "Status changed";

/// Immutable audit entry in a task's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskHistory {
    id: HistoryId,
    action: String,
    description: String,
    performed_by: String,
    timestamp: DateTime<Utc>,
}

impl TaskHistory {
    /// Creates a history record from its parts.
    #[must_use]
    pub fn new(
        id: HistoryId,
        action: impl Into<String>,
        description: impl Into<String>,
        performed_by: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            action: action.into(),
            description: description.into(),
            performed_by: performed_by.into(),
            timestamp,
        }
    }

    /// Creates the record describing a move from `from` to `to`.
    #[must_use]
    pub fn status_changed(
        id: HistoryId,
        from: TaskStatus,
        to: TaskStatus,
        performed_by: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            id,
            STATUS_CHANGED_ACTION,
            format!("from {from} to {to}"),
            performed_by,
            timestamp,
        )
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> HistoryId {
        self.id
    }

    /// Returns the short action label.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the human-readable detail.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the name of whoever performed the action.
    #[must_use]
    pub fn performed_by(&self) -> &str {
        &self.performed_by
    }

    /// Returns when the action happened.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
