//! Status transitions and their audit trail.
//!
//! Transitions are unrestricted: the four statuses form a complete graph and
//! a self-transition is still recorded. A transition never mutates the input
//! task; it returns the next version with one history record appended.

use super::{HistoryId, Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happens to `completed_at` when a task moves to a status other than
/// [`TaskStatus::Completed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Keep the last completion timestamp.
    #[default]
    Preserve,
    /// Unset the completion timestamp.
    Clear,
}

/// A requested status change with the data needed to record it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Target status.
    pub status: TaskStatus,
    /// Name recorded as the history entry's performer.
    pub actor: String,
    /// Identifier for the appended history entry.
    pub history_id: HistoryId,
    /// Time of the change.
    pub at: DateTime<Utc>,
}

impl StatusChange {
    /// Creates a status change with a fresh history identifier.
    #[must_use]
    pub fn new(status: TaskStatus, actor: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            status,
            actor: actor.into(),
            history_id: HistoryId::new(),
            at,
        }
    }

    /// Uses a caller-supplied history identifier.
    #[must_use]
    pub const fn with_history_id(mut self, history_id: HistoryId) -> Self {
        self.history_id = history_id;
        self
    }
}

/// Returns `task` moved to `change.status`.
///
/// Sets `updated_at` to the change time, stamps `completed_at` when the target
/// is [`TaskStatus::Completed`] (otherwise applies `policy`), and appends one
/// history record describing the move.
#[must_use]
pub fn transition(task: &Task, change: StatusChange, policy: CompletionPolicy) -> Task {
    let mut next = task.clone();
    next.apply_status_change(change, policy);
    next
}
