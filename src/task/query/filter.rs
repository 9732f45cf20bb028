//! Filter selections for narrowing a task list.

use crate::task::domain::{Task, TaskPriority, TaskStatus, TaskType};

/// Keyword the dashboard uses for "no constraint".
pub const ALL_KEYWORD: &str = "all";

/// A filter dimension: either unconstrained or pinned to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// Imposes no constraint.
    All,
    /// Admits only this value.
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` when `value` passes this selection.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl<'a, T: TryFrom<&'a str>> TryFrom<&'a str> for Selection<T> {
    type Error = T::Error;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(Self::All);
        }
        T::try_from(value).map(Self::Only)
    }
}

/// Status constraint.
pub type StatusFilter = Selection<TaskStatus>;
/// Priority constraint.
pub type PriorityFilter = Selection<TaskPriority>;
/// Task type constraint.
pub type TypeFilter = Selection<TaskType>;

/// Combination of free-text search and status/priority/type constraints.
///
/// A task is retained only when every active constraint holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against title, description,
    /// assignee, and location. Empty matches everything.
    pub search: String,
    /// Status constraint.
    pub status: StatusFilter,
    /// Priority constraint.
    pub priority: PriorityFilter,
    /// Type constraint.
    pub task_type: TypeFilter,
}

impl TaskFilter {
    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Selection::Only(status);
        self
    }

    /// Restricts to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Selection::Only(priority);
        self
    }

    /// Restricts to one task type.
    #[must_use]
    pub const fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Selection::Only(task_type);
        self
    }

    /// Returns `true` when no constraint is active.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty()
            && self.status == Selection::All
            && self.priority == Selection::All
            && self.task_type == Selection::All
    }

    /// Returns `true` when `task` satisfies every active constraint.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.retains(&self.search.to_lowercase(), task)
    }

    /// Same as [`Self::matches`] with the search text already lowercased.
    pub(super) fn retains(&self, needle: &str, task: &Task) -> bool {
        self.status.admits(&task.status())
            && self.priority.admits(&task.priority())
            && self.task_type.admits(&task.task_type())
            && matches_search(needle, task)
    }
}

/// Lowercasing is Unicode-aware and accent-sensitive: "laboratório" does not
/// match "laboratorio".
fn matches_search(needle: &str, task: &Task) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        task.title(),
        task.description(),
        task.assigned_to(),
        task.location(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
