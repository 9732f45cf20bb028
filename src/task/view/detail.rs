//! State of the task detail page.

use crate::task::domain::Task;

/// Events on the task detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailAction {
    /// The lookup finished; `None` means the identifier is unknown.
    Fetched(Option<Task>),
    /// A status change was submitted.
    UpdateStarted,
    /// The status change was committed.
    UpdateSucceeded(Task),
    /// The status change failed; the displayed task is unchanged.
    UpdateFailed,
}

/// What the detail page is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskDetailView {
    /// Waiting for the lookup.
    #[default]
    Loading,
    /// No task has the requested identifier.
    NotFound,
    /// A task is displayed.
    Loaded {
        /// Displayed task.
        task: Box<Task>,
        /// Whether a status change is in flight.
        updating: bool,
    },
}

impl TaskDetailView {
    /// Returns the next state after `action`.
    ///
    /// Update events arriving while no task is displayed leave the state as
    /// it is.
    #[must_use]
    pub fn apply(self, action: TaskDetailAction) -> Self {
        match (self, action) {
            (_, TaskDetailAction::Fetched(Some(task))) => Self::Loaded {
                task: Box::new(task),
                updating: false,
            },
            (_, TaskDetailAction::Fetched(None)) => Self::NotFound,
            (Self::Loaded { task, .. }, TaskDetailAction::UpdateStarted) => Self::Loaded {
                task,
                updating: true,
            },
            (Self::Loaded { .. }, TaskDetailAction::UpdateSucceeded(task)) => Self::Loaded {
                task: Box::new(task),
                updating: false,
            },
            (Self::Loaded { task, .. }, TaskDetailAction::UpdateFailed) => Self::Loaded {
                task,
                updating: false,
            },
            (state, _) => state,
        }
    }

    /// Returns the displayed task, if any.
    #[must_use]
    pub fn task(&self) -> Option<&Task> {
        match self {
            Self::Loaded { task, .. } => Some(task.as_ref()),
            Self::Loading | Self::NotFound => None,
        }
    }

    /// Returns `true` while a status change is in flight.
    #[must_use]
    pub const fn is_updating(&self) -> bool {
        matches!(self, Self::Loaded { updating: true, .. })
    }
}
