//! State of the task list page.

use crate::task::domain::Task;
use crate::task::query::{
    PriorityFilter, SortKey, SortSpec, StatusFilter, TaskFilter, TypeFilter, query,
};

/// User intent on the task list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListAction {
    /// The task collection finished loading.
    Loaded,
    /// Search box contents changed.
    Search(String),
    /// Status selector changed.
    FilterStatus(StatusFilter),
    /// Priority selector changed.
    FilterPriority(PriorityFilter),
    /// Type selector changed.
    FilterType(TypeFilter),
    /// A sortable column header was clicked.
    SortBy(SortKey),
    /// All filters reset; sort order is kept.
    ClearFilters,
}

/// Search, filter, and sort selections for the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListView {
    loading: bool,
    filter: TaskFilter,
    sort: SortSpec,
}

impl Default for TaskListView {
    fn default() -> Self {
        Self {
            loading: true,
            filter: TaskFilter::default(),
            sort: SortSpec::default(),
        }
    }
}

impl TaskListView {
    /// Returns the next state after `action`.
    #[must_use]
    pub fn apply(self, action: TaskListAction) -> Self {
        match action {
            TaskListAction::Loaded => Self {
                loading: false,
                ..self
            },
            TaskListAction::Search(search) => Self {
                filter: TaskFilter {
                    search,
                    ..self.filter
                },
                ..self
            },
            TaskListAction::FilterStatus(status) => Self {
                filter: TaskFilter {
                    status,
                    ..self.filter
                },
                ..self
            },
            TaskListAction::FilterPriority(priority) => Self {
                filter: TaskFilter {
                    priority,
                    ..self.filter
                },
                ..self
            },
            TaskListAction::FilterType(task_type) => Self {
                filter: TaskFilter {
                    task_type,
                    ..self.filter
                },
                ..self
            },
            TaskListAction::SortBy(key) => Self {
                sort: self.sort.toggled(key),
                ..self
            },
            TaskListAction::ClearFilters => Self {
                filter: TaskFilter::default(),
                ..self
            },
        }
    }

    /// Returns `true` until the collection has loaded.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the active sort.
    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Returns the rows to render for `tasks`.
    #[must_use]
    pub fn visible(&self, tasks: &[Task]) -> Vec<Task> {
        query(tasks, &self.filter, self.sort)
    }
}
