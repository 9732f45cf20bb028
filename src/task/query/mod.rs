//! Task list querying.
//!
//! Filtering and sorting are pure functions over a borrowed task slice; they
//! never mutate their input and always allocate a fresh result.

mod dashboard;
mod engine;
mod filter;
mod sort;

pub use dashboard::{DashboardSnapshot, recent_tasks, urgent_tasks};
pub use engine::{compare, query, sort_tasks};
pub use filter::{
    ALL_KEYWORD, PriorityFilter, Selection, StatusFilter, TaskFilter, TypeFilter,
};
pub use sort::{ParseSortKeyError, SortDirection, SortKey, SortSpec};
