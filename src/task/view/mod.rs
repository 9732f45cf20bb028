//! Page state for the task list and task detail screens.
//!
//! Each page is an immutable state value advanced by a pure `apply` function,
//! so the presentation layer holds no ambient mutable selections.

mod detail;
mod list;

pub use detail::{TaskDetailAction, TaskDetailView};
pub use list::{TaskListAction, TaskListView};
