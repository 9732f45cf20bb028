//! Combined filter and sort over a task collection.

use super::{SortKey, SortSpec, TaskFilter};
use crate::task::domain::Task;
use std::cmp::Ordering;

/// Returns the tasks matching `filter`, ordered by `sort`.
///
/// The input is left untouched and the sort is stable, so calling this twice
/// with the same arguments yields equal results.
#[must_use]
pub fn query(tasks: &[Task], filter: &TaskFilter, sort: SortSpec) -> Vec<Task> {
    let needle = filter.search.to_lowercase();
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.retains(&needle, task))
        .cloned()
        .collect();
    sort_tasks(&mut visible, sort);
    visible
}

/// Stable in-place sort of `tasks` by `sort`.
pub fn sort_tasks(tasks: &mut [Task], sort: SortSpec) {
    tasks.sort_by(|a, b| compare(a, b, sort));
}

/// Compares two tasks under `sort`.
///
/// Undated tasks sort after dated ones for [`SortKey::DueDate`] whichever the
/// direction.
#[must_use]
pub fn compare(a: &Task, b: &Task, sort: SortSpec) -> Ordering {
    match sort.key {
        SortKey::CreatedAt => sort.direction.orient(a.created_at().cmp(&b.created_at())),
        SortKey::DueDate => match (a.due_date(), b.due_date()) {
            (Some(left), Some(right)) => sort.direction.orient(left.cmp(&right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Priority => sort
            .direction
            .orient(a.priority().rank().cmp(&b.priority().rank())),
    }
}
