//! Domain model for helpdesk tasks.
//!
//! Tasks carry status, priority, and type metadata plus an append-only audit
//! trail. Everything here is synchronous and free of infrastructure concerns.

mod classification;
mod error;
mod history;
mod ids;
mod lifecycle;
mod metrics;
mod task;

pub use classification::{TaskPriority, TaskStatus, TaskType};
pub use error::{
    ParseTaskPriorityError, ParseTaskStatusError, ParseTaskTypeError, TaskDomainError,
};
pub use history::{STATUS_CHANGED_ACTION, TaskHistory};
pub use ids::{HistoryId, TaskId};
pub use lifecycle::{CompletionPolicy, StatusChange, transition};
pub use metrics::DashboardMetrics;
pub use task::{PersistedTaskData, Task, TaskDraft};
