//! Application services for task orchestration.

mod board;
mod lifecycle;

pub use board::{TaskBoardError, TaskBoardResult, TaskBoardService};
pub use lifecycle::{
    ChangeStatusRequest, CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
