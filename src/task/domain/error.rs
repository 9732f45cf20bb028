//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// A required text field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Error returned while parsing a task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned while parsing a task type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);
