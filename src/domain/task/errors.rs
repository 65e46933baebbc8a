//! Domain errors for task operations.

use thiserror::Error;

use crate::domain::value_objects::TaskId;

/// Errors produced by task domain operations.
///
/// Each variant maps to one entry of the API error taxonomy; the mapping to
/// HTTP status codes lives in the API layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No task exists with the given identifier.
    #[error("Task not found")]
    TaskNotFound(TaskId),

    /// The caller does not own the task. Admin capability does not imply
    /// ownership; only the owner may mutate a task through the Task API.
    #[error("Not authorized")]
    NotOwner(TaskId),

    /// A required field is missing or blank.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
