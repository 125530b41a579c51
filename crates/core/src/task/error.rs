use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors raised by task validation and state-transition rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("Task title too long (max 255 characters)")]
    TitleTooLong,
    #[error("Invalid task id: {0}")]
    InvalidId(i64),
    #[error("Task {0} is already completed")]
    AlreadyCompleted(i64),
}

/// Errors surfaced by the task service to the transport layer.
///
/// Validation failures, missing tasks and everything else stay distinct so the
/// transport can choose a status code without inspecting messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] TaskError),
    #[error("Task not found: {0}")]
    NotFound(i64),
    #[error("Internal error: {0}")]
    Internal(RepositoryError),
}

impl ServiceError {
    /// Maps a repository error for the given task id.
    ///
    /// `NotFound` becomes [`ServiceError::NotFound`]; every other store failure
    /// is internal.
    pub fn from_repository(err: RepositoryError, id: i64) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound(id),
            other => Self::Internal(other),
        }
    }
}
