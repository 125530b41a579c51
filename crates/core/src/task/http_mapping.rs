//! Pure functions for mapping service errors to HTTP status codes.

use super::{ServiceError, TaskError};

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `Validation(AlreadyCompleted)` -> 409 (Conflict)
/// - any other `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Internal` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use taskcache_core::task::{service_error_to_status_code, ServiceError};
///
/// assert_eq!(service_error_to_status_code(&ServiceError::NotFound(1)), 404);
/// ```
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::Validation(TaskError::AlreadyCompleted(_)) => 409,
        ServiceError::Validation(_) => 400,
        ServiceError::NotFound(_) => 404,
        ServiceError::Internal(_) => 500,
    }
}
