use super::error::TaskError;
use super::requests::CreateTaskRequest;
use super::types::Task;

/// Maximum number of characters allowed in a task title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Validates a task title.
///
/// Titles made only of whitespace count as empty. Length is measured in
/// characters, not bytes.
pub fn validate_title(title: &str) -> Result<(), TaskError> {
    if title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(TaskError::TitleTooLong);
    }
    Ok(())
}

/// Validates a create request before it reaches the repository.
pub fn validate_create_request(request: &CreateTaskRequest) -> Result<(), TaskError> {
    validate_title(&request.title)
}

/// Validates that a task id is positive.
pub fn validate_task_id(id: i64) -> Result<(), TaskError> {
    if id <= 0 {
        return Err(TaskError::InvalidId(id));
    }
    Ok(())
}

/// Rejects completing a task that is already completed.
pub fn ensure_not_completed(task: &Task) -> Result<(), TaskError> {
    if task.completed {
        return Err(TaskError::AlreadyCompleted(task.id));
    }
    Ok(())
}
