mod error;
mod events;
mod http_mapping;
mod operations;
mod requests;
mod types;

pub use error::{ServiceError, TaskError};
pub use events::{TaskAction, TaskEvent};
pub use http_mapping::service_error_to_status_code;
pub use operations::{
    ensure_not_completed, validate_create_request, validate_task_id, validate_title,
    MAX_TITLE_LENGTH,
};
pub use requests::{CreateTaskRequest, DeleteTaskResponse, TaskListResponse};
pub use types::Task;
