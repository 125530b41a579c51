mod error;
mod traits;

pub use error::{RepositoryError, Result, TASK_ENTITY};
pub use traits::{TaskRepository, TaskStore};
