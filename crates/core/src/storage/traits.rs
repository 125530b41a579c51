use async_trait::async_trait;

use crate::task::{CreateTaskRequest, Task};

use super::Result;

/// Statement-level access to the store of record.
///
/// Implementations run exactly one statement per call and never retry. A
/// missing row is reported as [`RepositoryError::NotFound`](super::RepositoryError::NotFound),
/// never as a connection or query failure.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a new task and returns it with its id and timestamps populated.
    async fn insert_task(&self, title: &str, description: &str) -> Result<Task>;

    /// Fetches a single task by id.
    async fn find_task(&self, id: i64) -> Result<Task>;

    /// Fetches every task ordered by ascending id.
    async fn find_all_tasks(&self) -> Result<Vec<Task>>;

    /// Marks a task completed and refreshes `updated_at` in one statement.
    async fn complete_task(&self, id: i64) -> Result<Task>;

    /// Deletes a task and returns the number of rows affected.
    async fn delete_task(&self, id: i64) -> Result<u64>;
}

/// Entity-oriented task operations.
///
/// This is what the service layer depends on; the cache-aside decorator is
/// the production implementation.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Creates a new task.
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task>;

    /// Gets a task by its id.
    async fn get_task(&self, id: i64) -> Result<Task>;

    /// Gets every task ordered by ascending id.
    async fn get_all_tasks(&self) -> Result<Vec<Task>>;

    /// Marks a task completed.
    async fn complete_task(&self, id: i64) -> Result<Task>;

    /// Deletes a task. A missing row is `NotFound`.
    async fn delete_task(&self, id: i64) -> Result<()>;
}
