//! Cached task repository decorator.
//!
//! Wraps a `TaskStore` implementation with the cache-aside pattern. Cache
//! failures are logged and absorbed; store failures always propagate.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use taskcache_core::cache::{deserialize_task, serialize_task, task_key, Cache};
use taskcache_core::storage::{RepositoryError, Result, TaskRepository, TaskStore};
use taskcache_core::task::{CreateTaskRequest, Task};

/// Cached task repository decorator.
///
/// Implements the cache-aside pattern:
/// - **Reads**: `get_task` checks the cache first; on miss it fetches from the
///   store and populates the cache. Listings always go to the store.
/// - **Writes**: persist to the store, then write the fresh task into the cache
///   (create, complete) or evict it (delete).
///
/// A cache hit is trusted without consulting the store, so a row deleted out
/// of band keeps being served until its entry expires.
///
/// # Type Parameters
///
/// * `S` - The underlying task store
/// * `C` - The cache implementation
pub struct CachedTaskRepository<S, C>
where
    S: TaskStore,
    C: Cache,
{
    store: Arc<S>,
    cache: Option<Arc<C>>,
    ttl: Duration,
}

impl<S, C> CachedTaskRepository<S, C>
where
    S: TaskStore,
    C: Cache,
{
    /// Creates a new cached task repository.
    ///
    /// Caching is enabled only when `cache` is present and `ttl` is non-zero;
    /// otherwise every operation goes straight to the store.
    ///
    /// # Arguments
    ///
    /// * `store` - The store of record
    /// * `cache` - The cache implementation, if any
    /// * `ttl` - Time-to-live for cached tasks
    pub fn new(store: Arc<S>, cache: Option<Arc<C>>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// Returns true if operations read from and write to the cache.
    pub fn cache_enabled(&self) -> bool {
        self.active_cache().is_some()
    }

    /// The one place that decides whether a call touches the cache.
    fn active_cache(&self) -> Option<&C> {
        if self.ttl.is_zero() {
            return None;
        }
        self.cache.as_deref()
    }

    /// Reads a task from the cache. Errors and undecodable entries are misses.
    async fn cached_task(&self, cache: &C, id: i64) -> Option<Task> {
        match cache.get(&task_key(id)).await {
            Ok(Some(bytes)) => match deserialize_task(&bytes) {
                Ok(task) => Some(task),
                Err(err) => {
                    tracing::warn!(
                        op = "get_task",
                        task_id = id,
                        error = %err,
                        "Cached task deserialization failed"
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(op = "get_task", task_id = id, error = %err, "Cache read failed");
                None
            }
        }
    }

    /// Writes `task` into the cache at the configured TTL, best-effort.
    async fn cache_task(&self, op: &'static str, task: &Task) {
        let Some(cache) = self.active_cache() else {
            return;
        };

        let bytes = match serialize_task(task) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(op, task_id = task.id, error = %err, "Task serialization failed");
                return;
            }
        };

        if let Err(err) = cache.set(&task_key(task.id), &bytes, Some(self.ttl)).await {
            tracing::warn!(op, task_id = task.id, error = %err, "Failed to cache task");
        }
    }

    /// Removes a task from the cache, best-effort.
    async fn evict_task(&self, op: &'static str, id: i64) {
        let Some(cache) = self.active_cache() else {
            return;
        };

        if let Err(err) = cache.delete(&task_key(id)).await {
            tracing::warn!(op, task_id = id, error = %err, "Failed to evict cached task");
        }
    }
}

#[async_trait]
impl<S, C> TaskRepository for CachedTaskRepository<S, C>
where
    S: TaskStore + 'static,
    C: Cache + 'static,
{
    async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        let task = self
            .store
            .insert_task(&request.title, &request.description)
            .await?;

        self.cache_task("create_task", &task).await;

        tracing::debug!(task_id = task.id, "Task created");
        Ok(task)
    }

    async fn get_task(&self, id: i64) -> Result<Task> {
        if let Some(cache) = self.active_cache() {
            if let Some(task) = self.cached_task(cache, id).await {
                tracing::trace!(task_id = id, "Cache hit for task");
                return Ok(task);
            }
            tracing::trace!(task_id = id, "Cache miss for task");
        }

        let task = self.store.find_task(id).await?;

        self.cache_task("get_task", &task).await;

        Ok(task)
    }

    async fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.store.find_all_tasks().await
    }

    async fn complete_task(&self, id: i64) -> Result<Task> {
        let task = self.store.complete_task(id).await?;

        self.cache_task("complete_task", &task).await;

        tracing::debug!(task_id = id, "Task completed");
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        let rows = self.store.delete_task(id).await?;
        if rows == 0 {
            return Err(RepositoryError::not_found(id));
        }

        self.evict_task("delete_task", id).await;

        tracing::debug!(task_id = id, "Task deleted");
        Ok(())
    }
}
