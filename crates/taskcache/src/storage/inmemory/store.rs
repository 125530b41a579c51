//! In-memory task store implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use taskcache_core::storage::{RepositoryError, Result, TaskStore};
use taskcache_core::task::Task;

/// In-memory task store.
///
/// Ids come from a monotonically increasing counter and are never reused,
/// matching the SQLite backend.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<BTreeMap<i64, Task>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert_task(&self, title: &str, description: &str) -> Result<Task> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task::new(id, title, description, Utc::now());

        self.tasks.write().await.insert(id, task.clone());
        Ok(task)
    }

    async fn find_task(&self, id: i64) -> Result<Task> {
        let tasks = self.tasks.read().await;
        tasks
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn find_all_tasks(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn complete_task(&self, id: i64) -> Result<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(id))?;

        *task = task.clone().completed_at(Utc::now());
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> Result<u64> {
        let mut tasks = self.tasks.write().await;
        Ok(u64::from(tasks.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryTaskStore::new();

        let created = store.insert_task("Read", "a book").await.unwrap();
        let found = store.find_task(created.id).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_missing_is_not_found() {
        let store = InMemoryTaskStore::new();

        assert_eq!(
            store.find_task(3).await,
            Err(RepositoryError::not_found(3))
        );
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let store = InMemoryTaskStore::new();
        for title in ["c", "a", "b"] {
            store.insert_task(title, "").await.unwrap();
        }

        let ids: Vec<_> = store
            .find_all_tasks()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_complete_refreshes_updated_at() {
        let store = InMemoryTaskStore::new();
        let created = store.insert_task("Done soon", "").await.unwrap();
        tokio::time::sleep(Duration::from_millis(2)).await;

        let completed = store.complete_task(created.id).await.unwrap();

        assert!(completed.completed);
        assert!(completed.updated_at > created.updated_at);
        assert_eq!(store.find_task(created.id).await.unwrap(), completed);
    }

    #[tokio::test]
    async fn test_complete_missing_is_not_found() {
        let store = InMemoryTaskStore::new();

        assert!(store.complete_task(1).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_and_never_reuses_ids() {
        let store = InMemoryTaskStore::new();
        let first = store.insert_task("A", "").await.unwrap();

        assert_eq!(store.delete_task(first.id).await.unwrap(), 1);
        assert_eq!(store.delete_task(first.id).await.unwrap(), 0);

        let second = store.insert_task("B", "").await.unwrap();
        assert!(second.id > first.id);
    }
}
