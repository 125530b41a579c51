//! Task service: validation and state-transition rules over a repository.

use std::sync::Arc;

use taskcache_core::storage::TaskRepository;
use taskcache_core::task::{
    ensure_not_completed, validate_create_request, validate_task_id, CreateTaskRequest,
    ServiceError, Task,
};

type Result<T> = std::result::Result<T, ServiceError>;

/// Entry point for every task operation the transport exposes.
///
/// Malformed input is rejected before it reaches the repository.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_task(&self, request: &CreateTaskRequest) -> Result<Task> {
        validate_create_request(request)?;

        self.repo
            .create_task(request)
            .await
            .map_err(ServiceError::Internal)
    }

    pub async fn get_task(&self, id: i64) -> Result<Task> {
        validate_task_id(id)?;

        self.repo
            .get_task(id)
            .await
            .map_err(|e| ServiceError::from_repository(e, id))
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.repo
            .get_all_tasks()
            .await
            .map_err(ServiceError::Internal)
    }

    /// Completes a task that is not yet completed.
    ///
    /// The pre-check reads through the repository and may be answered from
    /// the cache.
    pub async fn complete_task(&self, id: i64) -> Result<Task> {
        let current = self.get_task(id).await?;
        ensure_not_completed(&current)?;

        self.repo
            .complete_task(id)
            .await
            .map_err(|e| ServiceError::from_repository(e, id))
    }

    pub async fn delete_task(&self, id: i64) -> Result<()> {
        self.get_task(id).await?;

        self.repo
            .delete_task(id)
            .await
            .map_err(|e| ServiceError::from_repository(e, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use tokio::sync::RwLock;

    use taskcache_core::storage::{RepositoryError, Result as RepoResult};
    use taskcache_core::task::TaskError;

    #[derive(Default)]
    struct MockRepository {
        tasks: RwLock<BTreeMap<i64, Task>>,
        calls: AtomicUsize,
        fail_with: Option<RepositoryError>,
    }

    impl MockRepository {
        fn failing(err: RepositoryError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn enter(&self) -> RepoResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl TaskRepository for MockRepository {
        async fn create_task(&self, request: &CreateTaskRequest) -> RepoResult<Task> {
            self.enter()?;
            let mut tasks = self.tasks.write().await;
            let id = tasks.keys().next_back().copied().unwrap_or(0) + 1;
            let task = Task::new(id, &request.title, &request.description, Utc::now());
            tasks.insert(id, task.clone());
            Ok(task)
        }

        async fn get_task(&self, id: i64) -> RepoResult<Task> {
            self.enter()?;
            self.tasks
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| RepositoryError::not_found(id))
        }

        async fn get_all_tasks(&self) -> RepoResult<Vec<Task>> {
            self.enter()?;
            Ok(self.tasks.read().await.values().cloned().collect())
        }

        async fn complete_task(&self, id: i64) -> RepoResult<Task> {
            self.enter()?;
            let mut tasks = self.tasks.write().await;
            let task = tasks
                .get_mut(&id)
                .ok_or_else(|| RepositoryError::not_found(id))?;
            *task = task.clone().completed_at(Utc::now());
            Ok(task.clone())
        }

        async fn delete_task(&self, id: i64) -> RepoResult<()> {
            self.enter()?;
            self.tasks
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| RepositoryError::not_found(id))
        }
    }

    fn service() -> (Arc<MockRepository>, TaskService) {
        let repo = Arc::new(MockRepository::default());
        (repo.clone(), TaskService::new(repo))
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title_before_repository() {
        let (repo, service) = service();

        let result = service.create_task(&CreateTaskRequest::new("   ")).await;

        assert_eq!(result, Err(ServiceError::Validation(TaskError::EmptyTitle)));
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_long_title() {
        let (repo, service) = service();

        let result = service
            .create_task(&CreateTaskRequest::new("x".repeat(256)))
            .await;

        assert_eq!(
            result,
            Err(ServiceError::Validation(TaskError::TitleTooLong))
        );
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (_repo, service) = service();

        let created = service
            .create_task(&CreateTaskRequest::new("Plan").with_description("the week"))
            .await
            .unwrap();
        let fetched = service.get_task(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.description, "the week");
    }

    #[tokio::test]
    async fn test_non_positive_ids_are_rejected() {
        let (repo, service) = service();

        for id in [0, -1] {
            let invalid = ServiceError::Validation(TaskError::InvalidId(id));
            assert_eq!(service.get_task(id).await, Err(invalid.clone()));
            assert_eq!(service.complete_task(id).await, Err(invalid.clone()));
            assert_eq!(service.delete_task(id).await, Err(invalid));
        }
        assert_eq!(repo.calls(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (_repo, service) = service();

        assert_eq!(service.get_task(3).await, Err(ServiceError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_complete_rejects_already_completed() {
        let (_repo, service) = service();
        let created = service
            .create_task(&CreateTaskRequest::new("Once"))
            .await
            .unwrap();

        let completed = service.complete_task(created.id).await.unwrap();
        assert!(completed.completed);

        let again = service.complete_task(created.id).await;
        assert_eq!(
            again,
            Err(ServiceError::Validation(TaskError::AlreadyCompleted(
                created.id
            )))
        );
    }

    #[tokio::test]
    async fn test_complete_missing_is_not_found() {
        let (_repo, service) = service();

        assert_eq!(
            service.complete_task(10).await,
            Err(ServiceError::NotFound(10))
        );
    }

    #[tokio::test]
    async fn test_delete_reads_first() {
        let (repo, service) = service();

        assert_eq!(service.delete_task(4).await, Err(ServiceError::NotFound(4)));
        assert_eq!(repo.calls(), 1, "missing task should stop after the read");

        let created = service
            .create_task(&CreateTaskRequest::new("Remove"))
            .await
            .unwrap();
        service.delete_task(created.id).await.unwrap();

        assert_eq!(
            service.get_task(created.id).await,
            Err(ServiceError::NotFound(created.id))
        );
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let (_repo, service) = service();
        assert!(service.list_tasks().await.unwrap().is_empty());

        for title in ["a", "b"] {
            service
                .create_task(&CreateTaskRequest::new(title))
                .await
                .unwrap();
        }

        assert_eq!(service.list_tasks().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_repository_failures_are_internal() {
        let err = RepositoryError::QueryFailed("disk I/O error".to_string());
        let service = TaskService::new(Arc::new(MockRepository::failing(err.clone())));

        assert_eq!(
            service.get_task(1).await,
            Err(ServiceError::Internal(err.clone()))
        );
        assert_eq!(
            service.list_tasks().await,
            Err(ServiceError::Internal(err.clone()))
        );
        assert_eq!(
            service.create_task(&CreateTaskRequest::new("A")).await,
            Err(ServiceError::Internal(err))
        );
    }
}
