//! Application state shared by all request handlers.
//!
//! Backends are chosen by feature flags; the factory functions at the bottom
//! of this module open the configured store, cache and event sink once at
//! startup and inject them into the repository.

use std::sync::Arc;

use tokio::sync::broadcast;

use taskcache_core::notify::EventSink;
use taskcache_core::storage::TaskRepository;
use taskcache_core::task::TaskEvent;

use crate::config::Config;
use crate::service::TaskService;
use crate::storage::CachedTaskRepository;

/// Shared application state.
///
/// Cloned for each request handler; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub service: TaskService,
    pub events: Arc<dyn EventSink>,
    /// Whether the repository reads from and writes to a cache.
    pub cache_enabled: bool,
    /// Shutdown signal sender for background tasks.
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    /// Creates an AppState around an already-built repository.
    pub fn build(
        repo: Arc<dyn TaskRepository>,
        events: Arc<dyn EventSink>,
        cache_enabled: bool,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            service: TaskService::new(repo),
            events,
            cache_enabled,
            shutdown_tx,
        }
    }

    /// Opens the configured backends and wires them together.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store = Arc::new(backends::open_store(config).await?);
        let cache = backends::open_cache(config).await;
        let events = backends::open_event_sink(config).await;

        let repo = CachedTaskRepository::new(store, cache, config.cache_ttl());
        let cache_enabled = repo.cache_enabled();

        tracing::info!(
            cache_enabled,
            ttl_seconds = config.cache_ttl().as_secs(),
            "Task repository ready"
        );

        Ok(Self::build(Arc::new(repo), events, cache_enabled))
    }

    /// Publishes an operation event, logging and dropping failures.
    pub async fn publish_event(&self, event: TaskEvent) {
        if let Err(err) = self.events.publish(&event).await {
            tracing::warn!(
                action = %event.action,
                task_id = event.task_id,
                error = %err,
                "Failed to publish task event"
            );
        }
    }

    /// Subscribe to shutdown signal.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signal background tasks to shut down.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

// ============================================================================
// Factory functions for the enabled backends
// ============================================================================

mod backends {
    use super::*;

    #[cfg(feature = "sqlite")]
    pub async fn open_store(config: &Config) -> anyhow::Result<crate::storage::SqliteTaskStore> {
        Ok(crate::storage::SqliteTaskStore::new(&config.sqlite_path).await?)
    }

    #[cfg(feature = "inmemory")]
    pub async fn open_store(_config: &Config) -> anyhow::Result<crate::storage::InMemoryTaskStore> {
        tracing::warn!("Using in-memory task store; data is lost on restart");
        Ok(crate::storage::InMemoryTaskStore::new())
    }

    #[cfg(feature = "memory")]
    pub async fn open_cache(config: &Config) -> Option<Arc<crate::cache::MemoryCache>> {
        Some(Arc::new(crate::cache::MemoryCache::new(
            config.cache_max_entries,
        )))
    }

    /// Connects to Redis. An unreachable server disables caching instead of
    /// failing startup.
    #[cfg(feature = "redis")]
    pub async fn open_cache(config: &Config) -> Option<Arc<crate::cache::RedisCache>> {
        match crate::cache::RedisCache::new(&config.redis_url).await {
            Ok(cache) => Some(Arc::new(cache)),
            Err(err) => {
                tracing::warn!(error = %err, "Redis unavailable, starting with caching disabled");
                None
            }
        }
    }

    #[cfg(feature = "memory")]
    pub async fn open_event_sink(_config: &Config) -> Arc<dyn EventSink> {
        Arc::new(crate::cache::MemoryEventSink::new())
    }

    /// Connects the Redis event sink, falling back to the in-process sink.
    #[cfg(feature = "redis")]
    pub async fn open_event_sink(config: &Config) -> Arc<dyn EventSink> {
        match crate::cache::RedisEventSink::new(&config.redis_url, config.events_channel.clone())
            .await
        {
            Ok(sink) => Arc::new(sink),
            Err(err) => {
                tracing::warn!(error = %err, "Redis unavailable, publishing task events in-process");
                Arc::new(crate::cache::MemoryEventSink::new())
            }
        }
    }
}
