//! Cached repository decorator.
//!
//! Implements the cache-aside pattern over a [`TaskStore`](taskcache_core::storage::TaskStore):
//!
//! - **Reads**: check the cache first, on miss fetch from the store and populate the cache
//! - **Writes**: persist to the store, then refresh or evict the cached task
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let store = Arc::new(SqliteTaskStore::new("tasks.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let repo = CachedTaskRepository::new(store, Some(cache), Duration::from_secs(60));
//! ```

mod task;

pub use task::CachedTaskRepository;
