//! Storage backend implementations.
//!
//! This module provides concrete implementations of the [`TaskStore`](taskcache_core::storage::TaskStore)
//! trait defined in `taskcache_core::storage`, plus the cache-aside decorator
//! that composes a store with a cache. The store is selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: volatile storage for development and tests
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p taskcache
//! ```
//!
//! Build with the in-memory store:
//! ```bash
//! cargo build -p taskcache --no-default-features --features inmemory,memory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p taskcache --features sqlite"
);

pub mod cached;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use cached::CachedTaskRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryTaskStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTaskStore;
