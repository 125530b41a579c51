//! Cache and event sink backend implementations.
//!
//! This module provides concrete implementations of the [`Cache`](taskcache_core::cache::Cache)
//! and [`EventSink`](taskcache_core::notify::EventSink) traits defined in
//! `taskcache_core`. The implementations are selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): in-process LRU cache and broadcast event sink
//! - `redis`: Redis cache and Redis pub/sub event sink
//!
//! These features are mutually exclusive - only one cache backend can be
//! enabled at a time.

#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!(
    "Features 'memory' and 'redis' are mutually exclusive. \
    Enable only one cache backend at a time."
);

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!(
    "No cache backend selected. Enable 'memory' or 'redis' feature. \
    Example: cargo build -p taskcache --features memory"
);

// The in-process backends are always compiled: tests exercise TTL expiry
// against `MemoryCache` regardless of the deployed backend, and the redis
// build falls back to `MemoryEventSink` when Redis is unreachable.
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;

#[cfg_attr(feature = "redis", allow(unused_imports))]
pub use memory::{MemoryCache, MemoryEventSink};

#[cfg(feature = "redis")]
pub use redis_impl::{RedisCache, RedisEventSink};
