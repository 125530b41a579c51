//! In-process cache backend implementation.
//!
//! Provides a thread-safe LRU cache with TTL support and a broadcast event
//! sink for single-instance deployments.

mod cache;
mod events;

pub use cache::MemoryCache;
pub use events::MemoryEventSink;
