//! Redis cache backend implementation.
//!
//! Provides a shared cache and event channel for multi-instance deployments.

mod cache;
mod error;
mod events;

pub use cache::RedisCache;
pub use events::RedisEventSink;
