//! In-memory storage backend for development and testing.
//!
//! Stores tasks in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, so listings come
//! out in ascending id order for free. Nothing is persisted.

mod store;

pub use store::InMemoryTaskStore;
