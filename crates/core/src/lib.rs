//! Functional core for taskcache.
//!
//! Pure domain types, validation, cache key derivation and serialization, plus
//! the traits that the storage, cache and notification backends implement.

pub mod cache;
pub mod notify;
pub mod storage;
pub mod task;
