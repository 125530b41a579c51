/// Prefix shared by every task cache key.
pub const TASK_KEY_PREFIX: &str = "task:";

/// Returns the cache key for a single task.
///
/// The same task id always maps to the same key, regardless of which
/// operation populates or invalidates it.
///
/// # Examples
///
/// ```
/// use taskcache_core::cache::task_key;
///
/// assert_eq!(task_key(42), "task:42");
/// ```
pub fn task_key(task_id: i64) -> String {
    format!("{TASK_KEY_PREFIX}{task_id}")
}
