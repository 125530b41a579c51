//! Redis error mapping to CacheError and NotifyError.

use taskcache_core::cache::CacheError;
use taskcache_core::notify::NotifyError;

fn is_connection_error(err: &redis::RedisError) -> bool {
    err.is_connection_refusal() || err.is_timeout() || err.is_connection_dropped()
}

/// Maps Redis errors to CacheError.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    if is_connection_error(&err) {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

/// Maps Redis errors to NotifyError.
pub fn map_redis_notify_error(err: redis::RedisError) -> NotifyError {
    if is_connection_error(&err) {
        NotifyError::ConnectionFailed(err.to_string())
    } else {
        NotifyError::PublishFailed(err.to_string())
    }
}
