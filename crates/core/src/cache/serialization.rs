//! Pure functions for serializing tasks to and from cache bytes.
//!
//! Values are JSON so cache contents stay readable from `redis-cli`.

use super::error::{CacheError, Result};
use crate::task::Task;

/// Serializes a task to JSON bytes.
pub fn serialize_task(task: &Task) -> Result<Vec<u8>> {
    serde_json::to_vec(task).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes to a task.
///
/// Undecodable bytes are a [`CacheError::Serialization`], which callers treat
/// like any other cache failure.
pub fn deserialize_task(bytes: &[u8]) -> Result<Task> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_roundtrip_completed_task() {
        let created = fixed_timestamp();
        let task = Task::new(12, "Ship release", "tag and publish", created)
            .completed_at(created + Duration::minutes(5));

        let bytes = serialize_task(&task).expect("serialize should succeed");
        let deserialized = deserialize_task(&bytes).expect("deserialize should succeed");

        assert_eq!(task, deserialized);
    }

    #[test]
    fn test_serialized_task_field_names() {
        let task = Task::new(1, "A", "", fixed_timestamp());
        let bytes = serialize_task(&task).expect("serialize should succeed");
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        for field in [
            "id",
            "title",
            "description",
            "completed",
            "created_at",
            "updated_at",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }

    #[test]
    fn test_deserialize_task_malformed_bytes() {
        let result = deserialize_task(b"not valid json");
        assert!(matches!(
            result,
            Err(CacheError::Serialization(_))
        ));
    }

    #[test]
    fn test_deserialize_task_wrong_shape() {
        let result = deserialize_task(b"[1, 2, 3]");
        assert!(matches!(
            result,
            Err(CacheError::Serialization(_))
        ));
    }
}
