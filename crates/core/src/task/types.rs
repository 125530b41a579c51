use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task as stored in the store of record.
///
/// Cache entries hold a complete snapshot of this struct, so a cache hit never
/// needs a follow-up store read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, always positive.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` on insertion, refreshed on completion.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, uncompleted task whose timestamps are both `created_at`.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at,
            updated_at: created_at,
        }
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns this task marked as completed at `at`.
    ///
    /// Completing an already-completed task only refreshes `updated_at`.
    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed = true;
        self.updated_at = at;
        self
    }
}
