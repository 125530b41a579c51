//! Operation notifications published after each completed task operation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The operation a [`TaskEvent`] reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskAction {
    CreateTask,
    GetTask,
    ListTasks,
    CompleteTask,
    DeleteTask,
}

impl TaskAction {
    /// Returns the wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskAction::CreateTask => "create-task",
            TaskAction::GetTask => "get-task",
            TaskAction::ListTasks => "list-tasks",
            TaskAction::CompleteTask => "complete-task",
            TaskAction::DeleteTask => "delete-task",
        }
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side-channel record of a completed operation and its timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEvent {
    pub action: TaskAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    /// When the operation was sent to the data layer.
    pub db_request_time: DateTime<Utc>,
    #[serde(default)]
    pub duration_ms: u64,
}

impl TaskEvent {
    /// Creates an event for `action` started at `db_request_time`.
    pub fn new(action: TaskAction, db_request_time: DateTime<Utc>) -> Self {
        Self {
            action,
            task_id: None,
            db_request_time,
            duration_ms: 0,
        }
    }

    /// Creates an event for `action` starting now.
    pub fn started(action: TaskAction) -> Self {
        Self::new(action, Utc::now())
    }

    /// Sets the task the operation targeted.
    pub fn with_task_id(mut self, task_id: i64) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Sets the measured duration from the request time to `finished_at`.
    ///
    /// Clock skew that would produce a negative duration is clamped to zero.
    pub fn finished_at(mut self, finished_at: DateTime<Utc>) -> Self {
        let elapsed = finished_at - self.db_request_time;
        self.duration_ms = u64::try_from(elapsed.num_milliseconds()).unwrap_or(0);
        self
    }

    /// Sets the measured duration from the request time to now.
    pub fn finish(self) -> Self {
        self.finished_at(Utc::now())
    }
}
