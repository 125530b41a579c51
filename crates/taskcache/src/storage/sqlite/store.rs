//! SQLite task store.
//!
//! Implements [`TaskStore`] from `taskcache_core::storage` using SQLite.

use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use taskcache_core::storage::{RepositoryError, Result, TaskStore};
use taskcache_core::task::Task;

use super::conversions::{format_datetime, row_to_task};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based task store.
///
/// All statements run on the connection's dedicated worker thread, which
/// serializes access to the database.
pub struct SqliteTaskStore {
    conn: Connection,
}

impl SqliteTaskStore {
    /// Opens a file-based database, or an in-memory one for `":memory:"`.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        if path == ":memory:" {
            return Self::new_in_memory().await;
        }

        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path, "Opened SQLite task store");
        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn insert_task(&self, title: &str, description: &str) -> Result<Task> {
        let title = title.to_string();
        let description = description.to_string();
        let now = format_datetime(&Utc::now());
        let started = Instant::now();

        let task = self
            .conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_TASK,
                    rusqlite::params![title, description, now],
                    row_to_task,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!(
            task_id = task.id,
            duration_ms = started.elapsed().as_millis() as u64,
            "Inserted task"
        );
        Ok(task)
    }

    async fn find_task(&self, id: i64) -> Result<Task> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_TASK_BY_ID, [id], row_to_task)
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn find_all_tasks(&self) -> Result<Vec<Task>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TASKS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_task).map_err(wrap_err)?;

                let mut tasks = Vec::new();
                for row_result in rows {
                    tasks.push(row_result.map_err(wrap_err)?);
                }
                Ok(tasks)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn complete_task(&self, id: i64) -> Result<Task> {
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::COMPLETE_TASK,
                    rusqlite::params![id, now],
                    row_to_task,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete_task(&self, id: i64) -> Result<u64> {
        let rows = self
            .conn
            .call(move |conn| conn.execute(schema::DELETE_TASK, [id]).map_err(wrap_err))
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))?;

        tracing::debug!(task_id = id, rows, "Deleted task rows");
        Ok(rows as u64)
    }
}
