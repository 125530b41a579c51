//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the tasks table.
///
/// `AUTOINCREMENT` keeps SQLite from reusing the id of a deleted row, so a
/// stale cache entry can never alias a newer task.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const INSERT_TASK: &str = r#"
INSERT INTO tasks (title, description, completed, created_at, updated_at)
VALUES (?1, ?2, 0, ?3, ?3)
RETURNING id, title, description, completed, created_at, updated_at
"#;

pub const SELECT_TASK_BY_ID: &str = r#"
SELECT id, title, description, completed, created_at, updated_at
FROM tasks
WHERE id = ?1
"#;

pub const SELECT_ALL_TASKS: &str = r#"
SELECT id, title, description, completed, created_at, updated_at
FROM tasks
ORDER BY id ASC
"#;

pub const COMPLETE_TASK: &str = r#"
UPDATE tasks
SET completed = 1, updated_at = ?2
WHERE id = ?1
RETURNING id, title, description, completed, created_at, updated_at
"#;

pub const DELETE_TASK: &str = r#"
DELETE FROM tasks
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_uses_autoincrement() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS tasks"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_writes_return_the_row() {
        assert!(INSERT_TASK.contains("RETURNING"));
        assert!(COMPLETE_TASK.contains("RETURNING"));
        assert!(SELECT_ALL_TASKS.contains("ORDER BY id ASC"));
        assert!(DELETE_TASK.contains("DELETE"));
    }
}
