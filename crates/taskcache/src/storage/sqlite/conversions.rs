//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and [`Task`].

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use taskcache_core::task::Task;

/// Convert a SQLite row to a Task.
///
/// Expected columns: id, title, description, completed, created_at, updated_at
pub fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: parse_datetime(4, &created_at)?,
        updated_at: parse_datetime(5, &updated_at)?,
    })
}

/// Format a DateTime for SQLite storage (RFC 3339, microsecond precision).
///
/// Fixed-width fractions keep the text sortable and make the round trip
/// through the database lossless for the precision we store.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_micros() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-01T08:00:00.000000Z");
    }

    #[test]
    fn test_parse_datetime_roundtrip() {
        let dt = Utc::now();
        let text = format_datetime(&dt);
        let parsed = parse_datetime(0, &text).unwrap();

        assert_eq!(format_datetime(&parsed), text);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        let result = parse_datetime(4, "yesterday");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(4, _, _))
        ));
    }
}
