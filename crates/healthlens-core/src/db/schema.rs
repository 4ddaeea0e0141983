//! SQLite schema definition.

/// Complete database schema for HealthLens.
///
/// One row per logical record, JSON-encoded, with full-overwrite semantics.
/// No schema version and no migration path, matching the storage contract.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Local Records (single JSON blob per logical record)
-- ============================================================================

CREATE TABLE IF NOT EXISTS local_records (
    record_key TEXT PRIMARY KEY,                 -- 'healthlens_user', 'healthlens_assessment'
    payload TEXT NOT NULL,                       -- JSON-encoded record
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_overwrite_semantics() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO local_records (record_key, payload) VALUES (?, ?)
             ON CONFLICT(record_key) DO UPDATE SET payload = excluded.payload",
            ["healthlens_user", r#"{"v":1}"#],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO local_records (record_key, payload) VALUES (?, ?)
             ON CONFLICT(record_key) DO UPDATE SET payload = excluded.payload",
            ["healthlens_user", r#"{"v":2}"#],
        )
        .unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM local_records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);

        let payload: String = conn
            .query_row(
                "SELECT payload FROM local_records WHERE record_key = 'healthlens_user'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(payload, r#"{"v":2}"#);
    }
}
