//! Record storage operations.
//!
//! Each logical record lives under one key as a JSON blob. Writes fully
//! replace the prior value. A blob that no longer parses is discarded and its
//! row deleted, so a corrupt entry never surfaces past this layer.

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Database, DbResult};
use crate::models::{AssessmentRecord, UserAccount};

/// Storage key for the signed-in user record.
pub const USER_KEY: &str = "healthlens_user";
/// Storage key for the latest assessment record.
pub const ASSESSMENT_KEY: &str = "healthlens_assessment";

impl Database {
    /// Write a record, replacing any prior value under the same key.
    pub fn put_record<T: Serialize>(&self, key: &str, record: &T) -> DbResult<()> {
        let payload = serde_json::to_string(record)?;
        self.conn.execute(
            r#"
            INSERT INTO local_records (record_key, payload, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(record_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
            params![key, payload],
        )?;
        Ok(())
    }

    /// Read a record, or `None` when absent.
    ///
    /// A payload that fails to parse is treated as absent: the row is deleted
    /// and `None` returned.
    pub fn get_record<T: DeserializeOwned>(&self, key: &str) -> DbResult<Option<T>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM local_records WHERE record_key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!("discarding corrupt record '{}': {}", key, e);
                self.delete_record(key)?;
                Ok(None)
            }
        }
    }

    /// Delete a record. Returns whether a row was removed.
    pub fn delete_record(&self, key: &str) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM local_records WHERE record_key = ?", [key])?;
        Ok(rows_affected > 0)
    }

    /// Delete every stored record (account deletion).
    pub fn clear_records(&self) -> DbResult<()> {
        self.conn.execute("DELETE FROM local_records", [])?;
        Ok(())
    }

    // =========================================================================
    // Typed record accessors
    // =========================================================================

    /// Persist the signed-in user.
    pub fn save_user(&self, user: &UserAccount) -> DbResult<()> {
        self.put_record(USER_KEY, user)
    }

    /// Load the persisted user, if any.
    pub fn load_user(&self) -> DbResult<Option<UserAccount>> {
        self.get_record(USER_KEY)
    }

    /// Remove the persisted user.
    pub fn clear_user(&self) -> DbResult<bool> {
        self.delete_record(USER_KEY)
    }

    /// Persist the latest assessment, replacing any prior submission.
    pub fn save_assessment(&self, record: &AssessmentRecord) -> DbResult<()> {
        self.put_record(ASSESSMENT_KEY, record)
    }

    /// Load the latest assessment, if any.
    pub fn load_assessment(&self) -> DbResult<Option<AssessmentRecord>> {
        self.get_record(ASSESSMENT_KEY)
    }
}
