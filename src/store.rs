use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::models::UserProgress;

/// Fixed storage key for the serialized progress record. The version suffix
/// is the only migration mechanism.
const PROGRESS_KEY: &str = "progress_v1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save file error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Storage collaborator for the progress record. The controller owns a boxed
/// instance rather than reaching for ambient global state.
pub trait ProgressStore {
    /// Absent or unreadable records come back as `None`; the caller falls
    /// back to the zero-valued default.
    fn load(&self) -> Result<Option<UserProgress>, StoreError>;
    fn save(&self, progress: &UserProgress) -> Result<(), StoreError>;
}

/// SQLite-backed save file: one key/value table with the JSON-serialized
/// record under a fixed key.
pub struct SaveFile {
    conn: Connection,
}

impl SaveFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS save_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    pub fn clear(&self) -> Result<bool, StoreError> {
        let rows = self.conn.execute(
            "DELETE FROM save_state WHERE key = ?1",
            params![PROGRESS_KEY],
        )?;
        Ok(rows > 0)
    }
}

impl ProgressStore for SaveFile {
    fn load(&self) -> Result<Option<UserProgress>, StoreError> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM save_state WHERE key = ?1",
                params![PROGRESS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        // A record that fails to parse is treated as absent: silent recovery
        // to the default rather than a fatal startup error.
        Ok(raw.and_then(|json| serde_json::from_str(&json).ok()))
    }

    fn save(&self, progress: &UserProgress) -> Result<(), StoreError> {
        let json = serde_json::to_string(progress)?;
        self.conn.execute(
            r#"
            INSERT INTO save_state (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![PROGRESS_KEY, json],
        )?;
        Ok(())
    }
}
