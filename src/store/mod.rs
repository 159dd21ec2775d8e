//! SQLite-backed persistence for book records.

/// Text codec for the serialized list columns.
pub mod codec;
/// Schema bootstrap, additive migrations, and CRUD.
pub mod sqlite;

/// Errors raised by the persistence layer.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite failure.
    Sqlite(rusqlite::Error),
    /// Serialization failure for a list column.
    Serde(serde_json::Error),
    /// Filesystem failure while preparing the database location.
    Io(std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Result alias for persistence operations.
pub type StoreResult<T> = Result<T, StoreError>;
