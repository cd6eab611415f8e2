//! Storage error types
//!
//! Messages are surfaced to HTTP clients verbatim, so SQLite errors are
//! wrapped transparently.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure, malformed statement, constraint violation
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked
    #[error("storage connection lock poisoned")]
    Poisoned,

    /// The blocking task running the query failed
    #[error("storage task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        StorageError::Join(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_message_passes_through() {
        let err = StorageError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(
            err.to_string(),
            rusqlite::Error::InvalidQuery.to_string()
        );
    }

    #[test]
    fn test_poisoned_message() {
        assert_eq!(
            StorageError::Poisoned.to_string(),
            "storage connection lock poisoned"
        );
    }
}
