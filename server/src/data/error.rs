//! Unified error type for data layer
//!
//! Repository callers see `DataError`; the SQLite-specific error is converted
//! at the repository trait seam.

use thiserror::Error;

/// Unified error type for data layer operations
#[derive(Error, Debug)]
pub enum DataError {
    /// SQLite database error
    #[error("SQLite error: {0}")]
    Sqlite(sqlx::Error),

    /// Migration failed
    #[error("Migration {version} ({name}) failed on {backend}: {error}")]
    MigrationFailed {
        backend: &'static str,
        version: i32,
        name: String,
        error: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be decoded
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl From<crate::data::sqlite::SqliteError> for DataError {
    fn from(e: crate::data::sqlite::SqliteError) -> Self {
        match e {
            crate::data::sqlite::SqliteError::Database(e) => Self::Sqlite(e),
            crate::data::sqlite::SqliteError::MigrationFailed {
                version,
                name,
                error,
            } => Self::MigrationFailed {
                backend: "sqlite",
                version,
                name,
                error,
            },
            crate::data::sqlite::SqliteError::Io(e) => Self::Io(e),
            crate::data::sqlite::SqliteError::InvalidData(msg) => Self::InvalidData(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::SqliteError;

    #[test]
    fn test_migration_failed_from_sqlite() {
        let err: DataError = SqliteError::MigrationFailed {
            version: 2,
            name: "add_employee_notes".to_string(),
            error: "syntax error".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Migration 2 (add_employee_notes) failed on sqlite: syntax error"
        );
    }

    #[test]
    fn test_invalid_data_from_sqlite() {
        let err: DataError = SqliteError::InvalidData("preset x".into()).into();
        assert!(matches!(err, DataError::InvalidData(_)));
    }
}
