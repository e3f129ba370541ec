//! Error types for razzie-state

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a movie store backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// Database query error
    #[error("Database query failed: {0}")]
    Query(String),

    /// Schema setup error
    #[error("Schema setup failed: {0}")]
    Schema(String),
}

impl From<surrealdb::Error> for StorageError {
    fn from(err: surrealdb::Error) -> Self {
        StorageError::Query(err.to_string())
    }
}

/// Errors raised while reading a movie list into a store.
///
/// Line numbers are 1-based and count the header line.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("movie list is empty (no header row)")]
    EmptySource,

    #[error("movie list header is missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("line {line}: missing value for column {column}")]
    MissingField { line: usize, column: &'static str },

    #[error("line {line}: invalid year {value:?}")]
    InvalidYear { line: usize, value: String },

    #[error("movie list is not valid CSV: {0}")]
    Malformed(#[from] csv::Error),

    #[error("{path} is not valid UTF-8: {source}")]
    InvalidEncoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_load_error_display() {
        let err = DataLoadError::InvalidYear {
            line: 7,
            value: "19x0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("19x0"));

        let err = DataLoadError::MissingColumn { column: "producers" };
        assert!(err.to_string().contains("producers"));

        let source = std::str::from_utf8(b"P\xff").unwrap_err();
        let err = DataLoadError::InvalidEncoding {
            path: PathBuf::from("movielist.csv"),
            source,
        };
        assert!(err.to_string().contains("movielist.csv"));
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_storage_error_wraps_into_load_error() {
        let err: DataLoadError = StorageError::Connection("refused".to_string()).into();
        assert!(matches!(err, DataLoadError::Storage(_)));
        assert!(err.to_string().contains("refused"));
    }
}
