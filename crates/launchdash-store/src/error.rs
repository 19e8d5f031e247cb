//! Error types for loading the launch record store.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading launch records.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(String),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("line {line}: {message}")]
    Row { line: u64, message: String },

    #[error("no launch records found")]
    Empty,
}
