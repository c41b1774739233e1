//! I/O error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A hits row could not be turned into a spacepoint.
    #[error("{}:{line}: {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// The finished output could not be moved into place.
    #[error("cannot move finished output into {}: {source}", .path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Core library error.
    #[error("core error: {0}")]
    CoreError(#[from] trackml_core::Error),
}
