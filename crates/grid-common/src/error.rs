//! Error types for grid construction and artifact I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Primary error type for grid operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// Row/column counts or bounding box violate their invariants.
    #[error("Invalid grid specification: {0}")]
    InvalidSpec(String),

    /// A directory or artifact could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A previously exported artifact could not be read back.
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GridError {
    pub fn write(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        GridError::WriteError {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: impl Into<std::io::Error>) -> Self {
        GridError::ReadError {
            path: path.into(),
            source: source.into(),
        }
    }
}
