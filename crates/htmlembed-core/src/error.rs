//! Error types for htmlembed

use std::path::{Path, PathBuf};
use thiserror::Error;

/// htmlembed error type
#[derive(Error, Debug)]
pub enum Error {
    /// File missing, unreadable, not valid UTF-8, or not writable
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Command-line argument missing or out of range
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Variable name that cannot appear in a C declaration
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type alias for htmlembed
pub type Result<T> = std::result::Result<T, Error>;
