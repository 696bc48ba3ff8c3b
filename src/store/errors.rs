//! Store error types
//!
//! Taxonomy:
//! - `Io` — file missing/unreadable/unwritable; surfaced to the caller, not
//!   retried (a missing log file on read is NOT an error: empty store)
//! - `Log` — corrupt or unencodable records (strict load policy)
//! - `Query` / `Options` — malformed query or config documents

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::executor::ExecutorError;
use crate::log::LogError;
use crate::query::QueryError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk I/O failure on the log file
    #[error("i/o failure on {path}: {source}")]
    Io {
        /// Path the operation was touching
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Log codec failure (corrupt or unencodable record)
    #[error(transparent)]
    Log(#[from] LogError),

    /// Malformed query document
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Malformed find options document
    #[error(transparent)]
    Options(#[from] ExecutorError),
}

impl StoreError {
    /// Wraps an I/O error with the path it occurred on
    pub fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
