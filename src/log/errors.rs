//! Log codec error types
//!
//! Error conditions:
//! - `CorruptRecord` — a live line whose payload does not deserialize; the
//!   whole load fails (strict policy, see module docs in `codec.rs`)
//! - `UnencodableRecord` — a document whose serialized form would span lines
//! - `Serialize` — the JSON encoder itself failed

use thiserror::Error;

/// Result type for log codec operations
pub type LogResult<T> = Result<T, LogError>;

/// Log codec errors
#[derive(Debug, Error)]
pub enum LogError {
    /// A live line failed to deserialize as a JSON object
    #[error("corrupt record at line {line}: {reason}")]
    CorruptRecord {
        /// 1-based line number in the log file
        line: usize,
        /// What went wrong while decoding the payload
        reason: String,
    },

    /// A document's serialized form would contain a line terminator
    #[error("record cannot be encoded on a single line")]
    UnencodableRecord,

    /// JSON serialization failed
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LogError {
    /// Create a corruption error for the given line
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        LogError::CorruptRecord {
            line,
            reason: reason.into(),
        }
    }
}
