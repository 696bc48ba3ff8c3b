//! Result-shaping option errors

use thiserror::Error;

/// Result type for option parsing
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Malformed find-options errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutorError {
    /// The options document is not a JSON object
    #[error("malformed options: expected a JSON object")]
    NotAnObject,

    /// `sort` must map field names to a direction
    #[error("malformed options: sort must be an object of field -> direction")]
    SortNotAnObject,

    /// A sort direction must be a non-zero number; its sign picks the order
    #[error("malformed options: invalid sort direction for field '{field}'")]
    InvalidSortDirection { field: String },

    /// `projection` must be an array of field names
    #[error("malformed options: projection must be an array of field names")]
    ProjectionNotAnArray,

    /// Every projection entry must be a string
    #[error("malformed options: projection entries must be strings")]
    ProjectionFieldNotAString,
}
