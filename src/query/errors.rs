//! Query parsing error types
//!
//! All variants are malformed-query conditions, raised at parse time. This
//! is a deliberate tightening of the permissive source behavior that treated
//! an unrecognized field-query shape as always-true.

use thiserror::Error;

/// Result type for query parsing
pub type QueryParseResult<T> = Result<T, QueryError>;

/// Malformed-query errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query document itself is not a JSON object
    #[error("malformed query: expected a JSON object")]
    NotAnObject,

    /// A field constraint's value is not a JSON object
    #[error("malformed query: constraint on field '{field}' must be an object")]
    ConstraintNotAnObject { field: String },

    /// A field constraint has no recognized operator key
    #[error("malformed query: constraint on field '{field}' has no recognized operator")]
    NoOperator { field: String },

    /// A field constraint has more than one operator key
    #[error("malformed query: constraint on field '{field}' has multiple operators")]
    MultipleOperators { field: String },

    /// A field constraint uses an unknown operator key
    #[error("malformed query: unknown operator '{op}' on field '{field}'")]
    UnknownOperator { field: String, op: String },

    /// `$in` requires an array of candidate values
    #[error("malformed query: $in on field '{field}' requires an array")]
    InNotAnArray { field: String },

    /// `$and` / `$or` require an array of sub-queries
    #[error("malformed query: {combinator} requires an array of sub-queries")]
    CombinatorNotAnArray { combinator: &'static str },

    /// `$text` requires a string
    #[error("malformed query: $text requires a string")]
    TextNotAString,
}
