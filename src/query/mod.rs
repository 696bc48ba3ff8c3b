//! Query subsystem for linedb
//!
//! Turns a declarative query document into a compiled predicate over
//! documents.
//!
//! # Design Principles
//!
//! - Parse once: option keys (`$and`, `$or`, `$text`) become AST variants at
//!   parse time; evaluation never string-matches keys against record fields
//! - Strict shapes: a field constraint with no recognized operator is a
//!   malformed query, not an always-true predicate
//! - Strict matching: no type coercion, missing/null fields never match

mod ast;
mod compile;
mod errors;

pub use ast::{Clause, CompareOp, FieldConstraint, Query};
pub use compile::Predicate;
pub use errors::{QueryError, QueryParseResult};
