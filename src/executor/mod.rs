//! Result pipeline subsystem for linedb
//!
//! Consumes compiled predicates and produces deterministic, shaped results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter documents with the compiled predicate (stable, stored order)
//! 2. Apply sort keys as successive stable passes (if specified)
//! 3. Apply field projection (if specified)
//!
//! # Invariants
//!
//! - Filter always runs; sort and projection are independently optional
//! - Documents equal on every sort key keep their relative order
//! - Projection never introduces fields not explicitly listed

mod errors;
mod options;
mod pipeline;
mod projection;
mod sorter;

pub use errors::{ExecutorError, ExecutorResult};
pub use options::{FindOptions, SortDirection, SortSpec};
pub use pipeline::ResultPipeline;
pub use projection::Projector;
pub use sorter::ResultSorter;
