//! Store subsystem for linedb
//!
//! Orchestrates the log codec, the query compiler and the result pipeline
//! over one log file, with an exclusive section guarding mutation.

mod config;
mod errors;
#[allow(clippy::module_inception)]
mod store;

pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
pub use store::Store;
