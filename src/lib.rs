//! linedb - an embedded, line-oriented, append-only document store
//!
//! Records are JSON documents appended to a text log, one per line, each
//! prefixed with a one-character status tag. Deletion tombstones the tag in
//! place; tombstoned payloads are never re-parsed. Queries are declarative
//! documents (`$eq`, `$gt`, `$lt`, `$in`, `$text`, `$and`, `$or`) shaped by
//! an optional sort and projection.
//!
//! ```no_run
//! use linedb::{FindOptions, Query, SortSpec, Store, StoreConfig};
//! use serde_json::json;
//!
//! # async fn demo() -> linedb::StoreResult<()> {
//! let store = Store::new("records.log", StoreConfig::new());
//!
//! let record = json!({"name": "a", "age": 3});
//! store.insert(record.as_object().unwrap().clone()).await?;
//!
//! let adults = Query::parse(&json!({"age": {"$gt": 2}}))?;
//! let results = store
//!     .find(&adults, &FindOptions::new().with_sort(SortSpec::asc("age")))
//!     .await?;
//! # let _ = results;
//! # Ok(())
//! # }
//! ```

pub mod executor;
pub mod log;
pub mod query;
pub mod stats;
pub mod store;

pub use executor::{FindOptions, SortDirection, SortSpec};
pub use query::Query;
pub use store::{Store, StoreConfig, StoreError, StoreResult};

/// A record: a JSON object mapping field names to values.
///
/// Key order is preserved, which is what makes projection output order
/// follow the projection list.
pub type Document = serde_json::Map<String, serde_json::Value>;
