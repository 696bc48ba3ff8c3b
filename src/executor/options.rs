//! Result-shaping configuration for `find`
//!
//! Holds the optional sort and projection specifications. Both can be built
//! directly or parsed from a JSON config document mirroring the query
//! surface:
//!
//! ```text
//! {"sort": {"age": 1, "name": -1}, "projection": ["name"]}
//! ```
//!
//! A sort direction is a signed number: positive ascending, negative
//! descending. Zero is rejected.

use serde_json::Value;

use super::errors::{ExecutorError, ExecutorResult};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Maps the sign of a numeric direction value; zero has no direction
    pub fn from_sign(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(SortDirection::Asc)
        } else if value < 0.0 {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }
}

/// One sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Options for a `find` call: optional sort, optional projection.
///
/// Filtering always runs; sort and projection are independently optional and
/// are applied in the fixed order filter, then sort, then project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    /// Sort keys in config order; each is applied as a successive stable
    /// pass, so the LAST key has the dominant effect on final order
    pub sort: Vec<SortSpec>,
    /// Fields to retain in results, in listed order; `None` keeps everything
    pub projection: Option<Vec<String>>,
}

impl FindOptions {
    /// Options that return matches unshaped
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sort key
    pub fn with_sort(mut self, spec: SortSpec) -> Self {
        self.sort.push(spec);
        self
    }

    /// Sets the projection
    pub fn with_projection(mut self, fields: Vec<String>) -> Self {
        self.projection = Some(fields);
        self
    }

    /// Parses a JSON config document
    pub fn parse(value: &Value) -> ExecutorResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            _ => return Err(ExecutorError::NotAnObject),
        };

        let mut options = Self::new();

        if let Some(sort) = map.get("sort") {
            let sort_map = match sort {
                Value::Object(m) => m,
                _ => return Err(ExecutorError::SortNotAnObject),
            };
            for (field, direction) in sort_map {
                let direction = direction
                    .as_f64()
                    .and_then(SortDirection::from_sign)
                    .ok_or_else(|| ExecutorError::InvalidSortDirection {
                        field: field.clone(),
                    })?;
                options.sort.push(SortSpec {
                    field: field.clone(),
                    direction,
                });
            }
        }

        if let Some(projection) = map.get("projection") {
            let items = match projection {
                Value::Array(items) => items,
                _ => return Err(ExecutorError::ProjectionNotAnArray),
            };
            let fields = items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or(ExecutorError::ProjectionFieldNotAString)
                })
                .collect::<ExecutorResult<Vec<String>>>()?;
            options.projection = Some(fields);
        }

        Ok(options)
    }
}
