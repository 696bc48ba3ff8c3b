//! Query AST structures
//!
//! A query document is parsed into a tagged union once, up front. Option
//! keys (`$and`, `$or`, `$text`) are distinguished from field names at parse
//! time, so a record field literally named `$and` can never collide with the
//! combinator at evaluation time.

use serde_json::Value;

use super::errors::{QueryError, QueryParseResult};

/// Comparison operators for a single field constraint
#[derive(Debug, Clone, PartialEq)]
pub enum CompareOp {
    /// Deep equality: field == value
    Eq(Value),
    /// Greater than: field > value (host ordering of the value type)
    Gt(Value),
    /// Less than: field < value (host ordering of the value type)
    Lt(Value),
    /// Membership: field equals any element of the set
    In(Vec<Value>),
}

/// A single field constraint (field + comparison)
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    /// Field name
    pub field: String,
    /// Comparison operator
    pub op: CompareOp,
}

impl FieldConstraint {
    /// Create an equality constraint
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: CompareOp::Eq(value),
        }
    }

    /// Create a greater-than constraint
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: CompareOp::Gt(value),
        }
    }

    /// Create a less-than constraint
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: CompareOp::Lt(value),
        }
    }

    /// Create a membership constraint
    pub fn is_in(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            field: field.into(),
            op: CompareOp::In(values),
        }
    }

    /// Parses one field constraint from its JSON value.
    ///
    /// Exactly one recognized operator key is expected; anything else is a
    /// malformed query.
    fn parse(field: &str, value: &Value) -> QueryParseResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            _ => {
                return Err(QueryError::ConstraintNotAnObject {
                    field: field.to_string(),
                })
            }
        };

        let mut op = None;
        for (key, operand) in map {
            let parsed = match key.as_str() {
                "$eq" => CompareOp::Eq(operand.clone()),
                "$gt" => CompareOp::Gt(operand.clone()),
                "$lt" => CompareOp::Lt(operand.clone()),
                "$in" => match operand {
                    Value::Array(items) => CompareOp::In(items.clone()),
                    _ => {
                        return Err(QueryError::InNotAnArray {
                            field: field.to_string(),
                        })
                    }
                },
                other => {
                    return Err(QueryError::UnknownOperator {
                        field: field.to_string(),
                        op: other.to_string(),
                    })
                }
            };
            if op.replace(parsed).is_some() {
                return Err(QueryError::MultipleOperators {
                    field: field.to_string(),
                });
            }
        }

        match op {
            Some(op) => Ok(Self {
                field: field.to_string(),
                op,
            }),
            None => Err(QueryError::NoOperator {
                field: field.to_string(),
            }),
        }
    }
}

/// One clause of a query document
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Ordinary field constraint
    Field(FieldConstraint),
    /// Conjunction of sub-queries; empty list is vacuously true
    And(Vec<Query>),
    /// Disjunction of sub-queries; empty list is vacuously false
    Or(Vec<Query>),
    /// Case-insensitive token match over the configured full-text fields
    Text(String),
}

/// A parsed query document.
///
/// All clauses combine by implicit AND; the empty query matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// Clauses in document order
    pub clauses: Vec<Clause>,
}

impl Query {
    /// The query that matches every document
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a query document.
    ///
    /// Keys `$and`, `$or` and `$text` are combinators; every other key is a
    /// field constraint. Sub-queries of `$and`/`$or` are themselves full
    /// query documents and may nest arbitrarily.
    pub fn parse(value: &Value) -> QueryParseResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            _ => return Err(QueryError::NotAnObject),
        };

        let mut clauses = Vec::with_capacity(map.len());
        for (key, val) in map {
            let clause = match key.as_str() {
                "$and" => Clause::And(Self::parse_subqueries(val, "$and")?),
                "$or" => Clause::Or(Self::parse_subqueries(val, "$or")?),
                "$text" => match val {
                    Value::String(text) => Clause::Text(text.clone()),
                    _ => return Err(QueryError::TextNotAString),
                },
                field => Clause::Field(FieldConstraint::parse(field, val)?),
            };
            clauses.push(clause);
        }

        Ok(Self { clauses })
    }

    fn parse_subqueries(value: &Value, combinator: &'static str) -> QueryParseResult<Vec<Query>> {
        match value {
            Value::Array(items) => items.iter().map(Query::parse).collect(),
            _ => Err(QueryError::CombinatorNotAnArray { combinator }),
        }
    }
}
