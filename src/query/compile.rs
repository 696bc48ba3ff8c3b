//! Predicate evaluation against documents
//!
//! Evaluates a parsed [`Query`] strictly against a document. No type
//! coercion: `$eq`/`$in` use deep equality, `$gt`/`$lt` compare only values
//! of the same type (numbers numerically, strings lexicographically), and a
//! missing or null field never matches.

use serde_json::Value;

use super::ast::{Clause, CompareOp, FieldConstraint, Query};
use crate::Document;

/// A compiled predicate: a query bound to the store's full-text fields.
///
/// Built once per query call, applied per record during filtering.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<'q> {
    query: &'q Query,
    text_fields: &'q [String],
}

impl<'q> Predicate<'q> {
    /// Binds a query to the set of full-text-search fields
    pub fn new(query: &'q Query, text_fields: &'q [String]) -> Self {
        Self { query, text_fields }
    }

    /// Returns true if the document satisfies the query
    pub fn matches(&self, document: &Document) -> bool {
        self.eval_query(self.query, document)
    }

    /// All clauses of a query combine by implicit AND
    fn eval_query(&self, query: &Query, document: &Document) -> bool {
        query
            .clauses
            .iter()
            .all(|clause| self.eval_clause(clause, document))
    }

    fn eval_clause(&self, clause: &Clause, document: &Document) -> bool {
        match clause {
            Clause::Field(constraint) => Self::eval_constraint(constraint, document),
            // $and over the empty list is vacuously true, $or vacuously false
            Clause::And(subs) => subs.iter().all(|q| self.eval_query(q, document)),
            Clause::Or(subs) => subs.iter().any(|q| self.eval_query(q, document)),
            Clause::Text(needle) => self.eval_text(needle, document),
        }
    }

    /// True iff any configured full-text field, stringified and split on
    /// whitespace, contains a token case-insensitively equal to the needle.
    fn eval_text(&self, needle: &str, document: &Document) -> bool {
        let needle = needle.to_lowercase();
        self.text_fields.iter().any(|field| {
            document.get(field).is_some_and(|value| {
                stringify(value)
                    .split_whitespace()
                    .any(|token| token.to_lowercase() == needle)
            })
        })
    }

    fn eval_constraint(constraint: &FieldConstraint, document: &Document) -> bool {
        let field_value = match document.get(&constraint.field) {
            Some(v) => v,
            None => return false, // Missing field = no match
        };

        // Null values never match
        if field_value.is_null() {
            return false;
        }

        match &constraint.op {
            CompareOp::Eq(expected) => field_value == expected,
            CompareOp::Gt(bound) => gt_match(field_value, bound),
            CompareOp::Lt(bound) => lt_match(field_value, bound),
            CompareOp::In(set) => set.iter().any(|candidate| candidate == field_value),
        }
    }
}

/// Greater than (numbers and strings only, no cross-type matches)
fn gt_match(actual: &Value, bound: &Value) -> bool {
    match (actual, bound) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(af), Some(bf)) = (a.as_f64(), b.as_f64()) {
                return af > bf;
            }
            if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
                return ai > bi;
            }
            false
        }
        (Value::String(a), Value::String(b)) => a > b,
        _ => false,
    }
}

/// Less than (numbers and strings only, no cross-type matches)
fn lt_match(actual: &Value, bound: &Value) -> bool {
    match (actual, bound) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(af), Some(bf)) = (a.as_f64(), b.as_f64()) {
                return af < bf;
            }
            if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
                return ai < bi;
            }
            false
        }
        (Value::String(a), Value::String(b)) => a < b,
        _ => false,
    }
}

/// Renders a field value for full-text token matching.
///
/// Strings are used as-is; everything else uses its compact JSON form.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
