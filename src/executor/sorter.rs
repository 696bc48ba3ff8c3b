//! Result sorting for query execution
//!
//! Applies each sort key as a successive stable pass, in config order. The
//! last key processed dominates the final order; earlier keys only decide
//! ties within runs the later passes leave alone. Documents that compare
//! equal on every provided key keep their relative order.

use serde_json::Value;

use super::options::{SortDirection, SortSpec};
use crate::Document;

/// Sorts result documents
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts documents according to the sort keys.
    ///
    /// Every pass is stable and deterministic.
    pub fn sort(documents: &mut [Document], sort: &[SortSpec]) {
        for spec in sort {
            documents.sort_by(|a, b| {
                let a_val = a.get(&spec.field);
                let b_val = b.get(&spec.field);

                let ordering = Self::compare_values(a_val, b_val);

                match spec.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
    }

    /// Compares two JSON values for sorting.
    ///
    /// Ordering rules:
    /// - missing < any present value
    /// - null < bool < number < string (then arrays, then objects)
    /// - For same types, natural ordering
    pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a_val), Some(b_val)) => {
                // Compare by type first
                let type_order = |v: &Value| -> u8 {
                    match v {
                        Value::Null => 0,
                        Value::Bool(_) => 1,
                        Value::Number(_) => 2,
                        Value::String(_) => 3,
                        Value::Array(_) => 4,
                        Value::Object(_) => 5,
                    }
                };

                let a_type = type_order(a_val);
                let b_type = type_order(b_val);

                if a_type != b_type {
                    return a_type.cmp(&b_type);
                }

                // Same type, compare values
                match (a_val, b_val) {
                    (Value::Null, Value::Null) => Ordering::Equal,
                    (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
                    (Value::Number(a_n), Value::Number(b_n)) => {
                        let a_f = a_n.as_f64().unwrap_or(0.0);
                        let b_f = b_n.as_f64().unwrap_or(0.0);
                        a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
                    }
                    (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
                    _ => Ordering::Equal, // Arrays and objects not compared
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_doc(name: &str, age: i64) -> Document {
        match json!({"name": name, "age": age}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn names(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d["name"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let mut docs = vec![make_doc("a", 3), make_doc("b", 5), make_doc("c", 1)];
        ResultSorter::sort(&mut docs, &[SortSpec::asc("age")]);
        assert_eq!(names(&docs), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_descending() {
        let mut docs = vec![make_doc("a", 3), make_doc("b", 5), make_doc("c", 1)];
        ResultSorter::sort(&mut docs, &[SortSpec::desc("age")]);
        assert_eq!(names(&docs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_stable_on_ties() {
        let mut docs = vec![make_doc("a", 25), make_doc("b", 25), make_doc("c", 25)];
        ResultSorter::sort(&mut docs, &[SortSpec::asc("age")]);
        assert_eq!(names(&docs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_last_key_dominates() {
        // Successive stable passes: the second key decides the final order,
        // the first only breaks its ties.
        let mut docs = vec![
            make_doc("a", 2),
            make_doc("b", 1),
            make_doc("c", 2),
            make_doc("d", 1),
        ];
        ResultSorter::sort(&mut docs, &[SortSpec::desc("name"), SortSpec::asc("age")]);
        assert_eq!(names(&docs), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_missing_field_sorts_first() {
        let mut docs = vec![make_doc("a", 3), make_doc("b", 5)];
        docs[1].remove("age");
        ResultSorter::sort(&mut docs, &[SortSpec::asc("age")]);
        assert_eq!(names(&docs), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_by_string() {
        let mut docs = vec![make_doc("charlie", 1), make_doc("alice", 2), make_doc("bob", 3)];
        ResultSorter::sort(&mut docs, &[SortSpec::asc("name")]);
        assert_eq!(names(&docs), vec!["alice", "bob", "charlie"]);
    }
}
