//! Store Query Semantics Tests
//!
//! End-to-end coverage of the query surface against a real log file:
//! - Field comparisons ($eq, $gt, $lt, $in) over inserted records
//! - Boolean combinators ($and, $or) per boolean algebra
//! - Full-text token matching ($text) over configured fields
//! - Result shaping: stable filter, sort passes, projection

use linedb::{Document, FindOptions, Query, SortSpec, Store, StoreConfig};
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn doc(value: Value) -> Document {
    value.as_object().expect("test document must be an object").clone()
}

fn names(results: &[Document]) -> Vec<&str> {
    results.iter().map(|d| d["name"].as_str().unwrap()).collect()
}

async fn seeded_store(dir: &TempDir) -> Store {
    let store = Store::new(dir.path().join("records.log"), StoreConfig::new());
    store.insert(doc(json!({"name": "a", "age": 3}))).await.unwrap();
    store.insert(doc(json!({"name": "b", "age": 5}))).await.unwrap();
    store.insert(doc(json!({"name": "c", "age": 1}))).await.unwrap();
    store
}

async fn find(store: &Store, query: Value) -> Vec<Document> {
    store.find_json(&query, None).await.unwrap()
}

// =============================================================================
// Field Comparisons
// =============================================================================

#[tokio::test]
async fn test_eq_returns_exact_subset() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = find(&store, json!({"name": {"$eq": "b"}})).await;
    assert_eq!(names(&results), vec!["b"]);

    let results = find(&store, json!({"name": {"$eq": "missing"}})).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_gt_returns_in_stored_order() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = find(&store, json!({"age": {"$gt": 2}})).await;
    assert_eq!(names(&results), vec!["a", "b"]);
}

#[tokio::test]
async fn test_lt_and_in() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = find(&store, json!({"age": {"$lt": 4}})).await;
    assert_eq!(names(&results), vec!["a", "c"]);

    let results = find(&store, json!({"age": {"$in": [1, 5, 99]}})).await;
    assert_eq!(names(&results), vec!["b", "c"]);
}

#[tokio::test]
async fn test_empty_query_returns_everything() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = find(&store, json!({})).await;
    assert_eq!(names(&results), vec!["a", "b", "c"]);
}

// =============================================================================
// Boolean Combinators
// =============================================================================

#[tokio::test]
async fn test_or_over_disjoint_ranges() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = find(
        &store,
        json!({"$or": [{"age": {"$lt": 2}}, {"age": {"$gt": 4}}]}),
    )
    .await;
    assert_eq!(names(&results), vec!["b", "c"]);
}

#[tokio::test]
async fn test_and_conjunction() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = find(
        &store,
        json!({"$and": [{"age": {"$gt": 2}}, {"age": {"$lt": 4}}]}),
    )
    .await;
    assert_eq!(names(&results), vec!["a"]);
}

#[tokio::test]
async fn test_empty_combinators() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    // $and over nothing matches everything
    let results = find(&store, json!({"$and": []})).await;
    assert_eq!(results.len(), 3);

    // $or over nothing matches nothing
    let results = find(&store, json!({"$or": []})).await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_malformed_query_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let err = store.find_json(&json!({"age": {"$near": 2}}), None).await;
    assert!(err.is_err());

    let err = store.find_json(&json!({"age": {}}), None).await;
    assert!(err.is_err());
}

// =============================================================================
// Full-Text Matching
// =============================================================================

#[tokio::test]
async fn test_text_matches_configured_fields_only() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::new().with_text_fields(vec!["bio".into()]);
    let store = Store::new(dir.path().join("records.log"), config);

    store
        .insert(doc(json!({"name": "a", "bio": "Likes rust and CHESS"})))
        .await
        .unwrap();
    store
        .insert(doc(json!({"name": "b", "bio": "prefers go"})))
        .await
        .unwrap();

    let results = find(&store, json!({"$text": "chess"})).await;
    assert_eq!(names(&results), vec!["a"]);

    // Tokens come from configured fields; "a" as a name is invisible
    let results = find(&store, json!({"$text": "a"})).await;
    assert!(results.is_empty());
}

// =============================================================================
// Result Shaping
// =============================================================================

#[tokio::test]
async fn test_sort_ascending_by_age() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = store
        .find_json(&json!({}), Some(&json!({"sort": {"age": 1}})))
        .await
        .unwrap();
    assert_eq!(names(&results), vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_sort_descending_by_age() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = store
        .find_json(&json!({}), Some(&json!({"sort": {"age": -1}})))
        .await
        .unwrap();
    assert_eq!(names(&results), vec!["b", "a", "c"]);
}

#[tokio::test]
async fn test_sort_ties_keep_stored_order() {
    let dir = TempDir::new().unwrap();
    let store = Store::new(dir.path().join("records.log"), StoreConfig::new());
    store.insert(doc(json!({"name": "x", "age": 2}))).await.unwrap();
    store.insert(doc(json!({"name": "y", "age": 2}))).await.unwrap();
    store.insert(doc(json!({"name": "z", "age": 1}))).await.unwrap();

    let results = store
        .find(&Query::empty(), &FindOptions::new().with_sort(SortSpec::asc("age")))
        .await
        .unwrap();
    assert_eq!(names(&results), vec!["z", "x", "y"]);
}

#[tokio::test]
async fn test_projection_limits_fields() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = store
        .find_json(
            &json!({"age": {"$gt": 2}}),
            Some(&json!({"projection": ["name"]})),
        )
        .await
        .unwrap();

    assert_eq!(names(&results), vec!["a", "b"]);
    for result in &results {
        assert_eq!(result.len(), 1);
        assert!(!result.contains_key("age"));
    }
}

#[tokio::test]
async fn test_sort_and_projection_compose() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir).await;

    let results = store
        .find_json(
            &json!({}),
            Some(&json!({"sort": {"age": 1}, "projection": ["name"]})),
        )
        .await
        .unwrap();

    assert_eq!(names(&results), vec!["c", "a", "b"]);
    assert!(results.iter().all(|d| d.len() == 1));
}
