//! Field projection for query results
//!
//! Maps each result to a new document containing only the listed fields, in
//! the order listed. Fields absent from a document are omitted, never
//! null-filled, and projection can never introduce a field that was not
//! explicitly listed.

use crate::Document;

/// Projects result documents onto a field list
pub struct Projector;

impl Projector {
    /// Projects one document onto the listed fields
    pub fn project(document: &Document, fields: &[String]) -> Document {
        let mut projected = Document::new();
        for field in fields {
            if let Some(value) = document.get(field) {
                projected.insert(field.clone(), value.clone());
            }
        }
        projected
    }

    /// Projects every document in place
    pub fn apply(documents: &mut Vec<Document>, fields: &[String]) {
        for document in documents.iter_mut() {
            *document = Self::project(document, fields);
        }
    }
}
