//! Result-shaping pipeline
//!
//! Fixed execution order: filter, then sort, then project. The filter
//! always runs and preserves stored order; sort and projection are each
//! optional.

use crate::query::Predicate;
use crate::Document;

use super::options::FindOptions;
use super::projection::Projector;
use super::sorter::ResultSorter;

/// Runs the filter -> sort -> project pipeline
pub struct ResultPipeline;

impl ResultPipeline {
    /// Shapes a loaded record set into the final result sequence.
    pub fn run(
        documents: Vec<Document>,
        predicate: &Predicate<'_>,
        options: &FindOptions,
    ) -> Vec<Document> {
        // Stable filter: stored order survives into the result
        let mut results: Vec<Document> = documents
            .into_iter()
            .filter(|document| predicate.matches(document))
            .collect();

        if !options.sort.is_empty() {
            ResultSorter::sort(&mut results, &options.sort);
        }

        if let Some(fields) = &options.projection {
            Projector::apply(&mut results, fields);
        }

        results
    }
}
