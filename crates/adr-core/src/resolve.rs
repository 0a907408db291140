//! Exact-match record resolution.

use adr_ingest::Dataset;
use adr_model::DrugRecord;
use tracing::debug;

/// No record has the requested generic name.
///
/// Callers show an explicit absence state and skip derivation and report
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no data found for drug {name:?}")]
pub struct NotFound {
    pub name: String,
}

/// Resolve `generic_name` against the dataset.
///
/// Matching is exact and case-sensitive; no trimming or fuzzy fallback.
pub fn resolve<'a>(dataset: &'a Dataset, generic_name: &str) -> Result<&'a DrugRecord, NotFound> {
    match dataset.get(generic_name) {
        Some(record) => Ok(record),
        None => {
            debug!(generic_name, "drug not found in reference dataset");
            Err(NotFound {
                name: generic_name.to_string(),
            })
        }
    }
}
