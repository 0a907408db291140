//! In-memory reference dataset.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use adr_model::DrugRecord;
use tracing::warn;

/// A dataset row that could not become a [`DrugRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub reason: String,
}

/// Immutable reference dataset, loaded once and shared read-only.
///
/// Records keep file order. When a generic name appears more than once the
/// first row wins for lookups; later rows stay in [`Dataset::records`].
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    records: Vec<DrugRecord>,
    index: HashMap<String, usize>,
    identifiers: Vec<String>,
    rejected: Vec<RejectedRow>,
}

impl Dataset {
    pub fn from_records(
        source: impl Into<PathBuf>,
        records: Vec<DrugRecord>,
        rejected: Vec<RejectedRow>,
    ) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.contains_key(&record.generic_name) {
                warn!(
                    generic_name = %record.generic_name,
                    position,
                    "duplicate generic name, keeping first row"
                );
                continue;
            }
            index.insert(record.generic_name.clone(), position);
        }
        let identifiers: Vec<String> = records
            .iter()
            .map(|record| record.generic_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self {
            source: source.into(),
            records,
            index,
            identifiers,
            rejected,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup by generic name.
    pub fn get(&self, generic_name: &str) -> Option<&DrugRecord> {
        self.index
            .get(generic_name)
            .and_then(|&position| self.records.get(position))
    }

    pub fn contains(&self, generic_name: &str) -> bool {
        self.index.contains_key(generic_name)
    }

    /// Generic names sorted and deduplicated, case-sensitive.
    pub fn sorted_identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Rows skipped during load, in file order.
    pub fn rejected_rows(&self) -> &[RejectedRow] {
        &self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, route: &str) -> DrugRecord {
        let mut record = DrugRecord::new(name);
        record.route = Some(route.to_string());
        record
    }

    #[test]
    fn first_duplicate_wins() {
        let dataset = Dataset::from_records(
            "memory.csv",
            vec![record("Ibuprofen", "Oral"), record("Ibuprofen", "Topical")],
            vec![],
        );
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.get("Ibuprofen").and_then(|r| r.route.as_deref()),
            Some("Oral")
        );
        assert_eq!(dataset.sorted_identifiers(), ["Ibuprofen".to_string()]);
    }

    #[test]
    fn identifiers_sort_case_sensitively() {
        let dataset = Dataset::from_records(
            "memory.csv",
            vec![
                record("warfarin", "Oral"),
                record("Metformin", "Oral"),
                record("Aspirin", "Oral"),
            ],
            vec![],
        );
        assert_eq!(
            dataset.sorted_identifiers(),
            ["Aspirin", "Metformin", "warfarin"].map(String::from)
        );
        assert!(dataset.get("aspirin").is_none());
        assert!(dataset.contains("warfarin"));
    }
}
