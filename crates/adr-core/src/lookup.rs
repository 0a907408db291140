//! Shared lookup entry point over the immutable dataset.
//!
//! The [`LookupService`] owns an `Arc<Dataset>` built once at startup.
//! Cloning the service is cheap and every clone reads the same dataset
//! without locking, so concurrent sessions need no coordination.

use std::sync::Arc;

use adr_ingest::Dataset;
use adr_model::{DerivedProfile, DrugRecord, PatientContext};

use crate::derive::derive;
use crate::resolve::{NotFound, resolve};

/// A resolved record together with its derived profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<'a> {
    pub record: &'a DrugRecord,
    pub profile: DerivedProfile,
}

#[derive(Debug, Clone)]
pub struct LookupService {
    dataset: Arc<Dataset>,
}

impl LookupService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Identifiers for a selection list.
    pub fn sorted_identifiers(&self) -> &[String] {
        self.dataset.sorted_identifiers()
    }

    pub fn resolve(&self, generic_name: &str) -> Result<&DrugRecord, NotFound> {
        resolve(&self.dataset, generic_name)
    }

    /// Resolve and derive in one step. A miss yields no partial profile.
    pub fn lookup(
        &self,
        generic_name: &str,
        patient: &PatientContext,
    ) -> Result<Lookup<'_>, NotFound> {
        let record = self.resolve(generic_name)?;
        Ok(Lookup {
            record,
            profile: derive(record, patient),
        })
    }
}
