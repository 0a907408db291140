//! Data model for ADR lookups.
//!
//! Records come from the reference dataset and are never mutated. Patient
//! contexts and derived profiles live for a single lookup.

pub mod columns;
pub mod patient;
pub mod profile;
pub mod record;
pub mod risk;

pub use patient::{AgeGroup, Gender, PatientContext};
pub use profile::DerivedProfile;
pub use record::{DrugRecord, MISSING_PLACEHOLDER};
pub use risk::{RiskBand, RiskTag};
