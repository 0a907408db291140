//! Patient context supplied with each lookup.
//!
//! The age bands mirror the selection list of the dashboard. Teen (13–19)
//! and Young Adult (18–25) overlap, as do Young Adult and Adult at 25.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age band of the patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 0–3 years.
    Baby,
    /// 4–12 years.
    Child,
    /// 13–19 years.
    Teen,
    /// 18–25 years.
    YoungAdult,
    /// 25–60 years.
    #[default]
    Adult,
    /// 60 years and over.
    Senior,
}

impl AgeGroup {
    /// Label as shown in the selection list, e.g. `Adult (25–60)`.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Baby => "Baby (0–3)",
            AgeGroup::Child => "Child (4–12)",
            AgeGroup::Teen => "Teen (13–19)",
            AgeGroup::YoungAdult => "Young Adult (18–25)",
            AgeGroup::Adult => "Adult (25–60)",
            AgeGroup::Senior => "Senior (60+)",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-lookup patient information. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientContext {
    pub age_group: AgeGroup,
    pub gender: Gender,
}

impl PatientContext {
    pub fn new(age_group: AgeGroup, gender: Gender) -> Self {
        Self { age_group, gender }
    }
}
