//! Report rendering from a record and its derived profile.

use adr_model::{DerivedProfile, DrugRecord, MISSING_PLACEHOLDER, PatientContext};
use chrono::NaiveDate;

use crate::document::{ReportDocument, ReportLine, ReportSection, SectionKind};

/// Body lines that fit on one Letter page at 12pt.
pub const DEFAULT_LINES_PER_PAGE: usize = 28;

/// Field labels as they appear in the rendered report.
pub mod labels {
    pub const AGE_GROUP: &str = "Patient Age Group";
    pub const GENDER: &str = "Gender";
    pub const DRUG: &str = "Drug";
    pub const THERAPEUTIC_CLASS: &str = "Therapeutic Class";
    pub const ROUTE: &str = "Route";
    pub const USUAL_DOSE: &str = "Usual Dose";
    pub const COMMON_ADRS: &str = "Common ADRs";
    pub const SERIOUS_ADRS: &str = "Serious ADRs";
    pub const ADR_CATEGORIES: &str = "ADR Categories";
    pub const TOTAL_ADRS: &str = "Total ADRs";
    pub const CHANCE: &str = "Chance of Serious ADR";
    pub const RISK_STATUS: &str = "ADR Risk Status";
}

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub title: String,
    /// Tool name shown in the generated-by line.
    pub generated_by: String,
    /// Appended to the generated-by line when set.
    pub generated_on: Option<NaiveDate>,
    pub lines_per_page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "ADR Prediction Report".to_string(),
            generated_by: "ADR Lookup".to_string(),
            generated_on: None,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }
}

impl ReportOptions {
    #[must_use]
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    #[must_use]
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines;
        self
    }

    fn generated_line(&self) -> String {
        match self.generated_on {
            Some(date) => format!("Generated by {} on {date}", self.generated_by),
            None => format!("Generated by {}", self.generated_by),
        }
    }
}

/// Render the report document. Never fails; absent fields show the
/// placeholder.
pub fn render(
    record: &DrugRecord,
    patient: &PatientContext,
    profile: &DerivedProfile,
    options: &ReportOptions,
) -> ReportDocument {
    let header = ReportSection {
        kind: SectionKind::Header,
        lines: vec![
            ReportLine::Title(options.title.clone()),
            ReportLine::Text(options.generated_line()),
        ],
    };

    let patient_section = ReportSection {
        kind: SectionKind::Patient,
        lines: vec![
            ReportLine::field(labels::AGE_GROUP, patient.age_group.label()),
            ReportLine::field(labels::GENDER, patient.gender.as_str()),
        ],
    };

    let drug = ReportSection {
        kind: SectionKind::Drug,
        lines: vec![
            ReportLine::field(labels::DRUG, record.generic_name.as_str()),
            ReportLine::field(
                labels::THERAPEUTIC_CLASS,
                record.therapeutic_class_or_placeholder(),
            ),
            ReportLine::field(labels::ROUTE, record.route_or_placeholder()),
            ReportLine::field(labels::USUAL_DOSE, record.usual_adult_dose_or_placeholder()),
        ],
    };

    let adr = ReportSection {
        kind: SectionKind::Adr,
        lines: vec![
            ReportLine::Blank,
            ReportLine::field(
                labels::COMMON_ADRS,
                join_list(record.common_adrs.as_deref(), &profile.common_adrs),
            ),
            ReportLine::field(
                labels::SERIOUS_ADRS,
                join_list(record.serious_adrs.as_deref(), &profile.serious_adrs),
            ),
            ReportLine::field(labels::ADR_CATEGORIES, record.adr_label_or_placeholder()),
            ReportLine::field(labels::TOTAL_ADRS, profile.total_adrs.to_string()),
        ],
    };

    let risk = ReportSection {
        kind: SectionKind::Risk,
        lines: vec![
            ReportLine::field(
                labels::CHANCE,
                format!("{}%", profile.chance_percent_whole()),
            ),
            ReportLine::field(labels::RISK_STATUS, profile.status.as_str()),
        ],
    };

    ReportDocument::new(
        options.title.clone(),
        vec![header, patient_section, drug, adr, risk],
        options.lines_per_page,
    )
}

/// An absent column shows the placeholder; a present column whose entries
/// were all filtered (e.g. `None`) shows an empty list.
fn join_list(raw: Option<&str>, entries: &[String]) -> String {
    match raw {
        None => MISSING_PLACEHOLDER.to_string(),
        Some(_) => entries.join(", "),
    }
}
