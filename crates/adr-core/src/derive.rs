//! Derived-field computation.
//!
//! Turns a [`DrugRecord`] into a [`DerivedProfile`]. The derivation is a pure
//! function of its inputs and never fails:
//!
//! - `Common ADRs` / `Serious ADRs` are split on `,`, trimmed, and filtered
//!   of empty pieces and the literal `None` sentinel. Counts are the lengths
//!   of the filtered lists, not counts of underlying reaction codes.
//! - `Chance of Serious ADR (%)` is banded with half-open intervals:
//!   `[0, 33)` Low, `[33, 66)` Moderate, `[66, ..]` High. Absent or NaN
//!   values count as zero.
//! - `ADR Risk Status` is banded independently: `high` and `moderate`
//!   (case-insensitive) map to their bands, anything else to Low.

use adr_model::record::display_or_placeholder;
use adr_model::{DerivedProfile, DrugRecord, PatientContext, RiskBand};
use tracing::debug;

/// Literal token meaning "no entries" inside ADR list fields. Case-sensitive.
pub const NONE_SENTINEL: &str = "None";

/// Lower bound (inclusive) of the Moderate band.
pub const MODERATE_THRESHOLD: f64 = 33.0;

/// Lower bound (inclusive) of the High band.
pub const HIGH_THRESHOLD: f64 = 66.0;

/// Compute the derived profile for a resolved record.
pub fn derive(record: &DrugRecord, patient: &PatientContext) -> DerivedProfile {
    let common_adrs = split_adr_list(record.common_adrs.as_deref());
    let serious_adrs = split_adr_list(record.serious_adrs.as_deref());
    let chance_percent = normalize_chance(record.chance_of_serious_adr_percent);
    let risk_band = classify_chance(chance_percent);
    let status_band = classify_status(record.adr_risk_status.as_deref());

    if risk_band != status_band {
        debug!(
            generic_name = %record.generic_name,
            risk_band = %risk_band,
            status_band = %status_band,
            "numeric and textual risk disagree"
        );
    }

    DerivedProfile {
        patient: *patient,
        common_count: common_adrs.len(),
        serious_count: serious_adrs.len(),
        common_adrs,
        serious_adrs,
        total_adrs: record.total_adrs_or_default(),
        chance_percent,
        risk_band,
        risk_tag: risk_band.tag(),
        status: display_or_placeholder(record.adr_risk_status.as_deref()).to_string(),
        status_band,
        status_tag: status_band.tag(),
    }
}

/// Split a comma-separated ADR field into clean entries, preserving order.
pub fn split_adr_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && *entry != NONE_SENTINEL)
        .map(str::to_string)
        .collect()
}

/// Absent and NaN percentages become zero.
pub fn normalize_chance(raw: Option<f64>) -> f64 {
    match raw {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Band a percentage. Boundary values belong to the higher band.
pub fn classify_chance(percent: f64) -> RiskBand {
    if percent.is_nan() || percent < MODERATE_THRESHOLD {
        RiskBand::Low
    } else if percent < HIGH_THRESHOLD {
        RiskBand::Moderate
    } else {
        RiskBand::High
    }
}

/// Band the textual risk status.
pub fn classify_status(status: Option<&str>) -> RiskBand {
    match status {
        Some(text) if text.eq_ignore_ascii_case("high") => RiskBand::High,
        Some(text) if text.eq_ignore_ascii_case("moderate") => RiskBand::Moderate,
        _ => RiskBand::Low,
    }
}
