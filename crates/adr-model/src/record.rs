use serde::{Deserialize, Serialize};

/// Placeholder shown wherever an optional field is absent.
pub const MISSING_PLACEHOLDER: &str = "N/A";

/// One row of the reference dataset.
///
/// Optional columns are `None` when the cell was empty. Numeric cells that
/// failed to parse are also `None`; consumers fall back to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Unique key. Lookups match it exactly, case included.
    pub generic_name: String,
    pub therapeutic_class: Option<String>,
    pub route: Option<String>,
    pub usual_adult_dose: Option<String>,
    /// Comma separated reaction names, may hold the literal `None`.
    pub common_adrs: Option<String>,
    /// Same shape as `common_adrs`.
    pub serious_adrs: Option<String>,
    pub adr_label: Option<String>,
    pub total_adrs: Option<i64>,
    pub chance_of_serious_adr_percent: Option<f64>,
    pub adr_risk_status: Option<String>,
}

impl DrugRecord {
    /// A record with only the key set.
    pub fn new(generic_name: impl Into<String>) -> Self {
        Self {
            generic_name: generic_name.into(),
            therapeutic_class: None,
            route: None,
            usual_adult_dose: None,
            common_adrs: None,
            serious_adrs: None,
            adr_label: None,
            total_adrs: None,
            chance_of_serious_adr_percent: None,
            adr_risk_status: None,
        }
    }

    /// Total ADR count, zero when absent.
    pub fn total_adrs_or_default(&self) -> i64 {
        self.total_adrs.unwrap_or(0)
    }

    pub fn therapeutic_class_or_placeholder(&self) -> &str {
        display_or_placeholder(self.therapeutic_class.as_deref())
    }

    pub fn route_or_placeholder(&self) -> &str {
        display_or_placeholder(self.route.as_deref())
    }

    pub fn usual_adult_dose_or_placeholder(&self) -> &str {
        display_or_placeholder(self.usual_adult_dose.as_deref())
    }

    pub fn adr_label_or_placeholder(&self) -> &str {
        display_or_placeholder(self.adr_label.as_deref())
    }

    pub fn adr_risk_status_or_placeholder(&self) -> &str {
        display_or_placeholder(self.adr_risk_status.as_deref())
    }
}

/// Returns the value when non-blank, otherwise [`MISSING_PLACEHOLDER`].
pub fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => MISSING_PLACEHOLDER,
    }
}
