use serde::{Deserialize, Serialize};

use crate::patient::PatientContext;
use crate::risk::{RiskBand, RiskTag};

/// Summary of a resolved record for one patient context.
///
/// Recomputed on every lookup and never stored. The numeric and textual
/// risk classifications are kept side by side and may disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedProfile {
    pub patient: PatientContext,
    pub common_adrs: Vec<String>,
    pub serious_adrs: Vec<String>,
    pub common_count: usize,
    pub serious_count: usize,
    /// `Total ADRs` column, zero when absent.
    pub total_adrs: i64,
    /// Chance of a serious ADR in percent, zero when absent or NaN.
    pub chance_percent: f64,
    /// Band derived from `chance_percent`.
    pub risk_band: RiskBand,
    pub risk_tag: RiskTag,
    /// `ADR Risk Status` text as displayed, placeholder when absent.
    pub status: String,
    /// Band derived from the status text.
    pub status_band: RiskBand,
    pub status_tag: RiskTag,
}

impl DerivedProfile {
    /// Whole percent shown in the report, truncated toward zero.
    pub fn chance_percent_whole(&self) -> i64 {
        self.chance_percent.trunc() as i64
    }

    /// Chance clamped to `0..=100` for progress indicators.
    pub fn progress_percent(&self) -> f64 {
        self.chance_percent.clamp(0.0, 100.0)
    }

    /// True when the numeric and textual classifications agree.
    pub fn bands_agree(&self) -> bool {
        self.risk_band == self.status_band
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(chance: f64) -> DerivedProfile {
        DerivedProfile {
            patient: PatientContext::default(),
            common_adrs: vec![],
            serious_adrs: vec![],
            common_count: 0,
            serious_count: 0,
            total_adrs: 0,
            chance_percent: chance,
            risk_band: RiskBand::Low,
            risk_tag: RiskTag::Safe,
            status: "High".to_string(),
            status_band: RiskBand::High,
            status_tag: RiskTag::Alert,
        }
    }

    #[test]
    fn whole_percent_truncates() {
        assert_eq!(profile(20.9).chance_percent_whole(), 20);
        assert_eq!(profile(0.0).chance_percent_whole(), 0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(profile(140.0).progress_percent(), 100.0);
        assert_eq!(profile(-3.0).progress_percent(), 0.0);
        assert_eq!(profile(42.5).progress_percent(), 42.5);
    }

    #[test]
    fn disagreement_is_reported() {
        assert!(!profile(10.0).bands_agree());
    }
}
