//! Risk bands and their presentation tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered risk classification shared by the numeric and textual fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    #[default]
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub const ALL: [RiskBand; 3] = [RiskBand::Low, RiskBand::Moderate, RiskBand::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Moderate => "Moderate",
            RiskBand::High => "High",
        }
    }

    /// Presentation tag for this band. Themes map tags to palette values.
    pub fn tag(&self) -> RiskTag {
        match self {
            RiskBand::Low => RiskTag::Safe,
            RiskBand::Moderate => RiskTag::Caution,
            RiskBand::High => RiskTag::Alert,
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symbolic presentation tag attached to a [`RiskBand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTag {
    Safe,
    Caution,
    Alert,
}

impl RiskTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTag::Safe => "safe",
            RiskTag::Caution => "caution",
            RiskTag::Alert => "alert",
        }
    }
}

impl fmt::Display for RiskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
