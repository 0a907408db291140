//! Column headers of the reference dataset file.

pub const GENERIC_NAME: &str = "Generic Name";
pub const THERAPEUTIC_CLASS: &str = "Therapeutic Class";
pub const ROUTE: &str = "Route";
pub const USUAL_ADULT_DOSE: &str = "Usual Adult Dose";
pub const COMMON_ADRS: &str = "Common ADRs";
pub const SERIOUS_ADRS: &str = "Serious ADRs";
pub const ADR_LABEL: &str = "ADR Label";
pub const TOTAL_ADRS: &str = "Total ADRs";
pub const CHANCE_OF_SERIOUS_ADR: &str = "Chance of Serious ADR (%)";
pub const ADR_RISK_STATUS: &str = "ADR Risk Status";

/// Every column in dataset order.
pub const ALL: [&str; 10] = [
    GENERIC_NAME,
    THERAPEUTIC_CLASS,
    ROUTE,
    USUAL_ADULT_DOSE,
    COMMON_ADRS,
    SERIOUS_ADRS,
    ADR_LABEL,
    TOTAL_ADRS,
    CHANCE_OF_SERIOUS_ADR,
    ADR_RISK_STATUS,
];
