use std::fmt;

/// Output format of a saved report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Pdf,
    Text,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Download file name for a drug's report, e.g. `ADR_Report_Folic_Acid.pdf`.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`.
pub fn report_filename(generic_name: &str, format: ReportFormat) -> String {
    let sanitized: String = generic_name
        .trim()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    if sanitized.is_empty() {
        format!("ADR_Report.{}", format.extension())
    } else {
        format!("ADR_Report_{sanitized}.{}", format.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_and_punctuation_become_underscores() {
        assert_eq!(
            report_filename("Folic Acid", ReportFormat::Pdf),
            "ADR_Report_Folic_Acid.pdf"
        );
        assert_eq!(
            report_filename("Amoxicillin/Clavulanate", ReportFormat::Text),
            "ADR_Report_Amoxicillin_Clavulanate.txt"
        );
        assert_eq!(
            report_filename("Vitamin B12 (oral)", ReportFormat::Pdf),
            "ADR_Report_Vitamin_B12__oral_.pdf"
        );
    }

    #[test]
    fn blank_name_falls_back_to_fixed_name() {
        assert_eq!(report_filename("  ", ReportFormat::Pdf), "ADR_Report.pdf");
    }
}
