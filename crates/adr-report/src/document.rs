//! Structured report document.

use std::fmt;

/// Report sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Patient,
    Drug,
    Adr,
    Risk,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// Document title, rendered bold.
    Title(String),
    /// Free text such as the generated-by line.
    Text(String),
    /// `label: value` pair.
    Field { label: &'static str, value: String },
    Blank,
}

impl ReportLine {
    pub fn field(label: &'static str, value: impl Into<String>) -> Self {
        Self::Field {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Title(text) | ReportLine::Text(text) => write!(f, "{text}"),
            ReportLine::Field { label, value } => write!(f, "{label}: {value}"),
            ReportLine::Blank => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub lines: Vec<ReportLine>,
}

/// Ordered, sectioned report lines plus the page-break threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<ReportSection>,
    lines_per_page: usize,
}

impl ReportDocument {
    /// `lines_per_page` below one is raised to one.
    pub fn new(title: impl Into<String>, sections: Vec<ReportSection>, lines_per_page: usize) -> Self {
        Self {
            title: title.into(),
            sections,
            lines_per_page: lines_per_page.max(1),
        }
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// All lines in order, across sections.
    pub fn lines(&self) -> impl Iterator<Item = &ReportLine> {
        self.sections.iter().flat_map(|section| section.lines.iter())
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| section.lines.len()).sum()
    }

    /// Lines split into pages. A page never holds more than
    /// `lines_per_page` lines; the document always has at least one page.
    pub fn pages(&self) -> Vec<Vec<&ReportLine>> {
        let lines: Vec<&ReportLine> = self.lines().collect();
        if lines.is_empty() {
            return vec![Vec::new()];
        }
        lines
            .chunks(self.lines_per_page)
            .map(<[&ReportLine]>::to_vec)
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.line_count().div_ceil(self.lines_per_page).max(1)
    }

    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Value of the first field with `label`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.lines().find_map(|line| match line {
            ReportLine::Field { label: l, value } if *l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(lines: usize, per_page: usize) -> ReportDocument {
        let lines = (0..lines)
            .map(|idx| ReportLine::Text(format!("line {idx}")))
            .collect();
        ReportDocument::new(
            "Report",
            vec![ReportSection {
                kind: SectionKind::Header,
                lines,
            }],
            per_page,
        )
    }

    #[test]
    fn pages_respect_capacity() {
        let doc = document(7, 3);
        let pages = doc.pages();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].len(), 3);
        assert_eq!(pages[2].len(), 1);
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn exact_fit_does_not_add_a_page() {
        assert_eq!(document(6, 3).pages().len(), 2);
        assert_eq!(document(6, 3).page_count(), 2);
    }

    #[test]
    fn empty_document_has_one_page() {
        let doc = document(0, 3);
        assert_eq!(doc.pages().len(), 1);
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn zero_capacity_is_raised() {
        assert_eq!(document(2, 0).lines_per_page(), 1);
    }

    #[test]
    fn field_lines_display_label_and_value() {
        assert_eq!(ReportLine::field("Route", "Oral").to_string(), "Route: Oral");
        assert_eq!(ReportLine::field("Serious ADRs", "").to_string(), "Serious ADRs: ");
        assert_eq!(ReportLine::Blank.to_string(), "");
    }
}
