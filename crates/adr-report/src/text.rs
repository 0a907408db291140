//! Plain-text report output.

use std::fmt::Write as _;
use std::path::Path;

use adr_model::MISSING_PLACEHOLDER;
use tracing::debug;

use crate::document::ReportDocument;
use crate::error::ReportError;

/// Separates pages in text output.
pub const PAGE_BREAK: char = '\u{000C}';

/// Render the document as text, one report line per line.
pub fn write_text(doc: &ReportDocument) -> String {
    let mut out = String::new();
    for (idx, page) in doc.pages().into_iter().enumerate() {
        if idx > 0 {
            out.push(PAGE_BREAK);
            out.push('\n');
        }
        for line in page {
            let _ = writeln!(out, "{line}");
        }
    }
    out
}

pub fn save_text(doc: &ReportDocument, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, write_text(doc)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), pages = doc.page_count(), "text report written");
    Ok(())
}

/// Read `label: value` pairs back from text output, in order.
pub fn read_fields(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(|line| line.trim_start_matches(PAGE_BREAK))
        .filter_map(|line| {
            line.split_once(": ")
                .or_else(|| line.strip_suffix(':').map(|label| (label, "")))
        })
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}

/// Split a joined list value. Empty values and the placeholder yield no
/// entries.
pub fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() || value == MISSING_PLACEHOLDER {
        return Vec::new();
    }
    value.split(", ").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_fields_handles_empty_values() {
        let fields = read_fields("Title\nCommon ADRs: Nausea, Rash\nSerious ADRs: \nRoute:\n");
        assert_eq!(
            fields,
            vec![
                ("Common ADRs".to_string(), "Nausea, Rash".to_string()),
                ("Serious ADRs".to_string(), String::new()),
                ("Route".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn split_list_ignores_placeholder() {
        assert_eq!(
            split_list("Nausea, Rash"),
            vec!["Nausea".to_string(), "Rash".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list("N/A").is_empty());
    }
}
