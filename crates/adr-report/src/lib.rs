//! ADR report generation library.
//!
//! Builds a [`ReportDocument`] from a record, a patient context, and the
//! derived profile, then writes it as:
//!
//! - **Text**: one line per report line, form feed between pages
//! - **PDF**: US Letter pages with a fixed line pitch

mod document;
mod error;
mod filename;
mod pdf;
mod render;
mod text;

pub use document::{ReportDocument, ReportLine, ReportSection, SectionKind};
pub use error::ReportError;
pub use filename::{ReportFormat, report_filename};
pub use pdf::{save_pdf, write_pdf};
pub use render::{DEFAULT_LINES_PER_PAGE, ReportOptions, labels, render};
pub use text::{PAGE_BREAK, read_fields, save_text, split_list, write_text};
