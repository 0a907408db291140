//! PDF report output via `printpdf`.

use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use tracing::debug;

use crate::document::{ReportDocument, ReportLine};
use crate::error::ReportError;

// US Letter.
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;

/// Text origin: 40pt from the left edge, 700pt from the bottom.
const LEFT_MM: f32 = 14.11;
const TOP_MM: f32 = 246.94;

const TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;

/// Leading of 1.2 × font size, in millimetres.
const TITLE_PITCH_MM: f32 = 5.93;
const BODY_PITCH_MM: f32 = 5.08;

const LAYER: &str = "Layer 1";

/// Render the document to PDF bytes, one PDF page per document page.
pub fn write_pdf(doc: &ReportDocument) -> Result<Vec<u8>, ReportError> {
    let (pdf, first_page, first_layer) = PdfDocument::new(
        doc.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER,
    );
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    for (idx, page) in doc.pages().into_iter().enumerate() {
        let (page_index, layer_index) = if idx == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER)
        };
        let layer = pdf.get_page(page_index).get_layer(layer_index);

        let mut y = TOP_MM;
        for line in page {
            let (font, size, pitch) = line_style(line, &regular, &bold);
            if !matches!(line, ReportLine::Blank) {
                layer.use_text(line.to_string(), size, Mm(LEFT_MM), Mm(y), font);
            }
            y -= pitch;
        }
    }

    let mut buf = BufWriter::new(Vec::new());
    pdf.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

pub fn save_pdf(doc: &ReportDocument, path: &Path) -> Result<(), ReportError> {
    let bytes = write_pdf(doc)?;
    std::fs::write(path, bytes).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), pages = doc.page_count(), "pdf report written");
    Ok(())
}

fn line_style<'a>(
    line: &ReportLine,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
) -> (&'a IndirectFontRef, f32, f32) {
    match line {
        ReportLine::Title(_) => (bold, TITLE_SIZE, TITLE_PITCH_MM),
        _ => (regular, BODY_SIZE, BODY_PITCH_MM),
    }
}
