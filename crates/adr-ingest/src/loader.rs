//! CSV parsing of the reference dataset.

use std::path::Path;
use std::time::Instant;

use adr_model::{DrugRecord, columns};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::dataset::{Dataset, RejectedRow};
use crate::error::DatasetLoadError;
use crate::paths::default_dataset_path;

/// Load the dataset from the compiled-in (or env-overridden) location.
pub fn load_default_dataset() -> Result<Dataset, DatasetLoadError> {
    load_dataset(&default_dataset_path())
}

/// Load and parse the reference dataset at `path`.
///
/// # Errors
///
/// Fails when the file is missing, unreadable, not valid CSV, lacks the
/// `Generic Name` column, or yields no records.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetLoadError> {
    let start = Instant::now();
    let bytes = std::fs::read(path).map_err(|e| DatasetLoadError::io(path, e))?;
    let dataset = parse_dataset(&bytes, path)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        identifiers = dataset.sorted_identifiers().len(),
        rejected = dataset.rejected_rows().len(),
        duration_ms = start.elapsed().as_millis(),
        "reference dataset loaded"
    );
    Ok(dataset)
}

/// Parse dataset CSV bytes. `source` is only used for reporting.
pub fn parse_dataset(bytes: &[u8], source: &Path) -> Result<Dataset, DatasetLoadError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DatasetLoadError::Empty {
            path: source.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatasetLoadError::csv(source, &e))?
        .iter()
        .map(normalize_header)
        .collect();

    if !headers.iter().any(|h| h == columns::GENERIC_NAME) {
        return Err(DatasetLoadError::MissingColumn {
            path: source.to_path_buf(),
            column: columns::GENERIC_NAME.to_string(),
        });
    }
    for column in columns::ALL {
        if !headers.iter().any(|h| h == column) {
            warn!(column, path = %source.display(), "dataset column missing, values default");
        }
    }

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| DatasetLoadError::csv(source, &e))?;
        let line = row
            .position()
            .map_or(idx as u64 + 2, csv::Position::line);
        match parse_record(&headers, &row, line) {
            Some(record) => records.push(record),
            None => {
                warn!(line, "rejected dataset row without generic name");
                rejected.push(RejectedRow {
                    line,
                    reason: format!("missing {}", columns::GENERIC_NAME),
                });
            }
        }
    }

    if records.is_empty() {
        return Err(DatasetLoadError::Empty {
            path: source.to_path_buf(),
        });
    }
    Ok(Dataset::from_records(source, records, rejected))
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

fn parse_record(headers: &[String], row: &StringRecord, line: u64) -> Option<DrugRecord> {
    let get = |name: &str| -> Option<String> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    // The key is kept verbatim; lookups compare it exactly.
    let generic_name = headers
        .iter()
        .position(|h| h == columns::GENERIC_NAME)
        .and_then(|i| row.get(i))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)?;
    let total_adrs = get(columns::TOTAL_ADRS).and_then(|raw| parse_count(&raw, line));
    let chance = get(columns::CHANCE_OF_SERIOUS_ADR).and_then(|raw| parse_percent(&raw, line));

    Some(DrugRecord {
        generic_name,
        therapeutic_class: get(columns::THERAPEUTIC_CLASS),
        route: get(columns::ROUTE),
        usual_adult_dose: get(columns::USUAL_ADULT_DOSE),
        common_adrs: get(columns::COMMON_ADRS),
        serious_adrs: get(columns::SERIOUS_ADRS),
        adr_label: get(columns::ADR_LABEL),
        total_adrs,
        chance_of_serious_adr_percent: chance,
        adr_risk_status: get(columns::ADR_RISK_STATUS),
    })
}

/// Whole counts may be written as floats (`5.0`) by spreadsheet exports.
fn parse_count(raw: &str, line: u64) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => {
            debug!(line, value = raw, column = columns::TOTAL_ADRS, "unparsable count, defaulting");
            None
        }
    }
}

/// Keeps `NaN` as parsed; the derivation treats it as zero.
fn parse_percent(raw: &str, line: u64) -> Option<f64> {
    let trimmed = raw.trim_end_matches('%').trim();
    match trimmed.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(
                line,
                value = raw,
                column = columns::CHANCE_OF_SERIOUS_ADR,
                "unparsable percentage, defaulting"
            );
            None
        }
    }
}
