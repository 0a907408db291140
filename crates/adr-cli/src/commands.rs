use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use adr_core::LookupService;
use adr_ingest::load_default_dataset;
use adr_report::{ReportFormat, ReportOptions, render, report_filename, save_pdf, save_text};
use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use adr_cli::logging::redact_value;
use adr_cli::view::{NOT_FOUND_MESSAGE, identifiers_table, lookup_json, profile_table};

use crate::cli::{LookupArgs, ReportArgs, ReportFormatArg};

/// How a lookup-driven command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    NotFound,
}

/// Load the reference dataset once. Failure is fatal for every command.
pub fn load_service() -> Result<LookupService> {
    let dataset = load_default_dataset().context("load reference dataset")?;
    for row in dataset.rejected_rows() {
        warn!(line = row.line, reason = %row.reason, "dataset row rejected");
    }
    Ok(LookupService::new(Arc::new(dataset)))
}

pub fn run_drugs(service: &LookupService) -> Result<()> {
    let dataset = service.dataset();
    println!("{}", identifiers_table(dataset));
    let rejected = dataset.rejected_rows();
    if !rejected.is_empty() {
        eprintln!("Rejected rows in {}:", dataset.source().display());
        for row in rejected {
            eprintln!("- line {}: {}", row.line, row.reason);
        }
    }
    Ok(())
}

pub fn run_lookup(service: &LookupService, args: &LookupArgs) -> Result<Outcome> {
    let patient = args.patient.context();
    let span = info_span!(
        "lookup",
        drug = %args.drug,
        age_group = redact_value(patient.age_group.label()),
        gender = redact_value(patient.gender.as_str())
    );
    let _guard = span.enter();

    let lookup = match service.lookup(&args.drug, &patient) {
        Ok(lookup) => lookup,
        Err(not_found) => {
            info!(%not_found, "lookup missed");
            eprintln!("{NOT_FOUND_MESSAGE}");
            return Ok(Outcome::NotFound);
        }
    };
    info!(
        risk_band = %lookup.profile.risk_band,
        status_band = %lookup.profile.status_band,
        "lookup served"
    );

    if args.json {
        let json = lookup_json(lookup.record, &lookup.profile).context("serialize lookup")?;
        println!("{json}");
    } else {
        println!("{}", profile_table(lookup.record, &lookup.profile));
    }
    Ok(Outcome::Done)
}

pub fn run_report(service: &LookupService, args: &ReportArgs) -> Result<Outcome> {
    let patient = args.patient.context();
    let span = info_span!(
        "report",
        drug = %args.drug,
        age_group = redact_value(patient.age_group.label()),
        gender = redact_value(patient.gender.as_str())
    );
    let _guard = span.enter();
    let start = Instant::now();

    let lookup = match service.lookup(&args.drug, &patient) {
        Ok(lookup) => lookup,
        Err(not_found) => {
            info!(%not_found, "report skipped");
            eprintln!("{NOT_FOUND_MESSAGE}");
            return Ok(Outcome::NotFound);
        }
    };

    let options = ReportOptions::default()
        .with_generated_on(chrono::Local::now().date_naive())
        .with_lines_per_page(args.lines_per_page);
    let document = render(lookup.record, &patient, &lookup.profile, &options);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    for format in report_formats(args.format) {
        let path = output_dir.join(report_filename(&lookup.record.generic_name, format));
        match format {
            ReportFormat::Pdf => save_pdf(&document, &path),
            ReportFormat::Text => save_text(&document, &path),
        }
        .with_context(|| format!("write report: {}", path.display()))?;
        println!("Report: {}", path.display());
    }
    info!(
        pages = document.page_count(),
        duration_ms = start.elapsed().as_millis(),
        "report written"
    );
    Ok(Outcome::Done)
}

fn report_formats(format: ReportFormatArg) -> Vec<ReportFormat> {
    match format {
        ReportFormatArg::Pdf => vec![ReportFormat::Pdf],
        ReportFormatArg::Text => vec![ReportFormat::Text],
        ReportFormatArg::Both => vec![ReportFormat::Pdf, ReportFormat::Text],
    }
}
