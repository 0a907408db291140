//! Terminal rendering of lookups: the drug profile, statistics, and risk
//! panels of the dashboard as tables.

use adr_ingest::Dataset;
use adr_model::{DerivedProfile, DrugRecord, RiskTag};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

/// Absence state shown when a drug is not in the dataset.
pub const NOT_FOUND_MESSAGE: &str = "No data found for this drug.";

const PROGRESS_WIDTH: usize = 20;

/// Palette entry for a risk tag.
pub fn risk_color(tag: RiskTag) -> Color {
    match tag {
        RiskTag::Safe => Color::Green,
        RiskTag::Caution => Color::Yellow,
        RiskTag::Alert => Color::Red,
    }
}

/// Text progress bar, e.g. `████░░░░░░ 40%`. `fill` is expected in
/// `0..=100`; `label` is printed as given.
pub fn progress_bar(fill: f64, label: i64, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "{}{} {label}%",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

/// Generic names with class and route, in selection-list order.
pub fn identifiers_table(dataset: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Generic Name"),
        header_cell("Therapeutic Class"),
        header_cell("Route"),
    ]);
    apply_table_style(&mut table);
    for name in dataset.sorted_identifiers() {
        let Some(record) = dataset.get(name) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(record.therapeutic_class_or_placeholder()),
            Cell::new(record.route_or_placeholder()),
        ]);
    }
    table
}

/// Drug profile, statistics, and ADR prediction panels in one table.
pub fn profile_table(record: &DrugRecord, profile: &DerivedProfile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);

    let rows: [(&str, Cell); 7] = [
        ("Generic Name", Cell::new(&record.generic_name).add_attribute(Attribute::Bold)),
        ("Therapeutic Class", Cell::new(record.therapeutic_class_or_placeholder())),
        ("Route", Cell::new(record.route_or_placeholder())),
        ("Usual Dose", Cell::new(record.usual_adult_dose_or_placeholder())),
        ("Age Group", Cell::new(profile.patient.age_group.label())),
        ("Gender", Cell::new(profile.patient.gender.as_str())),
        ("Total ADRs", Cell::new(profile.total_adrs)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), value]);
    }

    table.add_row(vec![
        Cell::new("Common ADRs"),
        list_cell(&profile.common_adrs, profile.common_count, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Serious ADRs"),
        list_cell(&profile.serious_adrs, profile.serious_count, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("ADR Categories"),
        Cell::new(record.adr_label_or_placeholder()),
    ]);
    table.add_row(vec![
        Cell::new("Chance of Serious ADR"),
        Cell::new(progress_bar(
            profile.progress_percent(),
            profile.chance_percent_whole(),
            PROGRESS_WIDTH,
        ))
        .fg(risk_color(profile.risk_tag)),
    ]);
    table.add_row(vec![
        Cell::new("ADR Risk Status"),
        Cell::new(&profile.status)
            .fg(risk_color(profile.status_tag))
            .add_attribute(Attribute::Bold),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Left);
    }
    table
}

/// JSON payload for `lookup --json`.
#[derive(Debug, Serialize)]
pub struct LookupView<'a> {
    pub record: &'a DrugRecord,
    pub profile: &'a DerivedProfile,
}

pub fn lookup_json(record: &DrugRecord, profile: &DerivedProfile) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LookupView { record, profile })
}

fn list_cell(entries: &[String], count: usize, color: Color) -> Cell {
    if entries.is_empty() {
        return dim_cell("(none)");
    }
    Cell::new(format!("{} ({count})", entries.join(", "))).fg(color)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(50.0, 50, 10), "█████░░░░░ 50%");
        assert_eq!(progress_bar(0.0, 0, 4), "░░░░ 0%");
    }

    #[test]
    fn tags_map_to_distinct_colors() {
        assert_eq!(risk_color(RiskTag::Safe), Color::Green);
        assert_eq!(risk_color(RiskTag::Caution), Color::Yellow);
        assert_eq!(risk_color(RiskTag::Alert), Color::Red);
    }
}
