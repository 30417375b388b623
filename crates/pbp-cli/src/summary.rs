//! Terminal tables for the `pbp` commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pbp_common::{any_to_string, i64_values};
use pbp_model::StrengthState;
use pbp_model::columns::{MEASURES, PLAYER_ID, PLAYER_NAME};
use pbp_model::strength::SUPPORTED_LABELS;
use polars::prelude::DataFrame;
use serde::Serialize;

use crate::workflow::{AggregateOutcome, EnrichOutcome};

/// One supported strength state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthRow {
    pub label: &'static str,
    pub skaters_for: i64,
    pub skaters_against: i64,
    pub situation: &'static str,
}

pub fn strength_rows() -> Vec<StrengthRow> {
    SUPPORTED_LABELS
        .iter()
        .filter_map(|&label| {
            let state = StrengthState::from_label(label).ok()?;
            Some(StrengthRow {
                label,
                skaters_for: state.skaters_for,
                skaters_against: state.skaters_against,
                situation: situation(state),
            })
        })
        .collect()
}

fn situation(state: StrengthState) -> &'static str {
    match state.skaters_for.cmp(&state.skaters_against) {
        std::cmp::Ordering::Greater => "power play",
        std::cmp::Ordering::Less => "penalty kill",
        std::cmp::Ordering::Equal => "even strength",
    }
}

pub fn strength_table(rows: &[StrengthRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Strength"),
        header_cell("Skaters for"),
        header_cell("Skaters against"),
        header_cell("Situation"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.label).add_attribute(Attribute::Bold),
            Cell::new(row.skaters_for),
            Cell::new(row.skaters_against),
            Cell::new(row.situation),
        ]);
    }
    table
}

pub fn print_enrich_summary(outcome: &EnrichOutcome) {
    println!("Output: {}", outcome.output.display());
    println!(
        "Enriched {} events with {} derived columns",
        outcome.rows, outcome.derived_columns
    );
}

/// Per-measure totals of a player-game table, in output order.
pub fn measure_totals(metrics: &DataFrame) -> Vec<(&'static str, i64)> {
    MEASURES
        .iter()
        .filter_map(|measure| {
            let values = i64_values(metrics, measure).ok()?;
            Some((*measure, values.into_iter().flatten().sum()))
        })
        .collect()
}

pub fn print_aggregate_summary(outcome: &AggregateOutcome, preview: usize) {
    println!("Output: {}", outcome.output.display());
    println!(
        "Strength {} ({} v {} recorded): {} events, {} player-game rows",
        outcome.strength,
        outcome.strength.skaters_for,
        outcome.strength.skaters_against,
        outcome.events,
        outcome.metrics.height()
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Total")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (measure, total) in measure_totals(&outcome.metrics) {
        let total_cell = if total > 0 {
            Cell::new(total).fg(Color::Green)
        } else {
            Cell::new(total).add_attribute(Attribute::Dim)
        };
        table.add_row(vec![Cell::new(measure), total_cell]);
    }
    println!("{table}");

    if preview > 0 && outcome.metrics.height() > 0 {
        println!("{}", preview_table(&outcome.metrics, preview));
    }
}

/// First `limit` rows with player identity and every measure.
pub fn preview_table(metrics: &DataFrame, limit: usize) -> Table {
    let mut names = vec![PLAYER_ID, PLAYER_NAME];
    names.extend(MEASURES);
    let columns: Vec<_> = names
        .iter()
        .filter_map(|name| metrics.column(name).ok())
        .collect();

    let mut table = Table::new();
    table.set_header(columns.iter().map(|c| header_cell(c.name().as_str())));
    apply_table_style(&mut table);
    for row in 0..metrics.height().min(limit) {
        table.add_row(columns.iter().map(|column| {
            let value = column.get(row).map(any_to_string).unwrap_or_default();
            Cell::new(value)
        }));
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
