// ===== makhraj/src/report.rs =====
use crate::scorer::{AccuracyResult, ErrorKind, ErrorRecord};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One mispronunciation shaped for the analytics store: a word the
/// learner did not get right, including words never spoken at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRecord {
    pub original_word: String,
    pub spoken_word: Option<String>,
    pub error_type: ErrorKind,
    pub error_category: Option<String>,
}

/// Extracts the persistence-ready subset of an evaluation: every record
/// graded below correct, in reference order.
pub fn analytics_records(result: &AccuracyResult) -> Vec<AnalyticsRecord> {
    result
        .errors
        .iter()
        .filter(|e| e.kind != ErrorKind::Correct)
        .map(|e| AnalyticsRecord {
            original_word: e.word.clone(),
            spoken_word: e.matched_word.clone(),
            error_type: e.kind,
            error_category: e.category.clone(),
        })
        .collect()
}

pub fn build_summary_table(result: &AccuracyResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Accuracy").add_attribute(Attribute::Bold)];
    let mut counts = vec![fmt_accuracy(result.overall_accuracy)];
    for kind in ErrorKind::iter() {
        header.push(Cell::new(kind.to_string()));
        let count = result.errors.iter().filter(|e| e.kind == kind).count();
        counts.push(Cell::new(count.to_string()));
    }
    table.add_row(header);
    table.add_row(counts);

    // One accuracy column plus one per verdict.
    for i in 0..=ErrorKind::iter().count() {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn build_word_table(result: &AccuracyResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Verdict"),
        Cell::new("Recognized As"),
        Cell::new("Category"),
    ]);

    for record in &result.errors {
        table.add_row(vec![
            Cell::new(&record.word),
            fmt_verdict(record),
            Cell::new(record.matched_word.as_deref().unwrap_or("-")),
            Cell::new(record.category.as_deref().unwrap_or("")),
        ]);
    }
    table
}

/// Prints the summary and per-word tables for one evaluation.
pub fn print_evaluation_report(result: &AccuracyResult) {
    println!("\n{}", build_summary_table(result));
    println!("{}", build_word_table(result));
}

// Color coding mirrors the accuracy badge in the reading view.
fn fmt_accuracy(accuracy: f32) -> Cell {
    let text = format!("{:.1}%", accuracy);
    if accuracy >= 80.0 {
        Cell::new(text).fg(Color::Green)
    } else if accuracy >= 60.0 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text).fg(Color::Red)
    }
}

fn fmt_verdict(record: &ErrorRecord) -> Cell {
    let cell = Cell::new(record.kind.to_string());
    match record.kind {
        ErrorKind::Correct => cell.fg(Color::Green),
        ErrorKind::Minor => cell.fg(Color::Yellow),
        ErrorKind::Severe => cell.fg(Color::Red),
        ErrorKind::Missing => cell.fg(Color::Red).add_attribute(Attribute::Bold),
    }
}
