// src/parse/continuation.rs
//
// Tab-structured tables where one logical record spans several physical
// lines. The heuristic: a line whose first field is non-empty opens a new
// record; an empty first field continues the current one. The source
// formatting is ambiguous by nature (a wrapped line can start with a
// non-empty field), and the fail-safe here is to open a new record rather
// than guess at a merge.

use tracing::trace;

use super::clean_field;
use crate::layout::TableLayout;
use crate::table::ParsedRow;

pub(super) fn parse_lines(
    lines: &[&str],
    layout: &TableLayout,
    accumulate: &[&str],
) -> Vec<ParsedRow> {
    let width = layout.columns.len();
    let mut rows: Vec<ParsedRow> = Vec::new();
    let mut current: Option<ParsedRow> = None;

    for line in lines {
        let parts: Vec<&str> = line.trim_end().split('\t').collect();

        if parts.first().map_or(false, |p| !p.trim().is_empty()) {
            // new record
            if let Some(row) = current.take() {
                rows.push(row);
            }
            let mut row = ParsedRow::empty(width);
            for (i, part) in parts.iter().take(width).enumerate() {
                row.fields[i] = clean_field(part);
            }
            current = Some(row);
        } else {
            // continuation of the current record
            let Some(row) = current.as_mut() else {
                trace!("continuation line before any record; dropped");
                continue;
            };
            if parts.len() < 2 {
                continue;
            }
            for (i, part) in parts.iter().take(width).enumerate() {
                let Some(value) = clean_field(part) else {
                    continue;
                };
                let column = layout.columns[i].name;
                match row.fields[i].as_mut() {
                    Some(existing) if accumulate.contains(&column) => {
                        existing.push_str("; ");
                        existing.push_str(&value);
                    }
                    _ => row.fields[i] = Some(value),
                }
            }
        }
    }

    // an unterminated record at end of input is still a record
    if let Some(row) = current {
        rows.push(row);
    }
    rows
}
