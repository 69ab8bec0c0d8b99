// src/parse/mod.rs
//
// Raw text -> ParsedRow sequence, per the layout's strategy. Parsing is
// total: a truncated, misaligned, or otherwise malformed line degrades to
// missing values in the affected columns rather than failing the run. The
// published tables are known to contain exactly these irregularities, and a
// hard error would make them unusable end to end.

mod continuation;
mod delimited;
mod fixed_width;

use tracing::debug;

use crate::layout::{DataStart, ParseStrategy, TableLayout};
use crate::table::ParsedRow;

/// Placeholder used by several of the published tables for absent fields.
pub const MISSING_TOKEN: &str = "---";

/// Normalize one raw field: trim, and map empty or placeholder tokens to
/// `None`.
pub(crate) fn clean_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_TOKEN {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse raw text into rows. Every returned row has exactly
/// `layout.columns.len()` fields, in declared order.
#[tracing::instrument(level = "debug", skip(raw), fields(source = layout.source, table = layout.table))]
pub fn parse(raw: &str, layout: &TableLayout) -> Vec<ParsedRow> {
    let lines: Vec<&str> = raw.lines().collect();
    let retained = retained_lines(&lines, layout);

    let mut rows = match layout.strategy {
        ParseStrategy::FixedWidth { spans } => fixed_width::parse_lines(&retained, layout, spans),
        ParseStrategy::DelimiterSplit { delimiter } => {
            delimited::parse_lines(&retained, layout, delimiter)
        }
        ParseStrategy::IrregularContinuation { accumulate } => {
            continuation::parse_lines(&retained, layout, accumulate)
        }
    };

    if layout.drop_rows_missing_first {
        rows.retain(|row| row.fields.first().map_or(false, Option::is_some));
    }

    debug!(
        lines = lines.len(),
        retained = retained.len(),
        rows = rows.len(),
        "parsed"
    );
    rows
}

/// Apply header/footer skipping and drop blank lines. Header skipping is
/// either a fixed line count or a scan for the first data marker.
fn retained_lines<'a>(lines: &[&'a str], layout: &TableLayout) -> Vec<&'a str> {
    let start = match layout.data_start {
        DataStart::SkipRows(n) => n.min(lines.len()),
        DataStart::AtMarker(markers) => lines
            .iter()
            .position(|line| {
                let t = line.trim_start();
                markers.iter().any(|m| t.starts_with(m))
            })
            .unwrap_or(lines.len()),
    };
    let end = lines.len().saturating_sub(layout.skip_footer_rows).max(start);

    lines[start..end]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .copied()
        .collect()
}
