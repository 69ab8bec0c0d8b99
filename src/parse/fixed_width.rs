// src/parse/fixed_width.rs

use super::clean_field;
use crate::layout::TableLayout;
use crate::table::ParsedRow;

/// Slice each declared byte span out of the original, unstripped line.
/// Spans are end-exclusive and measured in bytes; a line that ends before
/// a span's end yields a missing value for that column (a partial slice
/// would coerce to a fabricated number), and content past the last span is
/// ignored.
pub(super) fn parse_lines(
    lines: &[&str],
    layout: &TableLayout,
    spans: &[(usize, usize)],
) -> Vec<ParsedRow> {
    let mut rows = Vec::with_capacity(lines.len());
    for line in lines {
        let bytes = line.as_bytes();
        let fields: Vec<Option<String>> = spans
            .iter()
            .map(|&(start, end)| slice_span(bytes, start, end).and_then(|s| clean_field(&s)))
            .collect();
        debug_assert_eq!(fields.len(), layout.columns.len());
        rows.push(ParsedRow { fields });
    }
    rows
}

fn slice_span(bytes: &[u8], start: usize, end: usize) -> Option<String> {
    if start >= bytes.len() || end > bytes.len() {
        return None;
    }
    // published tables are ASCII; lossy conversion guards the odd stray byte
    Some(String::from_utf8_lossy(&bytes[start..end]).into_owned())
}
