// src/parse/delimited.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::clean_field;
use crate::layout::{Delimiter, TableLayout};
use crate::table::ParsedRow;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));
static TABS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").expect("tab-run pattern"));

/// Split each retained line on the configured delimiter. A token count that
/// does not match the declared columns never fails the parse: short lines
/// are padded with missing values and excess tokens are folded into the
/// last column. Genuinely invalid values are rejected later, by coercion.
pub(super) fn parse_lines(
    lines: &[&str],
    layout: &TableLayout,
    delimiter: Delimiter,
) -> Vec<ParsedRow> {
    let width = layout.columns.len();
    let mut rows = Vec::with_capacity(lines.len());

    for line in lines {
        let tokens = split(line, delimiter);
        if tokens.len() != width {
            trace!(
                expected = width,
                got = tokens.len(),
                "token count differs from layout"
            );
        }

        let mut fields: Vec<Option<String>> = Vec::with_capacity(width);
        for i in 0..width {
            let field = if i + 1 == width && tokens.len() > width {
                // fold the overflow into the final column
                clean_field(&tokens[i..].join(" "))
            } else {
                tokens.get(i).and_then(|t| clean_field(t))
            };
            fields.push(field);
        }
        rows.push(ParsedRow { fields });
    }
    rows
}

fn split(line: &str, delimiter: Delimiter) -> Vec<String> {
    match delimiter {
        // leading/trailing whitespace would produce empty edge tokens
        Delimiter::Whitespace => WHITESPACE
            .split(line.trim())
            .map(str::to_string)
            .collect(),
        Delimiter::Tab => line.split('\t').map(str::to_string).collect(),
        Delimiter::Tabs => TABS.split(line).map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::{col, ColumnType, DataStart, Delimiter, ParseStrategy, TableLayout};
    use crate::parse::parse;

    static COLS: &[crate::layout::Column] = &[
        col("id", ColumnType::Integer),
        col("x", ColumnType::Float),
        col("y", ColumnType::Float),
    ];

    fn layout(delimiter: Delimiter) -> TableLayout {
        TableLayout {
            source: "test",
            table: "ds",
            columns: COLS,
            strategy: ParseStrategy::DelimiterSplit { delimiter },
            data_start: DataStart::SkipRows(0),
            skip_footer_rows: 0,
            shift_right_rows: &[],
            drop_rows_missing_first: false,
        }
    }

    #[test]
    fn whitespace_split_handles_aligned_columns() {
        let rows = parse("  1   0.5   -3.2\n  2   1.0    4.4\n", &layout(Delimiter::Whitespace));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields[0].as_deref(), Some("1"));
        assert_eq!(rows[1].fields[2].as_deref(), Some("4.4"));
    }

    #[test]
    fn single_tab_split_preserves_empty_fields() {
        let rows = parse("1\t\t-3.2", &layout(Delimiter::Tab));
        assert_eq!(rows[0].fields[0].as_deref(), Some("1"));
        assert_eq!(rows[0].fields[1], None);
        assert_eq!(rows[0].fields[2].as_deref(), Some("-3.2"));
    }

    #[test]
    fn tab_runs_collapse_into_one_separator() {
        let rows = parse("1\t\t\t0.5\t-3.2", &layout(Delimiter::Tabs));
        assert_eq!(rows[0].fields[1].as_deref(), Some("0.5"));
    }

    #[test]
    fn short_lines_pad_with_missing() {
        let rows = parse("1 0.5", &layout(Delimiter::Whitespace));
        assert_eq!(rows[0].fields.len(), 3);
        assert_eq!(rows[0].fields[2], None);
    }

    #[test]
    fn excess_tokens_fold_into_last_column() {
        let rows = parse("1 0.5 a b c", &layout(Delimiter::Whitespace));
        assert_eq!(rows[0].fields.len(), 3);
        assert_eq!(rows[0].fields[2].as_deref(), Some("a b c"));
    }

    #[test]
    fn placeholder_token_becomes_missing() {
        let rows = parse("1 --- 2.0", &layout(Delimiter::Whitespace));
        assert_eq!(rows[0].fields[1], None);
    }
}
