// src/normalize/mod.rs
//
// ParsedRow sequence -> typed Table. Coercion is total: a value that fails
// to parse as its declared type becomes Value::Missing. Row order is
// preserved; nothing is sorted or deduplicated.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::layout::{ColumnType, TableLayout};
use crate::table::{ParsedRow, Table, Value};

/// Matches the "x 10^" exponent spelling used by some published tables,
/// e.g. "3.2 x 10^4".
static SCI_NOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[xX]\s*10\^").expect("scientific-notation pattern"));

/// Normalize parsed rows against the layout: apply the layout's column-shift
/// corrections, then coerce each value to its declared type.
pub fn normalize(rows: Vec<ParsedRow>, layout: &TableLayout) -> Table {
    let mut shifted = 0usize;
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(idx, mut row)| {
            if layout.shift_right_rows.contains(&idx) {
                shift_right(&mut row);
                shifted += 1;
            }
            coerce_row(&row, layout)
        })
        .collect::<Vec<_>>();

    if shifted > 0 {
        debug!(shifted, "applied column-shift corrections");
    }
    Table {
        columns: layout.column_names(),
        rows,
    }
}

/// Shift every value one column to the right: the first column becomes
/// missing and the last value falls off. Mirrors how the affected rows are
/// misaligned in the published files, which carry one field too few.
fn shift_right(row: &mut ParsedRow) {
    row.fields.pop();
    row.fields.insert(0, None);
}

fn coerce_row(row: &ParsedRow, layout: &TableLayout) -> Vec<Value> {
    layout
        .columns
        .iter()
        .zip(&row.fields)
        .map(|(column, field)| match field {
            Some(raw) => coerce(raw, column.ty),
            None => Value::Missing,
        })
        .collect()
}

/// Coerce one raw field to its declared type. Never fails; anything
/// unparseable is missing.
pub fn coerce(raw: &str, ty: ColumnType) -> Value {
    let raw = raw.trim();
    if raw.is_empty() {
        return Value::Missing;
    }
    match ty {
        ColumnType::Text => Value::Text(raw.to_string()),
        ColumnType::Integer => raw.parse::<i64>().map_or(Value::Missing, Value::Int),
        ColumnType::Float => {
            let rewritten = rewrite_exponent(raw);
            rewritten.parse::<f64>().map_or(Value::Missing, Value::Float)
        }
    }
}

/// Rewrite "3.2 x 10^4" to "3.2e4" so standard float parsing accepts it.
fn rewrite_exponent(raw: &str) -> String {
    SCI_NOTATION.replace_all(raw, "e").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{col, ColumnType, DataStart, Delimiter, ParseStrategy, TableLayout};

    static FOUR_TEXT: &[crate::layout::Column] = &[
        col("c1", ColumnType::Text),
        col("c2", ColumnType::Text),
        col("c3", ColumnType::Text),
        col("c4", ColumnType::Text),
    ];

    fn layout(columns: &'static [crate::layout::Column], shift: &'static [usize]) -> TableLayout {
        TableLayout {
            source: "test",
            table: "n",
            columns,
            strategy: ParseStrategy::DelimiterSplit {
                delimiter: Delimiter::Tab,
            },
            data_start: DataStart::SkipRows(0),
            skip_footer_rows: 0,
            shift_right_rows: shift,
            drop_rows_missing_first: false,
        }
    }

    fn row(values: &[&str]) -> ParsedRow {
        ParsedRow {
            fields: values.iter().map(|v| Some(v.to_string())).collect(),
        }
    }

    #[test]
    fn shift_correction_moves_values_right_and_drops_the_last() {
        let rows = vec![
            row(&["A0", "B0", "C0", "D0"]),
            row(&["A1", "B1", "C1", "D1"]),
            row(&["A", "B", "C", "D"]),
        ];
        let table = normalize(rows, &layout(FOUR_TEXT, &[2]));
        assert_eq!(table.rows[1][0], Value::Text("A1".into()));
        assert_eq!(
            table.rows[2],
            vec![
                Value::Missing,
                Value::Text("A".into()),
                Value::Text("B".into()),
                Value::Text("C".into()),
            ]
        );
    }

    #[test]
    fn numeric_coercion_is_total() {
        static COLS: &[crate::layout::Column] = &[
            col("i", ColumnType::Integer),
            col("f", ColumnType::Float),
            col("bad", ColumnType::Float),
            col("gap", ColumnType::Integer),
        ];
        let mut r = row(&["42", "-1.5", "not a number", ""]);
        r.fields[3] = None;
        let table = normalize(vec![r], &layout(COLS, &[]));
        assert_eq!(table.rows[0][0], Value::Int(42));
        assert_eq!(table.rows[0][1], Value::Float(-1.5));
        assert_eq!(table.rows[0][2], Value::Missing);
        assert_eq!(table.rows[0][3], Value::Missing);
    }

    #[test]
    fn nonstandard_scientific_notation_is_rewritten() {
        assert_eq!(coerce("3.2 x 10^4", ColumnType::Float), Value::Float(32000.0));
        assert_eq!(coerce("1.0x10^-3", ColumnType::Float), Value::Float(0.001));
        assert_eq!(coerce("5 X 10^2", ColumnType::Float), Value::Float(500.0));
        // already-standard forms pass through
        assert_eq!(coerce("2.5e3", ColumnType::Float), Value::Float(2500.0));
    }

    #[test]
    fn column_count_matches_layout_for_every_row() {
        let rows = vec![row(&["a", "b", "c", "d"]), row(&["a", "b", "c", "d"])];
        let l = layout(FOUR_TEXT, &[0, 1]);
        let table = normalize(rows, &l);
        assert!(table.rows.iter().all(|r| r.len() == l.columns.len()));
        assert_eq!(table.columns.len(), 4);
    }

    #[test]
    fn float_column_accepts_integer_tokens() {
        static COLS: &[crate::layout::Column] = &[col("f", ColumnType::Float)];
        let table = normalize(vec![row(&["7"])], &layout(COLS, &[]));
        assert_eq!(table.rows[0][0], Value::Float(7.0));
    }
}
