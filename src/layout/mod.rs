// src/layout/mod.rs

pub mod registry;

use crate::error::{Error, Result};

/// Declared type of a column, used by the normalizer for coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Float,
}

/// A named, typed column of one table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

pub const fn col(name: &'static str, ty: ColumnType) -> Column {
    Column { name, ty }
}

/// Token separator for delimiter-split tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// One or more whitespace characters (`\s+`).
    Whitespace,
    /// A single tab.
    Tab,
    /// One or more tabs (`\t+`).
    Tabs,
}

/// How raw lines map onto columns.
#[derive(Debug, Clone, Copy)]
pub enum ParseStrategy {
    /// Constant byte ranges per column, measured against the original
    /// unstripped line. Spans are end-exclusive; gaps act as separators.
    FixedWidth { spans: &'static [(usize, usize)] },
    /// Split each line on the configured delimiter.
    DelimiterSplit { delimiter: Delimiter },
    /// Tab-structured records spanning multiple physical lines: an empty
    /// first field marks a continuation of the previous record. Columns
    /// listed in `accumulate` concatenate values with "; " instead of
    /// overwriting.
    IrregularContinuation {
        accumulate: &'static [&'static str],
    },
}

/// Where the data section begins.
#[derive(Debug, Clone, Copy)]
pub enum DataStart {
    /// Skip a fixed number of header lines.
    SkipRows(usize),
    /// Data starts at the first line whose trimmed content begins with one
    /// of these prefixes. Used where the header length varies between
    /// revisions of the published file.
    AtMarker(&'static [&'static str]),
}

/// Immutable descriptor of one table of one paper. Instances live in the
/// static registry and are never mutated.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub source: &'static str,
    pub table: &'static str,
    pub columns: &'static [Column],
    pub strategy: ParseStrategy,
    pub data_start: DataStart,
    pub skip_footer_rows: usize,
    /// Row indices (post-parse, zero-based) whose values shift right by one
    /// position before coercion. Corrects known misalignments in specific
    /// published rows; identified empirically per paper.
    pub shift_right_rows: &'static [usize],
    /// Drop parsed rows whose first column is missing (some machine-readable
    /// tables interleave unnamed spill-over lines that carry no record).
    pub drop_rows_missing_first: bool,
}

impl TableLayout {
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.to_string()).collect()
    }

    /// Check internal consistency. FixedWidth layouts must declare exactly
    /// one span per column, with spans non-overlapping and non-decreasing
    /// in start offset.
    pub fn validate(&self) -> Result<()> {
        if let ParseStrategy::FixedWidth { spans } = self.strategy {
            if spans.len() != self.columns.len() {
                return Err(self.mismatch(format!(
                    "{} spans declared for {} columns",
                    spans.len(),
                    self.columns.len()
                )));
            }
            for (i, &(start, end)) in spans.iter().enumerate() {
                if start >= end {
                    return Err(self.mismatch(format!(
                        "span {} is empty or reversed ({}..{})",
                        i, start, end
                    )));
                }
                if i > 0 {
                    let (prev_start, prev_end) = spans[i - 1];
                    if start < prev_start {
                        return Err(self.mismatch(format!(
                            "span {} starts at {} before span {} at {}",
                            i,
                            start,
                            i - 1,
                            prev_start
                        )));
                    }
                    if start < prev_end {
                        return Err(self.mismatch(format!(
                            "span {} ({}..{}) overlaps span {} ending at {}",
                            i,
                            start,
                            end,
                            i - 1,
                            prev_end
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn mismatch(&self, reason: String) -> Error {
        Error::LayoutMismatch {
            paper: self.source.to_string(),
            table: self.table.to_string(),
            reason,
        }
    }
}
