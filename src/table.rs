// src/table.rs

use serde::Serialize;

/// A single normalized cell. Coercion is total: anything that fails to
/// parse as its declared type lands here as `Missing`, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// CSV rendering: missing values become empty fields.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Missing => String::new(),
        }
    }
}

/// One logical record as extracted by the parser: raw string per column,
/// `None` where the source had nothing usable. Always exactly as many
/// entries as the layout declares columns, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub fields: Vec<Option<String>>,
}

impl ParsedRow {
    pub fn empty(width: usize) -> Self {
        ParsedRow {
            fields: vec![None; width],
        }
    }
}

/// The final typed table handed to callers. Row order matches the source;
/// every row has exactly `columns.len()` values.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Column index by name, if declared.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
