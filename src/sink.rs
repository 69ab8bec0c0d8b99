// src/sink.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::table::{Table, Value};

/// Write a normalized table as CSV: header row of column names, one record
/// per row, missing values as empty fields. The destination is overwritten.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(Value::render))?;
    }
    wtr.flush()?;

    debug!(path = %path.display(), rows = table.num_rows(), "wrote csv");
    Ok(())
}
