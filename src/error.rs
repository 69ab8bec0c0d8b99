// src/error.rs

use thiserror::Error;

/// Library error taxonomy. Parse-level anomalies (truncated lines,
/// unparseable numerics) are *not* errors; they degrade to missing values
/// inside the table itself.
#[derive(Debug, Error)]
pub enum Error {
    /// Lookup of a (paper, table) pair that has no registry entry.
    #[error("no layout registered for {paper}/{table}")]
    UnknownTable { paper: String, table: String },

    /// A registry entry is internally inconsistent (span/column count
    /// mismatch, overlapping or non-monotonic spans). Detected on lookup,
    /// never per-row.
    #[error("layout {paper}/{table} is inconsistent: {reason}")]
    LayoutMismatch {
        paper: String,
        table: String,
        reason: String,
    },

    /// Caller supplied an unusable parameter (e.g. an empty destination
    /// filename). Raised before any I/O happens.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Local file missing and every URL attempt failed. `attempts` lists
    /// each source tried, in order; `cause` is the last underlying failure.
    #[error("fetch failed after {} attempt(s) [{}]: {cause}", attempts.len(), attempts.join(", "))]
    Fetch { attempts: Vec<String>, cause: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
