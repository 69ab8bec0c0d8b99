// src/lib.rs
//
// magscraper: fetch and normalize magnetic-field survey tables published as
// supplementary ASCII files. The parsing engine is layout-driven: each
// supported paper contributes a hand-curated `TableLayout` to the registry,
// and the parser/normalizer pair turns the raw text into a uniform typed
// `Table` regardless of the source's formatting quirks.

pub mod error;
pub mod fetch;
pub mod layout;
pub mod normalize;
pub mod parse;
pub mod service;
pub mod sink;
pub mod sources;
pub mod table;

pub use error::{Error, Result};
pub use table::{ParsedRow, Table, Value};
