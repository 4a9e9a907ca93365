//! Reader configuration.

use rowmat_common::{Result, error::Error};
use serde::{Deserialize, Serialize};

/// How a [`RowReader`](crate::row_reader::RowReader) materializes top-level rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Materialization {
    /// Every read allocates a new, independently owned row.
    #[default]
    Fresh,
    /// Every read overwrites the fields of one long-lived row buffer. The row
    /// handed out by a read is only valid until the next read.
    Reuse,
}

/// Options for binding a [`RowReader`](crate::row_reader::RowReader).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderOptions {
    pub materialization: Materialization,
}

impl ReaderOptions {
    pub fn new() -> ReaderOptions {
        ReaderOptions::default()
    }

    /// Sets the materialization strategy.
    pub fn materialization(mut self, materialization: Materialization) -> Self {
        self.materialization = materialization;
        self
    }

    /// Parses options from a JSON object, e.g. `{"materialization": "reuse"}`.
    /// Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<ReaderOptions> {
        serde_json::from_str(json).map_err(|e| Error::config("reader options", e))
    }
}
