//! Row reading stage.

use crate::model::Row;
use crate::parsers::{read_rows, ReadOptions};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Rows read from one source.
#[derive(Debug, Clone)]
pub struct ParsedRows {
    /// Where the rows came from
    pub path: PathBuf,
    pub rows: Vec<Row>,
}

impl ParsedRows {
    /// Number of rows read
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a row source with context for error messages
pub fn parse_rows_with_context(
    path: &Path,
    options: &ReadOptions,
    quiet: bool,
) -> Result<ParsedRows> {
    if !quiet {
        tracing::info!("Reading rows: {}", path.display());
    }

    let rows = read_rows(path, options)
        .with_context(|| format!("Failed to read rows from {}", path.display()))?;

    if !quiet {
        tracing::info!("Read {} rows", rows.len());
    }

    Ok(ParsedRows {
        path: path.to_path_buf(),
        rows,
    })
}
