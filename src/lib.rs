//! **Row and table diffing with fuzzy replace pairing.**
//!
//! `rowdiff` compares two sequences of rows and reports, for every row, whether it is
//! equal, replaced, deleted or inserted. Rows may be plain values (one line of text)
//! or tuples of fields (one record of a table). Rows that occur on both sides are
//! matched by content regardless of position, and a deleted row that closely
//! resembles an inserted one is reported as a single `replace` showing the changed
//! fields as `"old ---> new"`.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`Value`] cell type, row shapes and the [`RowKey`] fingerprint
//!   used to group identical rows.
//! - **[`diff`]**: the [`DiffEngine`] and the one-shot [`differ`] function producing a
//!   [`DiffResult`] of tagged [`DiffRecord`]s.
//! - **[`matching`]**: edit-distance [`similarity`] and the engine's LRU cache.
//! - **[`parsers`]**: reads CSV, TSV and text files into rows.
//! - **[`reports`]**: renders results as CSV, TSV, JSON or a per-tag summary.
//! - **[`config`]**, **[`pipeline`]**, **[`cli`]**: the command-line tool.
//!
//! ## Diffing Two Row Sequences
//!
//! ```
//! use rowdiff::{differ, DiffOptions, DiffTag, Value};
//!
//! let before = vec![Value::list(["1", "apple", "red"]), Value::list(["2", "pear", "green"])];
//! let after = vec![Value::list(["1", "apple", "red"]), Value::list(["2", "peach", "green"])];
//!
//! let result = differ(&before, &after, &DiffOptions::default()).unwrap();
//! assert_eq!(result.len(), 1);
//!
//! let record = &result.records[0];
//! assert_eq!(record.tag, DiffTag::Replace);
//! assert_eq!(record.fields[1], Value::from("pear ---> peach"));
//! assert_eq!(result.summary.equal, 1);
//! ```
//!
//! ## Diffing Two Files
//!
//! ```no_run
//! use rowdiff::parsers::{read_rows, ReadOptions};
//! use rowdiff::DiffEngine;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let left = read_rows(Path::new("before.csv"), &ReadOptions::default())?;
//!     let right = read_rows(Path::new("after.csv"), &ReadOptions::default())?;
//!
//!     let mut engine = DiffEngine::new();
//!     let result = engine.diff(&left, &right)?;
//!     for row in result.rows("-") {
//!         println!("{}", row.join("\t"));
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset, DiffConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{
    differ, sanitize, DiffEngine, DiffOptions, DiffRecord, DiffResult, DiffSummary, DiffTag,
    ReplaceFormat,
};
pub use error::{DiffError, ErrorContext, Result, RowDiffError};
pub use matching::{similarity, CacheStats, SimilarityCache};
pub use model::{flatten, Row, RowKey, Value};
pub use parsers::{read_rows, ReadOptions, RowParser, TableFormat};
pub use reports::{ReportFormat, ReportGenerator};
