//! Row sources.
//!
//! Files are decoded with `encoding_rs`, their format is taken from the
//! extension or sniffed from the content, and the matching [`RowParser`]
//! turns the text into rows:
//!
//! - CSV / TSV (and `;` or `|` separated tables): tuple rows of text fields
//! - plain text: one scalar text row per line
//!
//! ## Usage
//!
//! ```no_run
//! use rowdiff::parsers::{read_rows, ReadOptions};
//! use std::path::Path;
//!
//! let rows = read_rows(Path::new("before.csv"), &ReadOptions::default()).unwrap();
//! println!("{} rows", rows.len());
//! ```

mod delimited;
mod detection;
mod text;
mod traits;

pub use delimited::DelimitedParser;
pub use detection::{DetectionResult, FormatDetector, TableFormat, MIN_CONFIDENCE_THRESHOLD};
pub use text::TextParser;
pub use traits::{FormatConfidence, FormatDetection, ParseError, RowParser};

use crate::model::{ColumnSelector, Row};
use crate::utils::lookup_encoding;
use encoding_rs::Encoding;
use std::path::Path;

/// Options for reading one row source.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Format override; detected when `None`
    pub format: Option<TableFormat>,
    /// Input encoding label (e.g. `utf-8`, `shift_jis`); UTF-8 when `None`
    pub encoding: Option<String>,
    /// Column projection applied to tuple rows
    pub columns: Option<ColumnSelector>,
}

/// Decode raw bytes using an encoding label.
///
/// A byte order mark overrides the label. Malformed sequences are replaced
/// and reported with a warning.
pub fn decode(bytes: &[u8], label: Option<&str>) -> Result<String, ParseError> {
    let encoding = resolve_encoding(label)?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = used.name(), "input contained malformed sequences");
    }
    Ok(text.into_owned())
}

/// Look up an encoding by label, defaulting to UTF-8.
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding, ParseError> {
    match label {
        None => Ok(encoding_rs::UTF_8),
        Some(label) => {
            lookup_encoding(label).ok_or_else(|| ParseError::UnknownEncoding(label.to_string()))
        }
    }
}

/// Parse rows from decoded content in a known format.
pub fn parse_rows_str(content: &str, format: TableFormat) -> Result<Vec<Row>, ParseError> {
    format.parser().parse_str(content)
}

/// Read and parse a row source from disk.
pub fn read_rows(path: &Path, options: &ReadOptions) -> Result<Vec<Row>, ParseError> {
    let bytes = std::fs::read(path)?;
    let content = decode(&bytes, options.encoding.as_deref())?;

    let parser = match options.format {
        Some(format) => format.parser(),
        None => {
            let detected = FormatDetector::new().detect(path, &content);
            tracing::debug!(
                path = %path.display(),
                format = %detected.format,
                confidence = detected.confidence.value(),
                "detected table format"
            );
            detected.parser()
        }
    };

    let rows = parser.parse_str(&content)?;
    tracing::debug!(format = parser.format_name(), rows = rows.len(), "parsed rows");
    match &options.columns {
        Some(selector) => selector.apply(rows),
        None => Ok(rows),
    }
}
