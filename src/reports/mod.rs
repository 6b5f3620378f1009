//! Report generation for diff results.
//!
//! This module provides multiple output formats for diff results:
//! - CSV: every cell double-quoted, header first when present
//! - TSV: tab-separated cells, no quoting
//! - JSON: structured data for programmatic integration
//! - Summary: per-tag line counts

mod csv;
mod json;
mod summary;
mod types;

pub use csv::{CsvReporter, TsvReporter};
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use crate::utils::lookup_encoding;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_diff_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format.
///
/// `Auto` must be resolved against the output target first; passed here
/// unresolved it falls back to CSV.
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Tsv => Box::new(TsvReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Summary => Box::new(SummaryReporter::new()),
    }
}

/// Encode a rendered report for output.
///
/// `None` keeps UTF-8. Characters the target encoding cannot represent are
/// written as numeric character references and reported with a warning.
pub fn encode_report(content: &str, label: Option<&str>) -> Result<Vec<u8>, ReportError> {
    let Some(label) = label else {
        return Ok(content.as_bytes().to_vec());
    };
    let encoding = lookup_encoding(label)
        .ok_or_else(|| ReportError::ConfigError(format!("unknown output encoding: {label}")))?;
    let (bytes, used, unmappable) = encoding.encode(content);
    if unmappable {
        tracing::warn!(encoding = used.name(), "output contained unmappable characters");
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{differ, DiffOptions};
    use crate::model::Value;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Auto).format(), ReportFormat::Csv);
        for format in [
            ReportFormat::Csv,
            ReportFormat::Tsv,
            ReportFormat::Json,
            ReportFormat::Summary,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_diff_report() {
        let result = differ(&[Value::from("x")], &[], &DiffOptions::default()).unwrap();
        let mut buf = Vec::new();
        TsvReporter::new()
            .write_diff_report(&result, &ReportConfig::default(), &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "delete\t1\t-\tx\r\n");
    }

    #[test]
    fn test_encode_report() {
        assert_eq!(encode_report("abc", None).unwrap(), b"abc");
        assert_eq!(encode_report("あ", Some("shift_jis")).unwrap(), vec![0x82, 0xA0]);
        assert_eq!(encode_report("あ", Some("cp932")).unwrap(), vec![0x82, 0xA0]);
        assert!(matches!(
            encode_report("x", Some("bogus")),
            Err(ReportError::ConfigError(_))
        ));
    }
}
