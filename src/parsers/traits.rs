//! Row source trait and error types.

use crate::model::Row;
use thiserror::Error;

/// Errors that can occur while reading rows
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("CSV parse error: {0}")]
    CsvError(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Unknown table format: {0}")]
    UnknownFormat(String),

    #[error("Invalid column selector: {0}")]
    InvalidSelector(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<csv::Error> for ParseError {
    fn from(err: csv::Error) -> Self {
        match err.position() {
            Some(pos) => Self::CsvError(format!("line {}: {err}", pos.line())),
            None => Self::CsvError(err.to_string()),
        }
    }
}

/// How sure a parser is that content belongs to it, in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    pub const NONE: Self = Self(0.0);
    /// Fallback level; any parser at or above it may be used
    pub const LOW: Self = Self(0.25);
    /// Level given to a format named by the file extension
    pub const HIGH: Self = Self(0.75);

    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Whether the parser should be tried at all.
    #[must_use]
    pub fn can_parse(&self) -> bool {
        *self >= Self::LOW
    }
}

/// Outcome of one parser's sniff.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatDetection {
    pub confidence: FormatConfidence,
}

impl FormatDetection {
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            confidence: FormatConfidence::NONE,
        }
    }

    #[must_use]
    pub const fn with_confidence(confidence: FormatConfidence) -> Self {
        Self { confidence }
    }
}

/// A source format that turns decoded text into rows.
pub trait RowParser {
    /// Parse rows from decoded content
    fn parse_str(&self, content: &str) -> Result<Vec<Row>, ParseError>;

    /// Short format name for logs
    fn format_name(&self) -> &str;

    /// Sniff the content without parsing it
    fn detect(&self, content: &str) -> FormatDetection;

    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).confidence.can_parse()
    }
}
