//! Table format detection.
//!
//! The file extension decides when it is known; otherwise the content is
//! sniffed for the delimiter that splits the leading lines most
//! consistently. Content no delimiter explains is read as plain text.

use super::delimited::{delimiter_consistency, DelimitedParser};
use super::text::TextParser;
use super::traits::{FormatConfidence, RowParser};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Minimum confidence for accepting a sniffed delimiter.
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.75;

/// Delimiters tried when sniffing, in preference order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Supported input table formats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// One row per line
    Text,
}

impl TableFormat {
    /// Format implied by a file extension, if any.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "tsv" | "tab" => Some(Self::Tsv),
            "txt" | "text" | "log" | "md" => Some(Self::Text),
            _ => None,
        }
    }

    /// Parser for this format.
    pub fn parser(self) -> Box<dyn RowParser> {
        match self {
            Self::Csv => Box::new(DelimitedParser::csv()),
            Self::Tsv => Box::new(DelimitedParser::tsv()),
            Self::Text => Box::new(TextParser),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Result of format detection.
#[derive(Debug, Clone, Copy)]
pub struct DetectionResult {
    pub format: TableFormat,
    /// Delimiter for delimited formats
    pub delimiter: Option<u8>,
    pub confidence: FormatConfidence,
}

impl DetectionResult {
    fn of_format(format: TableFormat, confidence: FormatConfidence) -> Self {
        let delimiter = match format {
            TableFormat::Csv => Some(b','),
            TableFormat::Tsv => Some(b'\t'),
            TableFormat::Text => None,
        };
        Self {
            format,
            delimiter,
            confidence,
        }
    }

    /// Parser matching the detected format and delimiter.
    pub fn parser(&self) -> Box<dyn RowParser> {
        match self.delimiter {
            Some(d) => Box::new(DelimitedParser::new(d)),
            None => Box::new(TextParser),
        }
    }
}

/// Detects the format of a row source.
#[derive(Debug, Clone, Copy)]
pub struct FormatDetector {
    min_confidence: f32,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    /// Create a new format detector with default settings.
    pub const fn new() -> Self {
        Self {
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
        }
    }

    /// Create a format detector with a custom confidence threshold.
    pub fn with_threshold(min_confidence: f32) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
        }
    }

    /// Detect from the path first, falling back to the content.
    pub fn detect(&self, path: &Path, content: &str) -> DetectionResult {
        match TableFormat::from_extension(path) {
            Some(format) => DetectionResult::of_format(format, FormatConfidence::HIGH),
            None => self.detect_from_content(content),
        }
    }

    /// Detect from content alone by sniffing delimiters.
    pub fn detect_from_content(&self, content: &str) -> DetectionResult {
        let mut best: Option<(u8, f32)> = None;
        for delimiter in CANDIDATE_DELIMITERS {
            let score = delimiter_consistency(content, delimiter);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((delimiter, score));
            }
        }

        tracing::debug!(?best, threshold = self.min_confidence, "delimiter sniff");

        match best {
            Some((delimiter, score)) if score >= self.min_confidence => {
                let format = if delimiter == b'\t' {
                    TableFormat::Tsv
                } else {
                    TableFormat::Csv
                };
                DetectionResult {
                    format,
                    delimiter: Some(delimiter),
                    confidence: FormatConfidence::new(score),
                }
            }
            _ => DetectionResult::of_format(TableFormat::Text, FormatConfidence::LOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(TableFormat::from_extension(Path::new("a.CSV")), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_extension(Path::new("a.tab")), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_extension(Path::new("notes.txt")), Some(TableFormat::Text));
        assert_eq!(TableFormat::from_extension(Path::new("data")), None);
    }

    #[test]
    fn test_extension_wins_over_content() {
        let detector = FormatDetector::new();
        let result = detector.detect(Path::new("x.txt"), "a,b\nc,d\n");
        assert_eq!(result.format, TableFormat::Text);
    }

    #[test]
    fn test_sniff_delimiters() {
        let detector = FormatDetector::new();
        assert_eq!(detector.detect_from_content("a\tb\nc\td\n").format, TableFormat::Tsv);

        let semi = detector.detect_from_content("a;b;c\n1;2;3\n");
        assert_eq!(semi.format, TableFormat::Csv);
        assert_eq!(semi.delimiter, Some(b';'));

        let text = detector.detect_from_content("hello world\nsecond line\n");
        assert_eq!(text.format, TableFormat::Text);
        assert!(text.delimiter.is_none());
    }

    #[test]
    fn test_inconsistent_content_is_text() {
        let detector = FormatDetector::new();
        let result = detector.detect_from_content("a,b\nno comma\nstill none\nnope\n");
        assert_eq!(result.format, TableFormat::Text);
    }
}
