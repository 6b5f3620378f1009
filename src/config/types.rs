//! Configuration types for rowdiff operations.

use super::defaults::{DEFAULT_LINE_TERMINATOR, DEFAULT_NA_VALUE};
use crate::diff::{DiffOptions, ReplaceFormat, DEFAULT_SIMILARITY_THRESHOLD};
use crate::matching::DEFAULT_CACHE_CAPACITY;
use crate::model::ColumnSelector;
use crate::parsers::{ParseError, ReadOptions, TableFormat};
use crate::reports::{ReportConfig, ReportFormat, ReportMetadata};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration loaded from config files and CLI args.
///
/// Command line flags are applied on top of the loaded file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Replace pairing (threshold, similarity cache)
    pub matching: MatchingConfig,
    /// Input reading (format, encoding, numbering)
    pub input: InputConfig,
    /// Output configuration (format, file, encoding)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Replace value markers
    pub replace: ReplaceFormat,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Engine options described by this configuration.
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            skip_equal: !self.behavior.show_equal,
            sort: self.behavior.sort,
            reverse: self.behavior.reverse,
            similarity_threshold: self.matching.threshold,
            start_index: self.input.start_index,
            header: self.output.header,
            replace_format: self.replace.clone(),
            cache_capacity: self.matching.cache_capacity,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the similarity threshold.
    pub const fn threshold(mut self, threshold: f64) -> Self {
        self.config.matching.threshold = threshold;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Include equal records in the output.
    pub const fn show_equal(mut self, show: bool) -> Self {
        self.config.behavior.show_equal = show;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Set the replace separator.
    pub fn replace_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.replace.separator = separator.into();
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Column projection per side
    pub columns: ColumnsConfig,
    /// Settings shared with config files
    pub app: AppConfig,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Left (before) source
    pub left: PathBuf,
    /// Right (after) source
    pub right: PathBuf,
}

/// Column selector expressions per side, as given on the command line.
///
/// `both` applies to a side without its own selector.
#[derive(Debug, Clone, Default)]
pub struct ColumnsConfig {
    pub both: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl ColumnsConfig {
    fn selector_for(&self, right: bool) -> Option<&str> {
        let own = if right { &self.right } else { &self.left };
        own.as_deref().or(self.both.as_deref())
    }
}

impl DiffConfig {
    /// Create a diff config with default settings.
    pub fn new(left: impl Into<PathBuf>, right: impl Into<PathBuf>) -> Self {
        Self {
            paths: DiffPaths {
                left: left.into(),
                right: right.into(),
            },
            columns: ColumnsConfig::default(),
            app: AppConfig::default(),
        }
    }

    /// Read options for one side; `right` selects the B side.
    pub fn read_options(&self, right: bool) -> Result<ReadOptions, ParseError> {
        let columns = self
            .columns
            .selector_for(right)
            .map(|expr| ColumnSelector::parse(expr, self.app.input.column_base))
            .transpose()?;
        Ok(ReadOptions {
            format: self.app.input.format,
            encoding: self.app.input.encoding.clone(),
            columns,
        })
    }

    /// Engine options for this diff.
    pub fn diff_options(&self) -> DiffOptions {
        self.app.diff_options()
    }

    /// Report settings for this diff.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            na_value: self.app.output.na_value.clone(),
            line_terminator: self.app.output.line_terminator.clone(),
            title: self.app.output.title.clone(),
            metadata: ReportMetadata {
                left_path: Some(self.paths.left.display().to_string()),
                right_path: Some(self.paths.right.display().to_string()),
            },
        }
    }

    /// Output format with `Auto` resolved against the output file.
    pub fn report_format(&self) -> ReportFormat {
        self.app.output.format.resolve(self.app.output.file.as_deref())
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Replace pairing configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum similarity for pairing a deleted row with an inserted one.
    /// Values of 0 or 1 disable pairing.
    #[schemars(range(min = 0.0, max = 1.0))]
    pub threshold: f64,
    /// Similarity cache capacity (0 disables caching)
    pub cache_capacity: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Input-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Input format override (detected when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TableFormat>,
    /// Input encoding label (UTF-8 when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Number given to the first row
    pub start_index: usize,
    /// Number of the first column in numeric column specs
    pub column_base: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: None,
            encoding: None,
            start_index: 1,
            column_base: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Output encoding label (UTF-8 when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Row terminator for CSV and TSV output
    pub line_terminator: String,
    /// Placeholder for an index that does not apply
    pub na_value: String,
    /// Write a synthesized header row
    pub header: bool,
    /// Title for the summary report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            encoding: None,
            line_terminator: DEFAULT_LINE_TERMINATOR.to_string(),
            na_value: DEFAULT_NA_VALUE.to_string(),
            header: true,
            title: None,
        }
    }
}

/// Behavior flags
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Include equal records
    pub show_equal: bool,
    /// Sort records by position
    pub sort: bool,
    /// Reverse the sort order
    pub reverse: bool,
    /// Exit with code 1 when the inputs differ
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            show_equal: false,
            sort: true,
            reverse: false,
            fail_on_change: false,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_diff_options() {
        let options = AppConfig::default().diff_options();
        assert_eq!(options, DiffOptions::default().header(true));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .threshold(0.8)
            .show_equal(true)
            .fail_on_change(true)
            .replace_separator(" => ")
            .build();
        let options = config.diff_options();
        assert!(!options.skip_equal);
        assert!((options.similarity_threshold - 0.8).abs() < f64::EPSILON);
        assert_eq!(options.replace_format.separator, " => ");
        assert!(config.behavior.fail_on_change);
    }

    #[test]
    fn test_column_specs_per_side() {
        let mut config = DiffConfig::new("a.csv", "b.csv");
        config.columns.both = Some("0".into());
        config.columns.right = Some("1".into());

        let left = config.read_options(false).unwrap();
        let right = config.read_options(true).unwrap();
        assert_eq!(left.columns, Some(ColumnSelector::Indices(vec![0])));
        assert_eq!(right.columns, Some(ColumnSelector::Indices(vec![1])));
    }

    #[test]
    fn test_report_settings() {
        let mut config = DiffConfig::new("a.csv", "b.csv");
        config.app.output.file = Some(PathBuf::from("out.tsv"));
        assert_eq!(config.report_format(), ReportFormat::Tsv);

        let report = config.report_config();
        assert_eq!(report.na_value, "-");
        assert_eq!(report.display_title(), "a.csv vs b.csv");
    }
}
