//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pick from the output file extension: TSV for `.tsv`, JSON for
    /// `.json`, CSV otherwise
    #[default]
    Auto,
    /// Fully quoted comma-separated values
    Csv,
    /// Tab-separated values
    Tsv,
    /// Structured JSON output
    Json,
    /// Per-tag line counts
    Summary,
}

impl ReportFormat {
    /// Resolve `Auto` against the output path.
    #[must_use]
    pub fn resolve(self, output: Option<&Path>) -> Self {
        if self != Self::Auto {
            return self;
        }
        let ext = output
            .and_then(Path::extension)
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("tsv" | "tab") => Self::Tsv,
            Some("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Tsv => write!(f, "tsv"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Rendered in place of a missing index
    pub na_value: String,
    /// Appended after every row of CSV and TSV output
    pub line_terminator: String,
    /// Title for the summary block
    pub title: Option<String>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            na_value: "-".to_string(),
            line_terminator: "\r\n".to_string(),
            title: None,
            metadata: ReportMetadata::default(),
        }
    }
}

/// Metadata about the compared inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path of the left (before) input
    pub left_path: Option<String>,
    /// Path of the right (after) input
    pub right_path: Option<String>,
}

impl ReportConfig {
    /// Title used by the summary report.
    #[must_use]
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        match (&self.metadata.left_path, &self.metadata.right_path) {
            (Some(left), Some(right)) => format!("{left} vs {right}"),
            _ => String::new(),
        }
    }
}
