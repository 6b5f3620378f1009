//! CSV and TSV report generators.
//!
//! Both write one line per report row, the synthesized header first when
//! present. CSV quotes every cell. TSV leaves cells unquoted and writes
//! backslash, tab, CR and LF as `\\`, `\t`, `\r` and `\n` so every record
//! stays on one line.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::DiffResult;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        for row in result.rows(&config.na_value) {
            let cells: Vec<String> = row.iter().map(|c| format!("\"{}\"", escape_csv(c))).collect();
            content.push_str(&cells.join(","));
            content.push_str(&config.line_terminator);
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

/// TSV report generator.
pub struct TsvReporter;

impl TsvReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TsvReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        for row in result.rows(&config.na_value) {
            let cells: Vec<String> = row.iter().map(|c| escape_tsv(c)).collect();
            content.push_str(&cells.join("\t"));
            content.push_str(&config.line_terminator);
        }
        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Tsv
    }
}

/// Escape a string for use inside a double-quoted CSV cell.
fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}

fn escape_tsv(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
