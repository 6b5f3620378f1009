//! Summary report generator.
//!
//! Prints per-tag line counts instead of records.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{DiffResult, DiffTag};
use std::fmt::Write;

/// Per-tag line count reporter
pub struct SummaryReporter;

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out)?;
        writeln!(out, "## {} Summary  ##", config.display_title())?;
        for tag in DiffTag::ALL {
            writeln!(out, "{:<7}: {} line", tag.as_str(), result.summary.count(tag))?;
        }
        writeln!(out)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{differ, DiffOptions};
    use crate::model::Value;

    #[test]
    fn test_summary_layout() {
        let a: Vec<Value> = ["a", "b", "c"].into_iter().map(Value::from).collect();
        let b: Vec<Value> = ["a", "c", "d", "e"].into_iter().map(Value::from).collect();
        let result = differ(&a, &b, &DiffOptions::default().similarity_threshold(0.0)).unwrap();

        let config = ReportConfig {
            title: Some("t".into()),
            ..ReportConfig::default()
        };
        let report = SummaryReporter::new().generate_diff_report(&result, &config).unwrap();
        assert_eq!(
            report,
            "\n## t Summary  ##\nequal  : 2 line\nreplace: 0 line\ndelete : 1 line\ninsert : 2 line\n\n"
        );
    }
}
