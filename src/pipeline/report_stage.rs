//! Report output stage.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::reports::{create_reporter, encode_report};
use anyhow::{Context, Result};

use super::{write_output, OutputTarget};

/// Render and encode the report for a diff result.
///
/// `Auto` format follows the output file extension; stdout gets CSV.
pub fn render_report(config: &DiffConfig, result: &DiffResult) -> Result<Vec<u8>> {
    let format = config.report_format();
    tracing::debug!(%format, "rendering report");

    let reporter = create_reporter(format);
    let report = reporter
        .generate_diff_report(result, &config.report_config())
        .with_context(|| format!("Failed to generate {format} report"))?;

    encode_report(&report, config.app.output.encoding.as_deref())
        .context("Failed to encode report")
}

/// Output a diff report to the configured destination.
pub fn output_report(config: &DiffConfig, result: &DiffResult) -> Result<()> {
    let target = OutputTarget::from_option(config.app.output.file.clone());
    let bytes = render_report(config, result)?;
    write_output(&bytes, &target, config.app.behavior.quiet)
}
