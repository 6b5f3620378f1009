//! Pipeline orchestration for diff runs.
//!
//! Shared read → diff → report logic used by the CLI command handlers.

mod diff_stage;
mod output;
mod parse;
mod report_stage;

pub use diff_stage::compute_diff;
pub use output::{write_output, OutputTarget};
pub use parse::{parse_rows_with_context, ParsedRows};
pub use report_stage::{output_report, render_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no differences, or differences without --fail-on-change
    pub const SUCCESS: i32 = 0;
    /// Differences were found and --fail-on-change is set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
