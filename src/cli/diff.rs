//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two row sources.

use crate::config::DiffConfig;
use crate::diff::DiffResult;
use crate::pipeline::{compute_diff, exit_codes, output_report, parse_rows_with_context};
use anyhow::{Context, Result};

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.app.behavior.quiet;

    let left_options = config
        .read_options(false)
        .context("Invalid column selector for the left file")?;
    let right_options = config
        .read_options(true)
        .context("Invalid column selector for the right file")?;

    let left = parse_rows_with_context(&config.paths.left, &left_options, quiet)?;
    let right = parse_rows_with_context(&config.paths.right, &right_options, quiet)?;

    let result = compute_diff(&config, &left.rows, &right.rows)?;
    let exit_code = determine_exit_code(&config, &result);

    output_report(&config, &result)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, result: &DiffResult) -> i32 {
    if config.app.behavior.fail_on_change && result.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn setup(left: &str, right: &str) -> (TempDir, DiffConfig) {
        let tmp = TempDir::new().unwrap();
        let l = tmp.path().join("left.csv");
        let r = tmp.path().join("right.csv");
        std::fs::write(&l, left).unwrap();
        std::fs::write(&r, right).unwrap();
        let mut config = DiffConfig::new(l, r);
        config.app.output.file = Some(tmp.path().join("out.csv"));
        config.app.behavior.quiet = true;
        (tmp, config)
    }

    #[test]
    fn test_run_diff_writes_report() {
        let (tmp, config) = setup(
            "id,name,color\n1,apple,red\n2,pear,green\n",
            "id,name,color\n1,apple,red\n2,peach,green\n",
        );
        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);

        let out = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        let lines: Vec<&str> = out.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], r#""tag","index_a","index_b","col_00","col_01","col_02""#);
        assert_eq!(lines[1], r#""replace","3","3","2","pear ---> peach","green""#);
    }

    #[test]
    fn test_fail_on_change_exit_code() {
        let (_tmp, mut config) = setup("a\n", "b\n");
        config.app.behavior.fail_on_change = true;
        assert_eq!(run_diff(config).unwrap(), exit_codes::CHANGES_DETECTED);

        let (_tmp, mut config) = setup("a\n", "a\n");
        config.app.behavior.fail_on_change = true;
        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_column_selection() {
        let (tmp, mut config) = setup("x,1\ny,2\n", "x,9\ny,8\n");
        config.columns.both = Some("0".into());
        config.app.output.format = ReportFormat::Summary;
        run_diff(config).unwrap();

        let out = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        assert!(out.contains("equal  : 2 line"));
        assert!(out.contains("replace: 0 line"));
    }

    #[test]
    fn test_bad_selector_is_error() {
        let (_tmp, mut config) = setup("a\n", "b\n");
        config.columns.left = Some("3-1".into());
        assert!(run_diff(config).is_err());
    }
}
