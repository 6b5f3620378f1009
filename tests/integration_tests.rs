//! Integration tests for rowdiff
//!
//! These tests verify end-to-end functionality of row parsing, the diff
//! engine, report generation and the command handler.

use rowdiff::{
    differ,
    parsers::{read_rows, ReadOptions, TableFormat},
    reports::{create_reporter, ReportConfig, ReportFormat},
    sanitize, DiffConfig, DiffEngine, DiffOptions, DiffTag, ReplaceFormat, Value,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

fn chars(s: &str) -> Vec<Value> {
    s.chars().map(Value::from).collect()
}

fn all_rows() -> DiffOptions {
    DiffOptions::default().skip_equal(false).start_index(0)
}

// ============================================================================
// Engine Tests
// ============================================================================

mod engine_tests {
    use super::*;

    #[test]
    fn test_character_sequence() {
        let result = differ(&chars("abc"), &chars("bcd"), &all_rows()).unwrap();
        let got: Vec<_> = result
            .records
            .iter()
            .map(|r| (r.tag, r.index_a, r.index_b, r.fields.clone()))
            .collect();
        assert_eq!(
            got,
            vec![
                (DiffTag::Delete, Some(0), None, vec![Value::from('a')]),
                (DiffTag::Equal, Some(1), Some(0), vec![Value::from('b')]),
                (DiffTag::Equal, Some(2), Some(1), vec![Value::from('c')]),
                (DiffTag::Insert, None, Some(2), vec![Value::from('d')]),
            ]
        );
    }

    #[test]
    fn test_table_with_replace() {
        let a = vec![Value::list(["a", "b", "c"]), Value::list(["a", "b", "c"])];
        let b = vec![
            Value::list(["a", "b", "c"]),
            Value::list(["a", "c", "c"]),
            Value::list(["x", "t", "z"]),
        ];
        let result = differ(&a, &b, &all_rows()).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.records[0].tag, DiffTag::Equal);

        let replace = &result.records[1];
        assert_eq!(replace.tag, DiffTag::Replace);
        assert_eq!((replace.index_a, replace.index_b), (Some(1), Some(1)));
        assert_eq!(
            replace.fields,
            vec![Value::from("a"), Value::from("b ---> c"), Value::from("c")]
        );

        let insert = &result.records[2];
        assert_eq!(insert.tag, DiffTag::Insert);
        assert_eq!(insert.index_b, Some(2));
        assert_eq!(
            (result.summary.equal, result.summary.replace, result.summary.insert),
            (1, 1, 1)
        );
    }

    #[test]
    fn test_identical_inputs_short_circuit() {
        let rows = chars("hello");
        let result = differ(&rows, &rows, &DiffOptions::default()).unwrap();
        assert!(result.is_empty());
        assert!(!result.has_changes());
        assert_eq!(result.summary.equal, 5);
    }

    #[test]
    fn test_moved_row_is_equal() {
        let a = vec![Value::from("one"), Value::from("two"), Value::from("three")];
        let b = vec![Value::from("three"), Value::from("one"), Value::from("two")];
        let result = differ(&a, &b, &DiffOptions::default()).unwrap();
        assert!(!result.has_changes());
        assert_eq!(result.summary.equal, 3);
    }

    #[test]
    fn test_exact_mode_never_pairs() {
        let a = vec![Value::list(["1", "apple", "red"])];
        let b = vec![Value::list(["1", "apple", "green"])];
        let result = differ(&a, &b, &DiffOptions::default().similarity_threshold(0.0)).unwrap();
        assert_eq!(result.summary.replace, 0);
        assert_eq!(result.summary.delete, 1);
        assert_eq!(result.summary.insert, 1);
    }

    #[test]
    fn test_tables_of_different_width() {
        let a = vec![Value::list(["k", "v"])];
        let b = vec![Value::list(["k", "v", "extra"])];
        let result = differ(&a, &b, &DiffOptions::default().header(true)).unwrap();
        assert_eq!(result.summary.replace, 1);
        assert_eq!(
            result.records[0].fields,
            vec![Value::from("k"), Value::from("v"), Value::from("ADD ---> extra")]
        );
        let header = result.header.as_ref().unwrap();
        assert_eq!(header.len(), result.max_width());
    }

    #[test]
    fn test_mixed_shapes_on_one_side_are_rejected() {
        let a = vec![Value::from("x"), Value::list(["y"])];
        let b = vec![Value::from("x")];
        assert!(differ(&a, &b, &DiffOptions::default()).is_err());
    }

    #[test]
    fn test_engine_cache_persists_across_calls() {
        let a = vec![Value::list(["1", "apple", "red"])];
        let b = vec![Value::list(["1", "apple", "green"])];
        let mut engine = DiffEngine::new();
        engine.diff(&a, &b).unwrap();
        let after_first = engine.cache_stats();
        engine.diff(&a, &b).unwrap();
        let after_second = engine.cache_stats();
        assert!(after_second.hits > after_first.hits);

        engine.clear_cache();
        assert_eq!(engine.cache_stats().lookups, 0);
    }

    #[test]
    fn test_custom_replace_markers() {
        let format = ReplaceFormat {
            separator: " => ".to_string(),
            deleted: "<gone>".to_string(),
            added: "<new>".to_string(),
        };
        assert_eq!(
            sanitize(&Value::Null, &Value::Int(1), &format),
            Value::from("<new> => 1")
        );
        assert_eq!(
            sanitize(&Value::from("x"), &Value::Null, &format),
            Value::from("x => <gone>")
        );
    }
}

// ============================================================================
// File Tests
// ============================================================================

mod file_tests {
    use super::*;

    #[test]
    fn test_read_and_diff_csv_files() {
        let tmp = TempDir::new().unwrap();
        let left = write_file(
            tmp.path(),
            "left.csv",
            "id,name,qty\n1,bolt,10\n2,nut,20\n3,washer,5\n",
        );
        let right = write_file(
            tmp.path(),
            "right.csv",
            "id,name,qty\n1,bolt,10\n2,nut,25\n4,screw,7\n",
        );

        let a = read_rows(&left, &ReadOptions::default()).unwrap();
        let b = read_rows(&right, &ReadOptions::default()).unwrap();
        let result = differ(&a, &b, &DiffOptions::default()).unwrap();

        assert_eq!(result.summary.equal, 2);
        let replaced: Vec<_> = result.records_of(DiffTag::Replace).collect();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].fields[2], Value::from("20 ---> 25"));
        assert_eq!(result.summary.total_changes(), 3);
    }

    #[test]
    fn test_text_files_are_line_sequences() {
        let tmp = TempDir::new().unwrap();
        let left = write_file(tmp.path(), "a.txt", "alpha\nbeta\ngamma\n");
        let right = write_file(tmp.path(), "b.txt", "alpha\ngamma\ndelta\n");

        let options = ReadOptions {
            format: Some(TableFormat::Text),
            ..ReadOptions::default()
        };
        let a = read_rows(&left, &options).unwrap();
        let b = read_rows(&right, &options).unwrap();
        let result = differ(&a, &b, &DiffOptions::default().similarity_threshold(0.0)).unwrap();

        let deleted: Vec<_> = result.records_of(DiffTag::Delete).collect();
        let inserted: Vec<_> = result.records_of(DiffTag::Insert).collect();
        assert_eq!(deleted[0].fields, vec![Value::from("beta")]);
        assert_eq!(deleted[0].index_a, Some(2));
        assert_eq!(inserted[0].fields, vec![Value::from("delta")]);
        assert_eq!(inserted[0].index_b, Some(3));
    }

    #[test]
    fn test_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = read_rows(&tmp.path().join("nope.csv"), &ReadOptions::default());
        assert!(result.is_err());
    }
}

// ============================================================================
// Report Tests
// ============================================================================

mod report_tests {
    use super::*;

    fn sample() -> rowdiff::DiffResult {
        let a = vec![Value::list(["1", "apple"]), Value::list(["2", "pear"])];
        let b = vec![Value::list(["1", "apple"]), Value::list(["3", "plum"])];
        differ(
            &a,
            &b,
            &DiffOptions::default()
                .similarity_threshold(0.0)
                .header(true),
        )
        .unwrap()
    }

    fn config() -> ReportConfig {
        ReportConfig {
            line_terminator: "\n".to_string(),
            ..ReportConfig::default()
        }
    }

    #[test]
    fn test_csv_report() {
        let report = create_reporter(ReportFormat::Csv)
            .generate_diff_report(&sample(), &config())
            .unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], r#""tag","index_a","index_b","col_00","col_01""#);
        // an insert sorts ahead of a delete at the same position
        assert_eq!(lines[1], r#""insert","-","2","3","plum""#);
        assert_eq!(lines[2], r#""delete","2","-","2","pear""#);
    }

    #[test]
    fn test_tsv_report_uses_na_value() {
        let mut config = config();
        config.na_value = "N/A".to_string();
        let report = create_reporter(ReportFormat::Tsv)
            .generate_diff_report(&sample(), &config)
            .unwrap();
        assert!(report.contains("delete\t2\tN/A\t2\tpear\n"));
    }

    #[test]
    fn test_json_report_records() {
        let report = create_reporter(ReportFormat::Json)
            .generate_diff_report(&sample(), &config())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed["is_same"], false);
        assert_eq!(parsed["records"][0]["tag"], "insert");
        assert!(parsed["records"][0]["index_a"].is_null());
        assert_eq!(parsed["records"][0]["fields"][1], "plum");
        assert_eq!(parsed["records"][1]["tag"], "delete");
    }

    #[test]
    fn test_summary_report() {
        let mut config = config();
        config.title = Some("fruit".to_string());
        let report = create_reporter(ReportFormat::Summary)
            .generate_diff_report(&sample(), &config)
            .unwrap();
        assert_eq!(
            report,
            "\n## fruit Summary  ##\nequal  : 1 line\nreplace: 0 line\ndelete : 1 line\ninsert : 1 line\n\n"
        );
    }
}

// ============================================================================
// Command Tests
// ============================================================================

mod command_tests {
    use super::*;
    use rowdiff::cli::run_diff;
    use rowdiff::pipeline::exit_codes;

    fn setup(left: &str, right: &str, out: &str) -> (TempDir, DiffConfig) {
        let tmp = TempDir::new().unwrap();
        let l = write_file(tmp.path(), "before.csv", left);
        let r = write_file(tmp.path(), "after.csv", right);
        let mut config = DiffConfig::new(l, r);
        config.app.output.file = Some(tmp.path().join(out));
        config.app.behavior.quiet = true;
        (tmp, config)
    }

    #[test]
    fn test_tsv_output_chosen_by_extension() {
        let (tmp, mut config) = setup("a,1\nb,2\n", "a,1\nc,3\n", "out.tsv");
        config.app.output.line_terminator = "\n".to_string();
        config.app.output.header = false;
        config.app.matching.threshold = 0.0;

        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);
        let out = std::fs::read_to_string(tmp.path().join("out.tsv")).unwrap();
        assert_eq!(out, "insert\t-\t2\tc\t3\ndelete\t2\t-\tb\t2\n");
    }

    #[test]
    fn test_show_equal_includes_every_row() {
        let (tmp, mut config) = setup("x\ny\n", "x\ny\n", "out.csv");
        config.app.behavior.show_equal = true;
        config.app.output.header = false;

        run_diff(config).unwrap();
        let out = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        let lines: Vec<&str> = out.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.starts_with(r#""equal""#)));
    }

    #[test]
    fn test_second_file_columns_only() {
        let (tmp, mut config) = setup("k\nv\n", "k,1\nv,2\n", "out.csv");
        config.columns.right = Some("0".to_string());
        config.app.output.format = ReportFormat::Summary;
        config.app.behavior.fail_on_change = true;

        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);
        let out = std::fs::read_to_string(tmp.path().join("out.csv")).unwrap();
        assert!(out.contains("equal  : 2 line"));
    }

    #[test]
    fn test_encoded_output() {
        let (tmp, mut config) = setup("名前\n", "名称\n", "out.csv");
        config.app.output.encoding = Some("shift_jis".to_string());
        config.app.output.header = false;
        config.app.matching.threshold = 0.0;

        run_diff(config).unwrap();
        let bytes = std::fs::read(tmp.path().join("out.csv")).unwrap();
        let (decoded, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&bytes);
        assert!(!had_errors);
        assert!(decoded.contains("名称"));
        assert!(std::str::from_utf8(&bytes).is_err());
    }
}
