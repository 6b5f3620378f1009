#![no_main]
use libfuzzer_sys::fuzz_target;
use rowdiff::{differ, DiffOptions, Value};

/// Fuzz the diff engine with two line sequences split at the first NUL.
///
/// The first byte picks the similarity threshold so both the exact and
/// the fuzzy pairing paths are exercised.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let Ok(s) = std::str::from_utf8(rest) else {
        return;
    };
    let (left, right) = s.split_once('\0').unwrap_or((s, ""));
    let rows = |text: &str| -> Vec<Value> {
        text.lines()
            .map(|line| Value::list(line.split(',').map(str::to_string)))
            .collect()
    };

    let options = DiffOptions::default()
        .skip_equal(mode & 1 == 0)
        .similarity_threshold(f64::from(mode >> 1) / 127.0);
    if let Ok(result) = differ(&rows(left), &rows(right), &options) {
        assert_eq!(
            result.summary.total_changes() + usize::from(!options.skip_equal) * result.summary.equal,
            result.len()
        );
    }
});
