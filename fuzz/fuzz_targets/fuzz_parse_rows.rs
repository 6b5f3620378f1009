#![no_main]
use libfuzzer_sys::fuzz_target;
use rowdiff::parsers::{parse_rows_str, FormatDetector, RowParser};

/// Fuzz delimiter sniffing and every row parser.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let detected = FormatDetector::new().detect_from_content(s);
        let _ = detected.parser().parse_str(s);
        let _ = parse_rows_str(s, detected.format);
    }
});
