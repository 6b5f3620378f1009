//! Delimited text tables (CSV, TSV and friends).

use super::traits::{FormatConfidence, FormatDetection, ParseError, RowParser};
use crate::model::{Row, Value};

/// Number of leading lines inspected when sniffing a delimiter.
const SNIFF_LINES: usize = 20;

/// Parser for delimiter-separated tables.
///
/// Every record becomes a tuple row of text fields. The first record is not
/// treated as a header, and records may differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedParser {
    delimiter: u8,
}

impl DelimitedParser {
    /// Parser for the given delimiter byte.
    #[must_use]
    pub const fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Comma-separated values.
    #[must_use]
    pub const fn csv() -> Self {
        Self::new(b',')
    }

    /// Tab-separated values.
    #[must_use]
    pub const fn tsv() -> Self {
        Self::new(b'\t')
    }

    /// The delimiter byte.
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl RowParser for DelimitedParser {
    fn parse_str(&self, content: &str) -> Result<Vec<Row>, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(Value::List(record.iter().map(Value::from).collect()));
        }
        Ok(rows)
    }

    fn format_name(&self) -> &str {
        match self.delimiter {
            b'\t' => "TSV",
            _ => "CSV",
        }
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let consistency = delimiter_consistency(content, self.delimiter);
        if consistency <= 0.0 {
            return FormatDetection::no_match();
        }
        FormatDetection::with_confidence(FormatConfidence::new(consistency))
    }
}

/// Share of sampled lines that split into the same number (>1) of fields.
///
/// Quoted fields are not taken into account; this is only a sniff.
pub(crate) fn delimiter_consistency(content: &str, delimiter: u8) -> f32 {
    let delimiter = delimiter as char;
    let counts: Vec<usize> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SNIFF_LINES)
        .map(|line| line.matches(delimiter).count())
        .collect();

    let Some(&first) = counts.first() else {
        return 0.0;
    };
    if first == 0 {
        return 0.0;
    }
    let agreeing = counts.iter().filter(|&&c| c == first).count();
    agreeing as f32 / counts.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let rows = DelimitedParser::csv()
            .parse_str("a,b,c\n1,\"x,y\",3\n")
            .unwrap();
        assert_eq!(rows, vec![
            Value::list(["a", "b", "c"]),
            Value::list(["1", "x,y", "3"]),
        ]);
    }

    #[test]
    fn test_flexible_lengths() {
        let rows = DelimitedParser::csv().parse_str("a,b\nc\r\nd,e,f\n").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], Value::list(["c"]));
        assert_eq!(rows[2], Value::list(["d", "e", "f"]));
    }

    #[test]
    fn test_parse_tsv() {
        let rows = DelimitedParser::tsv().parse_str("a\tb\nc\td\n").unwrap();
        assert_eq!(rows[1], Value::list(["c", "d"]));
        assert_eq!(DelimitedParser::tsv().format_name(), "TSV");
    }

    #[test]
    fn test_detect() {
        let content = "a,b,c\n1,2,3\n4,5,6\n";
        assert!(DelimitedParser::csv().can_parse(content));
        assert!(!DelimitedParser::tsv().can_parse(content));
        assert_eq!(delimiter_consistency("no delimiters here", b','), 0.0);
        assert!((delimiter_consistency("a,b\nc,d\ne\n", b',') - 2.0 / 3.0).abs() < 1e-6);
    }
}
