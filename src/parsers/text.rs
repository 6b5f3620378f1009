//! Plain line-oriented text.

use super::traits::{FormatConfidence, FormatDetection, ParseError, RowParser};
use crate::model::{Row, Value};

/// One scalar text row per line, terminators stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl RowParser for TextParser {
    fn parse_str(&self, content: &str) -> Result<Vec<Row>, ParseError> {
        Ok(content.lines().map(Value::from).collect())
    }

    fn format_name(&self) -> &str {
        "text"
    }

    fn detect(&self, _content: &str) -> FormatDetection {
        // any text qualifies, but only as a last resort
        FormatDetection::with_confidence(FormatConfidence::LOW)
    }
}
