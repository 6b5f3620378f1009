//! Column selection for tuple rows.
//!
//! A selector is written either as numeric positions (`"1,0"`, `"2-4"`) or
//! as header names (`"b,a"`). Numeric positions are shifted down by the
//! start offset, so with offset 1 the first column is `"1"`.

use super::{Row, Value};
use crate::parsers::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// Anything besides digits, commas and dashes means a name list.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9,\-]").expect("static regex"));

/// Which columns of each tuple row take part in a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Zero-based column positions, in output order
    Indices(Vec<usize>),
    /// Header names resolved against the first row
    Names(Vec<String>),
}

impl ColumnSelector {
    /// Parse a selector expression.
    ///
    /// `offset` is subtracted from every numeric position.
    pub fn parse(expr: &str, offset: usize) -> Result<Self, ParseError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(ParseError::InvalidSelector("empty selector".to_string()));
        }

        if NAME_PATTERN.is_match(expr) {
            let names = expr.split(',').map(|s| s.trim().to_string()).collect();
            return Ok(Self::Names(names));
        }

        let mut indices = Vec::new();
        for part in expr.split(',') {
            if let Some((start, end)) = part.split_once('-') {
                let start = parse_position(start, offset, expr)?;
                let end = parse_position(end, offset, expr)?;
                if end < start {
                    return Err(ParseError::InvalidSelector(format!(
                        "descending range in '{expr}'"
                    )));
                }
                indices.extend(start..=end);
            } else {
                indices.push(parse_position(part, offset, expr)?);
            }
        }
        Ok(Self::Indices(indices))
    }

    /// Project every tuple row onto the selected columns.
    ///
    /// Scalar rows pass through untouched. Positions past the end of a row
    /// select `Null`. Names are looked up in the first row, which is kept as
    /// the projected header.
    pub fn apply(&self, rows: Vec<Row>) -> Result<Vec<Row>, ParseError> {
        let indices = match self {
            Self::Indices(indices) => indices.clone(),
            Self::Names(names) => resolve_names(names, rows.first())?,
        };
        Ok(rows
            .into_iter()
            .map(|row| match row {
                Value::List(fields) => Value::List(
                    indices
                        .iter()
                        .map(|&i| fields.get(i).cloned().unwrap_or_default())
                        .collect(),
                ),
                scalar => scalar,
            })
            .collect())
    }
}

fn resolve_names(names: &[String], header: Option<&Row>) -> Result<Vec<usize>, ParseError> {
    let Some(Value::List(header)) = header else {
        return Err(ParseError::MissingColumn(format!(
            "no header row to resolve '{}'",
            names.join(",")
        )));
    };
    names
        .iter()
        .map(|name| {
            header
                .iter()
                .position(|cell| cell.as_text() == Some(name.as_str()))
                .ok_or_else(|| ParseError::MissingColumn(name.clone()))
        })
        .collect()
}

fn parse_position(raw: &str, offset: usize, expr: &str) -> Result<usize, ParseError> {
    let n: usize = raw
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidSelector(format!("bad position '{raw}' in '{expr}'")))?;
    n.checked_sub(offset).ok_or_else(|| {
        ParseError::InvalidSelector(format!("position {n} is below the start offset {offset}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Row> {
        vec![Value::list(["a", "b", "c"]), Value::list(["e", "d", "f"])]
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!(
            ColumnSelector::parse("1,0", 0).unwrap(),
            ColumnSelector::Indices(vec![1, 0])
        );
        assert_eq!(
            ColumnSelector::parse("0-2", 0).unwrap(),
            ColumnSelector::Indices(vec![0, 1, 2])
        );
        assert_eq!(
            ColumnSelector::parse("2-3,1", 1).unwrap(),
            ColumnSelector::Indices(vec![1, 2, 0])
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            ColumnSelector::parse("b,a", 0).unwrap(),
            ColumnSelector::Names(vec!["b".into(), "a".into()])
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ColumnSelector::parse("", 0),
            Err(ParseError::InvalidSelector(_))
        ));
        assert!(matches!(
            ColumnSelector::parse("0", 1),
            Err(ParseError::InvalidSelector(_))
        ));
        assert!(matches!(
            ColumnSelector::parse("3-1", 0),
            Err(ParseError::InvalidSelector(_))
        ));
        assert!(matches!(
            ColumnSelector::parse("1,,2", 0),
            Err(ParseError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_apply_positions() {
        let selected = ColumnSelector::parse("1,0", 0).unwrap().apply(table()).unwrap();
        assert_eq!(selected, vec![Value::list(["b", "a"]), Value::list(["d", "e"])]);
    }

    #[test]
    fn test_apply_names() {
        let selected = ColumnSelector::parse("b,a", 0).unwrap().apply(table()).unwrap();
        assert_eq!(selected, vec![Value::list(["b", "a"]), Value::list(["d", "e"])]);
    }

    #[test]
    fn test_apply_missing() {
        let selected = ColumnSelector::Indices(vec![0, 5]).apply(table()).unwrap();
        assert_eq!(selected[0], Value::List(vec![Value::from("a"), Value::Null]));

        let err = ColumnSelector::parse("zz", 0).unwrap().apply(table());
        assert!(matches!(err, Err(ParseError::MissingColumn(name)) if name == "zz"));
    }

    #[test]
    fn test_scalar_rows_untouched() {
        let rows = vec![Value::from("line")];
        let selected = ColumnSelector::Indices(vec![0]).apply(rows.clone()).unwrap();
        assert_eq!(selected, rows);
    }
}
