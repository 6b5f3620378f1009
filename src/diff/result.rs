//! Diff result structures.

use crate::model::Value;
use serde::Serialize;
use std::fmt;

/// Kind of a diff record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl DiffTag {
    /// All tags, in summary order.
    pub const ALL: [Self; 4] = [Self::Equal, Self::Replace, Self::Delete, Self::Insert];

    /// Bare lowercase name, as rendered in reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }
}

impl fmt::Display for DiffTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tagged record of a diff.
///
/// `index_a` is `None` only for inserts and `index_b` only for deletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRecord {
    pub tag: DiffTag,
    pub index_a: Option<usize>,
    pub index_b: Option<usize>,
    /// Flattened payload: the row, or the rendered replace value
    pub fields: Vec<Value>,
}

impl DiffRecord {
    pub(crate) fn equal(a: usize, b: usize, fields: Vec<Value>) -> Self {
        Self {
            tag: DiffTag::Equal,
            index_a: Some(a),
            index_b: Some(b),
            fields,
        }
    }

    pub(crate) fn replace(a: usize, b: usize, fields: Vec<Value>) -> Self {
        Self {
            tag: DiffTag::Replace,
            index_a: Some(a),
            index_b: Some(b),
            fields,
        }
    }

    pub(crate) fn delete(a: usize, fields: Vec<Value>) -> Self {
        Self {
            tag: DiffTag::Delete,
            index_a: Some(a),
            index_b: None,
            fields,
        }
    }

    pub(crate) fn insert(b: usize, fields: Vec<Value>) -> Self {
        Self {
            tag: DiffTag::Insert,
            index_a: None,
            index_b: Some(b),
            fields,
        }
    }

    /// Number of cells this record renders to.
    #[must_use]
    pub fn width(&self) -> usize {
        3 + self.fields.len()
    }

    /// Render as report cells, with `na` standing in for a missing index.
    #[must_use]
    pub fn to_cells(&self, na: &str) -> Vec<String> {
        let index = |i: Option<usize>| i.map_or_else(|| na.to_string(), |i| i.to_string());
        let mut cells = Vec::with_capacity(self.width());
        cells.push(self.tag.to_string());
        cells.push(index(self.index_a));
        cells.push(index(self.index_b));
        cells.extend(self.fields.iter().map(ToString::to_string));
        cells
    }
}

/// Record counts per tag.
///
/// `equal` is counted even when equal records are suppressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub equal: usize,
    pub replace: usize,
    pub delete: usize,
    pub insert: usize,
}

impl DiffSummary {
    pub(crate) fn record(&mut self, tag: DiffTag) {
        match tag {
            DiffTag::Equal => self.equal += 1,
            DiffTag::Replace => self.replace += 1,
            DiffTag::Delete => self.delete += 1,
            DiffTag::Insert => self.insert += 1,
        }
    }

    /// Count for one tag.
    #[must_use]
    pub const fn count(&self, tag: DiffTag) -> usize {
        match tag {
            DiffTag::Equal => self.equal,
            DiffTag::Replace => self.replace,
            DiffTag::Delete => self.delete,
            DiffTag::Insert => self.insert,
        }
    }

    /// Number of non-equal records.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.replace + self.delete + self.insert
    }
}

/// Complete result of a diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[must_use]
pub struct DiffResult {
    /// Synthesized header, when requested and the result is non-empty
    pub header: Option<Vec<String>>,
    pub records: Vec<DiffRecord>,
    pub summary: DiffSummary,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no records were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records, header excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the two inputs differ at all.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.summary.total_changes() > 0
    }

    /// Records with the given tag.
    pub fn records_of(&self, tag: DiffTag) -> impl Iterator<Item = &DiffRecord> {
        self.records.iter().filter(move |r| r.tag == tag)
    }

    /// Widest record, in cells.
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.records.iter().map(DiffRecord::width).max().unwrap_or(0)
    }

    /// All report rows: the header first (when present), then every record.
    pub fn rows<'a>(&'a self, na: &'a str) -> impl Iterator<Item = Vec<String>> + 'a {
        self.header
            .iter()
            .cloned()
            .chain(self.records.iter().map(move |r| r.to_cells(na)))
    }
}

/// Header row sized for records of `max_width` cells.
pub(crate) fn synthesize_header(max_width: usize) -> Vec<String> {
    let columns = max_width.saturating_sub(3);
    ["tag", "index_a", "index_b"]
        .into_iter()
        .map(String::from)
        .chain((0..columns).map(|i| format!("col_{i:02}")))
        .collect()
}
