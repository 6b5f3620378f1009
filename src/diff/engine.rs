//! Row diff engine implementation.

use super::engine_matching::{match_remainders, MatchSettings};
use super::partition::Partition;
use super::result::synthesize_header;
use super::{DiffOptions, DiffRecord, DiffResult};
use crate::error::{DiffError, ErrorContext, Result, RowDiffError};
use crate::matching::{CacheStats, SimilarityCache};
use crate::model::{flatten, Row, RowKey, RowShape};
use std::cmp::Ordering;

/// Diff engine for comparing row sequences.
///
/// The engine owns a bounded similarity cache that persists across calls,
/// so diffing related inputs repeatedly gets cheaper.
#[derive(Debug)]
pub struct DiffEngine {
    options: DiffOptions,
    cache: SimilarityCache,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    pub fn new() -> Self {
        Self::with_options(DiffOptions::default())
    }

    /// Create a diff engine with the given options
    pub fn with_options(options: DiffOptions) -> Self {
        let cache = SimilarityCache::new(options.cache_capacity);
        Self { options, cache }
    }

    /// Get the engine options.
    pub const fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Similarity cache statistics accumulated so far.
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop all cached similarity ratios.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Compare two row sequences.
    pub fn diff(&mut self, a: &[Row], b: &[Row]) -> Result<DiffResult> {
        validate_shapes(a, b).context("validating inputs")?;
        let opts = &self.options;
        if opts.start_index.checked_add(a.len().max(b.len())).is_none() {
            return Err(RowDiffError::diff(
                "validating inputs",
                DiffError::InvalidArgument(format!(
                    "start index {} overflows for {} rows",
                    opts.start_index,
                    a.len().max(b.len())
                )),
            ));
        }

        let mut result = DiffResult::new();

        if opts.skip_equal && is_identical(a, b) {
            tracing::debug!(rows = a.len(), "inputs are identical");
            result.summary.equal = a.len();
            return Ok(result);
        }

        let partition = Partition::build(a, b, opts.start_index);
        tracing::debug!(
            equal = partition.equal.len(),
            remainder_a = partition.remainder_a.len(),
            remainder_b = partition.remainder_b.len(),
            "partitioned rows"
        );

        result.summary.equal = partition.equal.len();
        if !opts.skip_equal {
            result.records.extend(
                partition
                    .equal
                    .iter()
                    .map(|pair| DiffRecord::equal(pair.index_a, pair.index_b, flatten(pair.repr))),
            );
        }

        let settings = MatchSettings {
            fuzzy: opts.fuzzy_enabled(),
            threshold: opts.similarity_threshold,
            format: &opts.replace_format,
        };
        let changes = match_remainders(
            partition.remainder_a,
            partition.remainder_b,
            &settings,
            &mut self.cache,
        );
        for record in &changes {
            result.summary.record(record.tag);
        }
        result.records.extend(changes);

        if opts.sort {
            sort_records(&mut result.records, opts.reverse);
        }

        if opts.header && !result.records.is_empty() {
            result.header = Some(synthesize_header(result.max_width()));
        }

        Ok(result)
    }

    /// Compare two row iterators.
    ///
    /// Both iterators are drained before partitioning.
    pub fn diff_iter<I, J>(&mut self, a: I, b: J) -> Result<DiffResult>
    where
        I: IntoIterator<Item = Row>,
        J: IntoIterator<Item = Row>,
    {
        let a: Vec<Row> = a.into_iter().collect();
        let b: Vec<Row> = b.into_iter().collect();
        self.diff(&a, &b)
    }
}

/// Diff two row sequences with a one-off engine.
pub fn differ(a: &[Row], b: &[Row], options: &DiffOptions) -> Result<DiffResult> {
    DiffEngine::with_options(options.clone()).diff(a, b)
}

fn side_shape(rows: &[Row], side: char) -> std::result::Result<Option<RowShape>, DiffError> {
    RowShape::of_side(rows).map_err(|position| DiffError::InconsistentShape {
        side,
        position,
        expected: RowShape::of(&rows[0]),
    })
}

/// Each side must be internally consistent, and two non-empty sides must
/// agree on shape.
fn validate_shapes(a: &[Row], b: &[Row]) -> std::result::Result<(), DiffError> {
    match (side_shape(a, 'A')?, side_shape(b, 'B')?) {
        (Some(sa), Some(sb)) if sa != sb => Err(DiffError::ShapeMismatch { a: sa, b: sb }),
        _ => Ok(()),
    }
}

fn is_identical(a: &[Row], b: &[Row]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| RowKey::of(x) == RowKey::of(y))
}

/// Order by B index (A index for deletes), then A index.
///
/// Only unique for a start index above zero: at zero an insert at B[0] and a
/// delete at A[0] both key to `(0, 0)` and stay in generation order.
fn sort_key(record: &DiffRecord) -> (usize, usize) {
    let primary = record.index_b.or(record.index_a).unwrap_or(0);
    (primary, record.index_a.unwrap_or(0))
}

fn sort_records(records: &mut [DiffRecord], reverse: bool) {
    records.sort_by(|x, y| {
        let ord: Ordering = sort_key(x).cmp(&sort_key(y));
        if reverse {
            ord.reverse()
        } else {
            ord
        }
    });
}
