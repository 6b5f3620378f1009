//! Similarity matching of partition remainders.
//!
//! Unmatched A entries are paired greedily with the most similar unmatched
//! B entry. Pairs scoring at or above the threshold become `replace`
//! records; everything else becomes `delete` or `insert`.

use super::partition::RemainderEntry;
use super::sanitize::sanitize;
use super::{DiffRecord, ReplaceFormat};
use crate::matching::SimilarityCache;
use crate::model::flatten;

/// Arena of B entries with a read cursor per entry.
///
/// Entries are never removed; a drained entry is flagged consumed and
/// skipped by every later scan.
struct Worklist<'a> {
    entries: Vec<RemainderEntry<'a>>,
    cursor: Vec<usize>,
    consumed: Vec<bool>,
}

impl<'a> Worklist<'a> {
    fn new(entries: Vec<RemainderEntry<'a>>) -> Self {
        let n = entries.len();
        Self {
            entries,
            cursor: vec![0; n],
            consumed: vec![false; n],
        }
    }

    fn live(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.entries.len()).filter(|&j| !self.consumed[j])
    }

    fn pending(&self, j: usize) -> &[usize] {
        &self.entries[j].positions[self.cursor[j]..]
    }

    /// Take up to `n` pending positions from entry `j`.
    fn take(&mut self, j: usize, n: usize) -> Vec<usize> {
        let start = self.cursor[j];
        let end = (start + n).min(self.entries[j].positions.len());
        self.cursor[j] = end;
        if end == self.entries[j].positions.len() {
            self.consumed[j] = true;
        }
        self.entries[j].positions[start..end].to_vec()
    }
}

/// Settings for one matching pass.
pub(crate) struct MatchSettings<'s> {
    pub fuzzy: bool,
    pub threshold: f64,
    pub format: &'s ReplaceFormat,
}

/// Turn the remainders into `replace`, `delete` and `insert` records.
///
/// Records come out in generation order: for each A entry its replaces and
/// deletes, then every leftover B position as an insert.
pub(crate) fn match_remainders(
    remainder_a: Vec<RemainderEntry<'_>>,
    remainder_b: Vec<RemainderEntry<'_>>,
    settings: &MatchSettings<'_>,
    cache: &mut SimilarityCache,
) -> Vec<DiffRecord> {
    let mut records = Vec::new();
    let mut worklist = Worklist::new(remainder_b);

    for entry in &remainder_a {
        let mut next = 0;
        while next < entry.positions.len() {
            let best = if settings.fuzzy {
                best_candidate(entry, &worklist, cache)
            } else {
                None
            };

            let j = match best {
                Some((j, ratio)) if ratio >= settings.threshold => j,
                _ => {
                    let fields = flatten(entry.repr);
                    records.extend(
                        entry.positions[next..]
                            .iter()
                            .map(|&pa| DiffRecord::delete(pa, fields.clone())),
                    );
                    break;
                }
            };

            let fields = flatten(&sanitize(entry.repr, worklist.entries[j].repr, settings.format));
            let taken = worklist.take(j, entry.positions.len() - next);
            records.extend(
                entry.positions[next..]
                    .iter()
                    .zip(&taken)
                    .map(|(&pa, &pb)| DiffRecord::replace(pa, pb, fields.clone())),
            );
            next += taken.len();
        }
    }

    for j in 0..worklist.entries.len() {
        let fields = flatten(worklist.entries[j].repr);
        records.extend(
            worklist
                .pending(j)
                .iter()
                .map(|&pb| DiffRecord::insert(pb, fields.clone())),
        );
    }

    tracing::debug!(
        remainder_a = remainder_a.len(),
        remainder_b = worklist.entries.len(),
        records = records.len(),
        "matched remainders"
    );
    records
}

/// Most similar live B entry; the first one seen wins ties.
fn best_candidate(
    entry: &RemainderEntry<'_>,
    worklist: &Worklist<'_>,
    cache: &mut SimilarityCache,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for j in worklist.live() {
        let ratio = cache.similarity(&entry.key, &worklist.entries[j].key);
        if best.map_or(true, |(_, top)| ratio > top) {
            best = Some((j, ratio));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffTag;
    use crate::model::{Row, RowKey, Value};

    fn entry(row: &Row, positions: Vec<usize>) -> RemainderEntry<'_> {
        RemainderEntry {
            key: RowKey::of(row),
            repr: row,
            positions,
        }
    }

    fn run(a: Vec<RemainderEntry<'_>>, b: Vec<RemainderEntry<'_>>, fuzzy: bool) -> Vec<DiffRecord> {
        let format = ReplaceFormat::default();
        let settings = MatchSettings {
            fuzzy,
            threshold: 0.6,
            format: &format,
        };
        match_remainders(a, b, &settings, &mut SimilarityCache::new(16))
    }

    #[test]
    fn test_pairs_similar_rows() {
        let (ra, rb) = (Value::from("abc"), Value::from("abd"));
        let records = run(vec![entry(&ra, vec![4])], vec![entry(&rb, vec![7])], true);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag, DiffTag::Replace);
        assert_eq!((records[0].index_a, records[0].index_b), (Some(4), Some(7)));
        assert_eq!(records[0].fields, vec![Value::from("abc ---> abd")]);
    }

    #[test]
    fn test_below_threshold_deletes_and_inserts() {
        let (ra, rb) = (Value::from("abc"), Value::from("xyz"));
        let records = run(vec![entry(&ra, vec![0])], vec![entry(&rb, vec![0])], true);
        let tags: Vec<_> = records.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![DiffTag::Delete, DiffTag::Insert]);
    }

    #[test]
    fn test_fuzzy_disabled() {
        let (ra, rb) = (Value::from("abc"), Value::from("abd"));
        let records = run(vec![entry(&ra, vec![0])], vec![entry(&rb, vec![0])], false);
        let tags: Vec<_> = records.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![DiffTag::Delete, DiffTag::Insert]);
    }

    #[test]
    fn test_leftover_a_positions_are_requeued() {
        let ra = Value::from("abcd");
        let (rb1, rb2) = (Value::from("abcx"), Value::from("abyd"));
        let records = run(
            vec![entry(&ra, vec![1, 2])],
            vec![entry(&rb1, vec![5]), entry(&rb2, vec![6])],
            true,
        );
        let pairs: Vec<_> = records.iter().map(|r| (r.tag, r.index_a, r.index_b)).collect();
        assert_eq!(pairs, vec![
            (DiffTag::Replace, Some(1), Some(5)),
            (DiffTag::Replace, Some(2), Some(6)),
        ]);
    }

    #[test]
    fn test_unconsumed_b_positions_stay_queued() {
        let ra = Value::from("abcd");
        let rb = Value::from("abcx");
        let records = run(vec![entry(&ra, vec![1])], vec![entry(&rb, vec![2, 3, 4])], true);
        let pairs: Vec<_> = records.iter().map(|r| (r.tag, r.index_a, r.index_b)).collect();
        assert_eq!(pairs, vec![
            (DiffTag::Replace, Some(1), Some(2)),
            (DiffTag::Insert, None, Some(3)),
            (DiffTag::Insert, None, Some(4)),
        ]);
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let ra = Value::from("ab");
        let (rb1, rb2) = (Value::from("ax"), Value::from("ay"));
        // both score 0.5, so lower the bar
        let format = ReplaceFormat::default();
        let settings = MatchSettings {
            fuzzy: true,
            threshold: 0.5,
            format: &format,
        };
        let records = match_remainders(
            vec![entry(&ra, vec![0])],
            vec![entry(&rb1, vec![10]), entry(&rb2, vec![20])],
            &settings,
            &mut SimilarityCache::new(0),
        );
        assert_eq!(records[0].index_b, Some(10));
        assert_eq!(records[1].index_b, Some(20));
        assert_eq!(records[1].tag, DiffTag::Insert);
    }
}
