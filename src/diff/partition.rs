//! Multiset partition of two row sequences.
//!
//! Rows are grouped by [`RowKey`]. Keys present on both sides pair their
//! positions in order; every position left over, and every key seen on one
//! side only, lands in that side's remainder.

use crate::model::{Row, RowKey};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Rows of one side sharing a key.
#[derive(Debug, Clone)]
struct Group<'a> {
    repr: &'a Row,
    positions: Vec<usize>,
}

fn group(rows: &[Row], start_index: usize) -> IndexMap<RowKey, Group<'_>> {
    let mut groups: IndexMap<RowKey, Group<'_>> = IndexMap::new();
    for (i, row) in rows.iter().enumerate() {
        let pos = start_index + i;
        match groups.entry(RowKey::of(row)) {
            Entry::Occupied(mut e) => e.get_mut().positions.push(pos),
            Entry::Vacant(e) => {
                e.insert(Group {
                    repr: row,
                    positions: vec![pos],
                });
            }
        }
    }
    groups
}

/// Unmatched positions of one key on one side.
#[derive(Debug, Clone)]
pub struct RemainderEntry<'a> {
    pub key: RowKey,
    /// First occurrence of the key on this side
    pub repr: &'a Row,
    /// Unmatched positions, ascending
    pub positions: Vec<usize>,
}

/// An equal pair: positions on both sides plus the A-side representative.
#[derive(Debug, Clone, Copy)]
pub struct EqualPair<'a> {
    pub index_a: usize,
    pub index_b: usize,
    pub repr: &'a Row,
}

/// Output of the partition phase.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub equal: Vec<EqualPair<'a>>,
    pub remainder_a: Vec<RemainderEntry<'a>>,
    pub remainder_b: Vec<RemainderEntry<'a>>,
}

impl<'a> Partition<'a> {
    /// Partition `a` and `b`, numbering positions from `start_index`.
    pub fn build(a: &'a [Row], b: &'a [Row], start_index: usize) -> Self {
        let groups_a = group(a, start_index);
        let mut groups_b = group(b, start_index);

        let mut partition = Self::default();
        for (key, ga) in groups_a {
            let Some(gb) = groups_b.swap_remove(&key) else {
                partition.remainder_a.push(RemainderEntry {
                    key,
                    repr: ga.repr,
                    positions: ga.positions,
                });
                continue;
            };

            let common = ga.positions.len().min(gb.positions.len());
            partition.equal.extend(
                ga.positions
                    .iter()
                    .zip(&gb.positions)
                    .map(|(&index_a, &index_b)| EqualPair {
                        index_a,
                        index_b,
                        repr: ga.repr,
                    }),
            );

            if ga.positions.len() > common {
                partition.remainder_a.push(RemainderEntry {
                    key,
                    repr: ga.repr,
                    positions: ga.positions[common..].to_vec(),
                });
            } else if gb.positions.len() > common {
                partition.remainder_b.push(RemainderEntry {
                    key,
                    repr: gb.repr,
                    positions: gb.positions[common..].to_vec(),
                });
            }
        }

        partition
            .remainder_b
            .extend(groups_b.into_iter().map(|(key, gb)| RemainderEntry {
                key,
                repr: gb.repr,
                positions: gb.positions,
            }));

        partition.remainder_a.sort_by_key(|e| e.positions[0]);
        partition.remainder_b.sort_by_key(|e| e.positions[0]);
        partition
    }
}
