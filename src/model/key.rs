//! Structural row keys.
//!
//! A [`RowKey`] is the deep hash of a row: the fingerprint used for multiset
//! membership and for similarity scoring. It is never shown to users.

use super::Value;
use crate::utils::{hash_atom, hash_char, hash_int};
use std::fmt;

/// One element of a row key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyElem {
    /// Hash of an atomic value
    Atom(u64),
    /// Key of a nested list, structure preserved
    Nested(RowKey),
}

/// Structural fingerprint of a row.
///
/// Keys are totally ordered and hashable. Two rows with equal keys are
/// treated as the same row by the diff engine.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(Vec<KeyElem>);

impl RowKey {
    /// Compute the key of a row.
    ///
    /// - list rows get one element per field, nested lists become nested keys;
    /// - text rows get one atom per character;
    /// - bytes rows get one integer atom per byte;
    /// - every other scalar gets a single atom.
    pub fn of(row: &Value) -> Self {
        match row {
            Value::List(items) => Self(items.iter().map(Self::field).collect()),
            Value::Text(s) => Self(s.chars().map(|c| KeyElem::Atom(hash_char(c))).collect()),
            Value::Bytes(b) => Self(
                b.iter()
                    .map(|byte| KeyElem::Atom(hash_int(i64::from(*byte))))
                    .collect(),
            ),
            other => Self(vec![KeyElem::Atom(hash_atom(other))]),
        }
    }

    fn field(value: &Value) -> KeyElem {
        if value.is_list() {
            KeyElem::Nested(Self::of(value))
        } else {
            KeyElem::Atom(hash_atom(value))
        }
    }

    /// Build a key directly from elements.
    pub fn from_elems(elems: Vec<KeyElem>) -> Self {
        Self(elems)
    }

    /// Key elements, in row order.
    pub fn elems(&self) -> &[KeyElem] {
        &self.0
    }

    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowKey")?;
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Depth-first list of atomic leaves.
///
/// A scalar flattens to itself; text is a leaf and is not split.
pub fn flatten(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_into(value, &mut out);
    out
}

fn flatten_into(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(other.clone()),
    }
}
