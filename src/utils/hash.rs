//! Content hashing utilities.
//!
//! Atom hashes feed [`RowKey`](crate::model::RowKey). Every atom is hashed
//! over a type-tagged byte encoding so that, for example, the text `"1"` and
//! the integer `1` never share a hash.

use crate::model::Value;
use crate::model::value::Numeric;
use xxhash_rust::xxh3::xxh3_64;

const TAG_NULL: u8 = 0;
const TAG_INT: u8 = 1;
const TAG_FLOAT: u8 = 2;
const TAG_TEXT: u8 = 3;
const TAG_BYTES: u8 = 4;
const TAG_LIST: u8 = 5;

/// Compute a content hash for arbitrary bytes
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

fn tagged_hash(tag: u8, payload: &[u8]) -> u64 {
    let mut buf = Vec::with_capacity(payload.len() + 1);
    buf.push(tag);
    buf.extend_from_slice(payload);
    content_hash(&buf)
}

/// Hash an integer atom.
pub fn hash_int(value: i64) -> u64 {
    tagged_hash(TAG_INT, &value.to_le_bytes())
}

/// Hash a text atom.
pub fn hash_text(value: &str) -> u64 {
    tagged_hash(TAG_TEXT, value.as_bytes())
}

/// Hash a single character as a one-character text atom.
pub fn hash_char(c: char) -> u64 {
    let mut buf = [0u8; 4];
    hash_text(c.encode_utf8(&mut buf))
}

/// Hash any value as a single atom.
///
/// Numeric values are normalized first: `Bool`, `Int` and integral `Float`
/// all hash as the same integer. Lists hash over their children's atom
/// hashes; row keys never call this for list fields.
pub fn hash_atom(value: &Value) -> u64 {
    if let Some(num) = value.numeric() {
        return match num {
            Numeric::Int(i) => hash_int(i),
            Numeric::Float(f) => tagged_hash(TAG_FLOAT, &f.to_bits().to_le_bytes()),
        };
    }
    match value {
        Value::Text(s) => hash_text(s),
        Value::Bytes(b) => tagged_hash(TAG_BYTES, b),
        Value::List(items) => {
            let payload: Vec<u8> = items
                .iter()
                .flat_map(|item| hash_atom(item).to_le_bytes())
                .collect();
            tagged_hash(TAG_LIST, &payload)
        }
        _ => tagged_hash(TAG_NULL, &[]),
    }
}
