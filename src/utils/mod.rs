//! Shared utility functions.

mod encoding;
mod hash;

pub use encoding::lookup_encoding;
pub use hash::{content_hash, hash_atom, hash_char, hash_int, hash_text};
