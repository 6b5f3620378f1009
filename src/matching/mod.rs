//! Row similarity scoring.
//!
//! [`similarity`] ranks replace candidates during fuzzy pairing; the
//! [`SimilarityCache`] memoizes it across diff calls made by one engine.
//!
//! ```
//! use rowdiff::matching::{similarity, SimilarityCache};
//! use rowdiff::model::{RowKey, Value};
//!
//! let a = RowKey::of(&Value::from("abc"));
//! let b = RowKey::of(&Value::from("acc"));
//! let mut cache = SimilarityCache::new(16);
//! assert_eq!(cache.similarity(&a, &b), similarity(&a, &b));
//! ```

mod cache;
mod similarity;

pub use cache::{CacheStats, SimilarityCache, DEFAULT_CACHE_CAPACITY};
pub use similarity::{edit_distance, similarity};
