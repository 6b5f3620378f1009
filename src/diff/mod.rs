//! Row diff engine.
//!
//! A diff runs in three phases:
//!
//! 1. **Partition**: rows are grouped by [`RowKey`](crate::model::RowKey);
//!    keys present on both sides become `equal` records, everything else is
//!    left in per-side remainders.
//! 2. **Matching**: each A remainder is greedily paired with its most similar
//!    B remainder. Pairs at or above the similarity threshold become
//!    `replace` records, the rest `delete` and `insert`.
//! 3. **Ordering**: records are sorted by index and a header is synthesized
//!    on request.
//!
//! # Example
//!
//! ```
//! use rowdiff::diff::{differ, DiffOptions, DiffTag};
//! use rowdiff::model::Value;
//!
//! let a = vec![Value::list(["a", "b", "c"])];
//! let b = vec![Value::list(["a", "c", "c"])];
//! let result = differ(&a, &b, &DiffOptions::default()).unwrap();
//! assert_eq!(result.records[0].tag, DiffTag::Replace);
//! assert_eq!(result.records[0].fields[1], Value::from("b ---> c"));
//! ```

mod engine;
mod engine_config;
mod engine_matching;
mod partition;
mod result;
mod sanitize;

pub use engine::{differ, DiffEngine};
pub use engine_config::{DiffOptions, ReplaceFormat, DEFAULT_SIMILARITY_THRESHOLD};
pub use result::{DiffRecord, DiffResult, DiffSummary, DiffTag};
pub use sanitize::sanitize;
