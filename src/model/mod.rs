//! Row model shared by every stage.
//!
//! Rows are [`Value`]s: a list value is a tuple row, anything else is a
//! scalar row. [`RowKey`] is the structural fingerprint the diff engine
//! groups and scores rows by.
//!
//! ```
//! use rowdiff::model::{flatten, RowKey, Value};
//!
//! let row = Value::list(["a", "b"]);
//! assert_eq!(RowKey::of(&row).len(), 2);
//! assert_eq!(flatten(&row), vec![Value::from("a"), Value::from("b")]);
//! ```

mod key;
mod row;
mod selector;
pub(crate) mod value;

pub use key::{flatten, KeyElem, RowKey};
pub use row::{Row, RowShape};
pub use selector::ColumnSelector;
pub use value::Value;
