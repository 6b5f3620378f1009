//! Rows and row shapes.

use super::Value;
use serde::Serialize;
use std::fmt;

/// One row: a tuple row is a [`Value::List`], anything else is a scalar row.
pub type Row = Value;

/// Shape of the rows on one side of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowShape {
    /// Each row is a single scalar
    Scalar,
    /// Each row is an ordered list of fields
    Tuple,
}

impl RowShape {
    /// Shape of a single row.
    pub const fn of(row: &Row) -> Self {
        if row.is_list() {
            Self::Tuple
        } else {
            Self::Scalar
        }
    }

    /// Shape shared by all rows of a side.
    ///
    /// Returns `Ok(None)` for an empty side, and the zero-based position of
    /// the first row that disagrees with the first row's shape otherwise.
    pub fn of_side(rows: &[Row]) -> Result<Option<Self>, usize> {
        let Some(first) = rows.first() else {
            return Ok(None);
        };
        let shape = Self::of(first);
        match rows.iter().position(|row| Self::of(row) != shape) {
            Some(pos) => Err(pos),
            None => Ok(Some(shape)),
        }
    }
}

impl fmt::Display for RowShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Tuple => write!(f, "tuple"),
        }
    }
}
