//! Cell coordinates on the grid.

use core::fmt;
use core::str::FromStr;

use crate::axis::{Column, Row};
use crate::common::LookupError;

/// A cell addressed by its column and row labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    column: Column,
    row: Row,
}

impl Coordinate {
    /// Create a coordinate from its labels.
    pub const fn new(column: Column, row: Row) -> Self {
        Self { column, row }
    }

    /// Create a coordinate from zero-based column and row ordinals.
    pub fn from_indices(column: usize, row: usize) -> Result<Self, LookupError> {
        Ok(Self {
            column: Column::from_index(column)?,
            row: Row::from_index(row)?,
        })
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn row(&self) -> Row {
        self.row
    }

    /// Zero-based `(column, row)` ordinals.
    pub fn indices(&self) -> (usize, usize) {
        (self.column.index(), self.row.index())
    }
}

impl From<(Column, Row)> for Coordinate {
    fn from((column, row): (Column, Row)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for Coordinate {
    /// Prints the row letter followed by the column number, e.g. `C7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row.label(), self.column.label())
    }
}

impl FromStr for Coordinate {
    type Err = LookupError;

    /// Parses `A1` through `J10`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() < 2 || !s.is_char_boundary(1) {
            return Err(LookupError::Coordinate);
        }
        let (row, column) = s.split_at(1);
        let row = Row::from_name(row).map_err(|_| LookupError::Coordinate)?;
        if !column.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupError::Coordinate);
        }
        let column = Column::from_name(column).map_err(|_| LookupError::Coordinate)?;
        Ok(Self::new(column, row))
    }
}
