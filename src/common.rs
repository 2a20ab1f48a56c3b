//! Common types for the grid engine: rule violations, lookup errors and shot
//! results.

use core::fmt;

use crate::coordinate::Coordinate;
use crate::ship::ShipClass;

/// Result of firing at a cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship occupies the cell.
    Miss,
    /// The shot hit a ship that still has unselected cells.
    Hit(ShipClass),
    /// The shot selected the last remaining cell of a ship.
    Sunk(ShipClass),
}

impl ShotOutcome {
    /// Class of the ship that was struck, if any.
    pub fn ship_class(&self) -> Option<ShipClass> {
        match self {
            ShotOutcome::Miss => None,
            ShotOutcome::Hit(class) | ShotOutcome::Sunk(class) => Some(*class),
        }
    }

    /// Returns `true` for hits and sinks.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// A selected cell together with whether a ship occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireSelection {
    pub coordinate: Coordinate,
    pub hit: bool,
}

/// Game rule broken by a placement or a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    /// Same class, orientation and top-left as an existing placement.
    DuplicatePlacement,
    /// The ship would extend past the edge of the grid.
    PlacementOutOfGrid,
    /// The ship would share a cell with an existing ship.
    ShipOverlap,
    /// The cell has already been fired upon.
    DuplicateFireSelection,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::DuplicatePlacement => write!(f, "Duplicate placement detected"),
            RuleViolation::PlacementOutOfGrid => write!(f, "Ship placement is outside the grid"),
            RuleViolation::ShipOverlap => write!(f, "Ship placement overlaps another ship"),
            RuleViolation::DuplicateFireSelection => {
                write!(f, "Cell has already been fired upon")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RuleViolation {}

/// Errors returned by the label and catalog lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupError {
    /// No column has this ordinal.
    ColumnIndex(usize),
    /// No row has this ordinal.
    RowIndex(usize),
    /// Text did not name a column.
    ColumnName,
    /// Text did not name a row.
    RowName,
    /// Text did not name a ship class in the catalog.
    ShipClassName,
    /// Text was not a cell such as `B7`.
    Coordinate,
    /// Text was not an orientation.
    Orientation,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::ColumnIndex(i) => write!(f, "No column with index {}", i),
            LookupError::RowIndex(i) => write!(f, "No row with index {}", i),
            LookupError::ColumnName => write!(f, "Unknown column name"),
            LookupError::RowName => write!(f, "Unknown row name"),
            LookupError::ShipClassName => write!(f, "Ship class not found in catalog"),
            LookupError::Coordinate => write!(f, "Expected a cell such as A1 or J10"),
            LookupError::Orientation => {
                write!(f, "Expected an orientation (horizontal or vertical)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LookupError {}
