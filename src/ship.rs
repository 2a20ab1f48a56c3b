//! Ship classes, placements and the read-only ship view over a grid.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::axis::{Column, Row};
use crate::common::LookupError;
use crate::coordinate::Coordinate;
use crate::grid::GameGrid;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends rightward from the top-left cell.
    Horizontal,
    /// Extends downward from the top-left cell.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

impl FromStr for Orientation {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("v") || s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(LookupError::Orientation)
        }
    }
}

/// Type of ship: name and hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipClass {
    name: &'static str,
    size: usize,
}

impl ShipClass {
    /// Create a new ship class. Panics if `size` is 0.
    ///
    /// Classes outside [`SHIP_CLASSES`](crate::SHIP_CLASSES) serialize by name
    /// but do not deserialize, since names are resolved against the catalog.
    pub const fn new(name: &'static str, size: usize) -> Self {
        assert!(size > 0, "ship classes must occupy at least one cell");
        Self { name, size }
    }

    /// Class name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of cells the class occupies.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

impl FromStr for ShipClass {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::config::ship_class_named(s)
    }
}

// Ship classes travel by name and come back through the catalog.
#[cfg(feature = "std")]
impl serde::Serialize for ShipClass {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

#[cfg(feature = "std")]
impl<'de> serde::Deserialize<'de> for ShipClass {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = std::string::String::deserialize(deserializer)?;
        crate::config::ship_class_named(&name).map_err(serde::de::Error::custom)
    }
}

/// A ship class positioned on the grid by orientation and top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    ship_class: ShipClass,
    orientation: Orientation,
    top_left: Coordinate,
}

impl ShipPlacement {
    pub const fn new(ship_class: ShipClass, orientation: Orientation, top_left: Coordinate) -> Self {
        Self {
            ship_class,
            orientation,
            top_left,
        }
    }

    pub fn ship_class(&self) -> ShipClass {
        self.ship_class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn top_left(&self) -> Coordinate {
        self.top_left
    }

    /// Ordinal of the first occupied cell along the axis the ship extends on.
    pub fn start_index(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.top_left.column().index(),
            Orientation::Vertical => self.top_left.row().index(),
        }
    }

    /// Ordinal of the last occupied cell along the axis the ship extends on.
    /// May lie past the grid for placements that have not been validated.
    pub fn end_index(&self) -> usize {
        self.start_index() + self.ship_class.size() - 1
    }

    /// Ordinal of the axis the ship does not extend on: its row when
    /// horizontal, its column when vertical.
    pub fn fixed_index(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.top_left.row().index(),
            Orientation::Vertical => self.top_left.column().index(),
        }
    }

    /// Cell `offset` steps from the top-left in the ship's direction, if it
    /// is on the grid.
    fn cell_at(&self, offset: usize) -> Option<Coordinate> {
        let (column, row) = self.top_left.indices();
        match self.orientation {
            Orientation::Horizontal => Column::from_index(column + offset)
                .ok()
                .map(|c| Coordinate::new(c, self.top_left.row())),
            Orientation::Vertical => Row::from_index(row + offset)
                .ok()
                .map(|r| Coordinate::new(self.top_left.column(), r)),
        }
    }

    /// Occupied cells in order: left to right when horizontal, top to bottom
    /// when vertical. Stops at the grid edge.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let placement = *self;
        (0..placement.ship_class.size()).map_while(move |i| placement.cell_at(i))
    }

    /// Returns `true` if the placement occupies `coord`.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        let (column, row) = coord.indices();
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (column, row),
            Orientation::Vertical => (row, column),
        };
        across == self.fixed_index() && (self.start_index()..=self.end_index()).contains(&along)
    }
}

impl fmt::Display for ShipPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}",
            self.ship_class, self.orientation, self.top_left
        )
    }
}

/// Read-only view of a placed ship, computed against the grid it was read
/// from.
#[derive(Clone, Copy)]
pub struct Ship<'g> {
    placement: &'g ShipPlacement,
    grid: &'g GameGrid,
}

impl<'g> Ship<'g> {
    pub(crate) fn new(placement: &'g ShipPlacement, grid: &'g GameGrid) -> Self {
        Self { placement, grid }
    }

    pub fn placement(&self) -> &'g ShipPlacement {
        self.placement
    }

    pub fn ship_class(&self) -> ShipClass {
        self.placement.ship_class()
    }

    pub fn orientation(&self) -> Orientation {
        self.placement.orientation()
    }

    pub fn top_left(&self) -> Coordinate {
        self.placement.top_left()
    }

    /// Occupied cells in occupancy order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.placement.cells()
    }

    /// Check if every occupied cell has been selected.
    pub fn is_sunk(&self) -> bool {
        self.cells().all(|c| self.grid.is_selected(c))
    }

    /// Selected occupied cells, in occupancy order.
    pub fn damage(&self) -> Vec<Coordinate> {
        self.cells().filter(|c| self.grid.is_selected(*c)).collect()
    }
}

impl fmt::Debug for Ship<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ class: \"{}\", top_left: {}, orientation: {:?}, damage: {}, sunk: {} }}",
            self.ship_class().name(),
            self.top_left(),
            self.orientation(),
            self.damage().len(),
            self.is_sunk(),
        )
    }
}
