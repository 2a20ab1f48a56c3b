//! The game grid: placed ships plus the cells that have been fired upon.
//!
//! A [`GameGrid`] is an immutable snapshot. [`GameGrid::place_ship`] and
//! [`GameGrid::fire`] validate against the receiver and return a new grid;
//! the receiver stays valid and unchanged, so callers can keep earlier
//! snapshots around for undo or replay.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{FireSelection, RuleViolation, ShotOutcome};
use crate::config::{GRID_SIZE, SHIP_CLASSES};
use crate::coordinate::Coordinate;
use crate::rules;
use crate::ship::{Orientation, Ship, ShipClass, ShipPlacement};

type Cells = BitBoard<u128, GRID_SIZE>;

/// How many random positions to try per ship before giving up.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Immutable grid state: the selection flag of every cell and the placements
/// made so far, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameGrid {
    selected: Cells,
    placements: Vec<ShipPlacement>,
}

impl GameGrid {
    /// Create an empty grid: no ships, no selected cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a ship, returning the resulting grid.
    pub fn place_ship(&self, placement: ShipPlacement) -> Result<GameGrid, RuleViolation> {
        if let Err(violation) = rules::validate_placement(&placement, &self.placements) {
            log::debug!("rejected placement {}: {}", placement, violation);
            return Err(violation);
        }
        log::trace!("placed {}", placement);
        let mut placements = Vec::with_capacity(self.placements.len() + 1);
        placements.extend_from_slice(&self.placements);
        placements.push(placement);
        Ok(GameGrid {
            selected: self.selected,
            placements,
        })
    }

    /// Place several ships in order. Each placement is validated against the
    /// grid produced by the ones before it; the first violation is returned.
    pub fn place_all<I>(&self, placements: I) -> Result<GameGrid, RuleViolation>
    where
        I: IntoIterator<Item = ShipPlacement>,
    {
        placements
            .into_iter()
            .try_fold(self.clone(), |grid, placement| grid.place_ship(placement))
    }

    /// Fire at a cell, returning the resulting grid. Missing every ship is
    /// legal; firing twice at the same cell is not.
    pub fn fire(&self, coordinate: Coordinate) -> Result<GameGrid, RuleViolation> {
        if let Err(violation) = rules::validate_fire(&coordinate, self.selected_cells()) {
            log::debug!("rejected shot at {}: {}", coordinate, violation);
            return Err(violation);
        }
        log::trace!("fired at {}", coordinate);
        let (column, row) = coordinate.indices();
        Ok(GameGrid {
            selected: self.selected.with(row, column),
            placements: self.placements.clone(),
        })
    }

    /// Fire at a cell and report what the shot did to the ship there.
    pub fn fire_and_report(
        &self,
        coordinate: Coordinate,
    ) -> Result<(GameGrid, ShotOutcome), RuleViolation> {
        let next = self.fire(coordinate)?;
        let outcome = match next.ship_at(coordinate) {
            None => ShotOutcome::Miss,
            Some(ship) if ship.is_sunk() => ShotOutcome::Sunk(ship.ship_class()),
            Some(ship) => ShotOutcome::Hit(ship.ship_class()),
        };
        log::debug!("shot at {}: {:?}", coordinate, outcome);
        Ok((next, outcome))
    }

    /// Views of every placed ship, in placement order.
    pub fn all_ships(&self) -> impl Iterator<Item = Ship<'_>> + '_ {
        self.placements.iter().map(move |p| Ship::new(p, self))
    }

    /// Returns `true` when every placed ship is sunk. This is also `true` for
    /// a grid with no ships, so a win check must look at
    /// [`ship_count`](Self::ship_count) as well.
    pub fn is_all_ships_sunk(&self) -> bool {
        self.all_ships().all(|ship| ship.is_sunk())
    }

    /// The ship occupying `coordinate`, if any.
    pub fn ship_at(&self, coordinate: Coordinate) -> Option<Ship<'_>> {
        self.placements
            .iter()
            .find(|p| p.occupies(coordinate))
            .map(|p| Ship::new(p, self))
    }

    pub fn placements(&self) -> &[ShipPlacement] {
        &self.placements
    }

    pub fn ship_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if the cell has been fired upon.
    pub fn is_selected(&self, coordinate: Coordinate) -> bool {
        let (column, row) = coordinate.indices();
        self.selected.contains(row, column)
    }

    /// Every cell fired upon so far, row by row from the top-left.
    pub fn selected_cells(&self) -> impl Iterator<Item = Coordinate> {
        self.selected
            .iter_set_bits()
            .filter_map(|(row, column)| Coordinate::from_indices(column, row).ok())
    }

    pub fn selected_count(&self) -> usize {
        self.selected.count_ones()
    }

    /// Every cell fired upon so far, with whether a ship occupies it.
    pub fn fire_selections(&self) -> Vec<FireSelection> {
        self.selected_cells()
            .map(|coordinate| FireSelection {
                coordinate,
                hit: self.ship_at(coordinate).is_some(),
            })
            .collect()
    }

    /// Pick a random placement for `ship_class` that this grid would accept.
    /// Returns `None` if no acceptable position turns up within a bounded
    /// number of attempts.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_class: ShipClass,
    ) -> Option<ShipPlacement> {
        let size = ship_class.size();
        if size > GRID_SIZE {
            return None;
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_column, max_row) = match orientation {
                Orientation::Horizontal => (GRID_SIZE - size, GRID_SIZE - 1),
                Orientation::Vertical => (GRID_SIZE - 1, GRID_SIZE - size),
            };
            let column = rng.random_range(0..=max_column);
            let row = rng.random_range(0..=max_row);
            let top_left = Coordinate::from_indices(column, row).ok()?;
            let candidate = ShipPlacement::new(ship_class, orientation, top_left);
            if rules::validate_placement(&candidate, &self.placements).is_ok() {
                return Some(candidate);
            }
        }
        log::debug!("no room found for {}", ship_class);
        None
    }

    /// Place one ship of every catalog class at random positions.
    pub fn with_random_fleet<R: Rng>(&self, rng: &mut R) -> Option<GameGrid> {
        let mut grid = self.clone();
        for ship_class in SHIP_CLASSES {
            let placement = grid.random_placement(rng, ship_class)?;
            grid = grid.place_ship(placement).ok()?;
        }
        Some(grid)
    }
}
