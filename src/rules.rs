//! Placement and firing rules.
//!
//! Every check is a pure function over the placement or shot and a snapshot
//! of the grid's current state. Checks return the first violation found and
//! never modify anything. Placement checks run in a fixed order: duplicate,
//! then bounds, then overlap.

use crate::common::RuleViolation;
use crate::config::GRID_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, ShipPlacement};

/// Validate `placement` against the placements already on the grid.
pub fn validate_placement(
    placement: &ShipPlacement,
    current: &[ShipPlacement],
) -> Result<(), RuleViolation> {
    check_unique(placement, current)?;
    check_in_grid(placement)?;
    check_no_overlap(placement, current)
}

/// Validate a shot at `coord` against the cells already fired upon.
pub fn validate_fire<I>(coord: &Coordinate, selected: I) -> Result<(), RuleViolation>
where
    I: IntoIterator<Item = Coordinate>,
{
    if selected.into_iter().any(|c| c == *coord) {
        return Err(RuleViolation::DuplicateFireSelection);
    }
    Ok(())
}

pub fn check_unique(
    placement: &ShipPlacement,
    current: &[ShipPlacement],
) -> Result<(), RuleViolation> {
    if current.contains(placement) {
        return Err(RuleViolation::DuplicatePlacement);
    }
    Ok(())
}

/// The ship must end on or before the last label of the axis it extends on.
pub fn check_in_grid(placement: &ShipPlacement) -> Result<(), RuleViolation> {
    if GRID_SIZE - placement.start_index() < placement.ship_class().size() {
        return Err(RuleViolation::PlacementOutOfGrid);
    }
    Ok(())
}

pub fn check_no_overlap(
    placement: &ShipPlacement,
    current: &[ShipPlacement],
) -> Result<(), RuleViolation> {
    if current.iter().any(|existing| overlaps(placement, existing)) {
        return Err(RuleViolation::ShipOverlap);
    }
    Ok(())
}

/// Returns `true` if the two placements share at least one cell.
pub fn overlaps(a: &ShipPlacement, b: &ShipPlacement) -> bool {
    if a.top_left() == b.top_left() {
        return true;
    }
    if a.orientation() == b.orientation() {
        // Parallel ships can only meet on a shared row (or column).
        a.fixed_index() == b.fixed_index()
            && a.start_index() <= b.end_index()
            && b.start_index() <= a.end_index()
    } else {
        let (horizontal, vertical) = match a.orientation() {
            Orientation::Horizontal => (a, b),
            Orientation::Vertical => (b, a),
        };
        let column = vertical.fixed_index();
        let row = horizontal.fixed_index();
        (horizontal.start_index()..=horizontal.end_index()).contains(&column)
            && (vertical.start_index()..=vertical.end_index()).contains(&row)
    }
}
