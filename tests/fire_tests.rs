use battlegrid::{
    Column, Coordinate, FireSelection, GameGrid, Orientation, Row, RuleViolation, ShipPlacement,
    ShotOutcome, CARRIER, DESTROYER, PATROL_BOAT, SUBMARINE,
};

fn at(column: usize, row: usize) -> Coordinate {
    Coordinate::from_indices(column, row).unwrap()
}

fn patrol_boat_grid() -> GameGrid {
    GameGrid::new()
        .place_ship(ShipPlacement::new(
            PATROL_BOAT,
            Orientation::Horizontal,
            Coordinate::new(Column::One, Row::A),
        ))
        .unwrap()
}

#[test]
fn test_miss_marks_only_that_cell() {
    let grid = patrol_boat_grid();
    let target = at(5, 5);
    let next = grid.fire(target).unwrap();
    assert!(next.is_selected(target));
    assert_eq!(next.selected_cells().collect::<Vec<_>>(), vec![target]);
    assert!(!grid.is_selected(target));
}

#[test]
fn test_duplicate_fire_fails_for_hits_and_misses() {
    let grid = patrol_boat_grid();
    let miss = at(7, 7);
    let hit = at(0, 0);
    let grid = grid.fire(miss).unwrap().fire(hit).unwrap();
    assert_eq!(grid.fire(miss), Err(RuleViolation::DuplicateFireSelection));
    assert_eq!(grid.fire(hit), Err(RuleViolation::DuplicateFireSelection));
}

#[test]
fn test_fire_on_empty_grid() {
    let grid = GameGrid::new().fire(at(0, 0)).unwrap();
    assert_eq!(grid.selected_count(), 1);
    assert_eq!(grid.ship_count(), 0);
}

#[test]
fn test_partial_damage_then_sunk() {
    let grid = patrol_boat_grid().fire(at(0, 0)).unwrap();
    let ship = grid.all_ships().next().unwrap();
    assert_eq!(ship.damage(), vec![Coordinate::new(Column::One, Row::A)]);
    assert!(!ship.is_sunk());
    assert!(!grid.is_all_ships_sunk());

    let grid = grid.fire(at(1, 0)).unwrap();
    let ship = grid.all_ships().next().unwrap();
    assert_eq!(ship.damage(), vec![at(0, 0), at(1, 0)]);
    assert!(ship.is_sunk());
    assert!(grid.is_all_ships_sunk());
}

#[test]
fn test_sunk_uses_full_span_away_from_origin() {
    // Firing only at the low ordinals must not sink a ship placed further out.
    let grid = GameGrid::new()
        .place_ship(ShipPlacement::new(SUBMARINE, Orientation::Vertical, at(6, 4)))
        .unwrap()
        .fire(at(6, 4))
        .unwrap()
        .fire(at(6, 5))
        .unwrap();
    let ship = grid.all_ships().next().unwrap();
    assert!(!ship.is_sunk());
    assert_eq!(ship.damage(), vec![at(6, 4), at(6, 5)]);

    let grid = grid.fire(at(6, 6)).unwrap();
    assert!(grid.all_ships().next().unwrap().is_sunk());
}

#[test]
fn test_damage_is_in_occupancy_order() {
    let grid = GameGrid::new()
        .place_ship(ShipPlacement::new(CARRIER, Orientation::Horizontal, at(3, 8)))
        .unwrap()
        .fire(at(7, 8))
        .unwrap()
        .fire(at(4, 8))
        .unwrap()
        .fire(at(5, 9))
        .unwrap();
    let ship = grid.all_ships().next().unwrap();
    assert_eq!(ship.damage(), vec![at(4, 8), at(7, 8)]);
}

#[test]
fn test_all_ships_sunk_is_vacuous_on_empty_grid() {
    let grid = GameGrid::new();
    assert!(grid.is_all_ships_sunk());
    assert_eq!(grid.ship_count(), 0);
}

#[test]
fn test_all_ships_sunk_needs_every_ship() {
    let grid = patrol_boat_grid()
        .place_ship(ShipPlacement::new(DESTROYER, Orientation::Vertical, at(9, 0)))
        .unwrap()
        .fire(at(0, 0))
        .unwrap()
        .fire(at(1, 0))
        .unwrap();
    assert!(!grid.is_all_ships_sunk());
    let sunk: Vec<bool> = grid.all_ships().map(|s| s.is_sunk()).collect();
    assert_eq!(sunk, vec![true, false]);

    let grid = grid
        .fire(at(9, 0))
        .and_then(|g| g.fire(at(9, 1)))
        .and_then(|g| g.fire(at(9, 2)))
        .unwrap();
    assert!(grid.is_all_ships_sunk());
}

#[test]
fn test_fire_and_report_outcomes() {
    let grid = patrol_boat_grid();
    let (grid, outcome) = grid.fire_and_report(at(4, 4)).unwrap();
    assert_eq!(outcome, ShotOutcome::Miss);
    let (grid, outcome) = grid.fire_and_report(at(1, 0)).unwrap();
    assert_eq!(outcome, ShotOutcome::Hit(PATROL_BOAT));
    let (grid, outcome) = grid.fire_and_report(at(0, 0)).unwrap();
    assert_eq!(outcome, ShotOutcome::Sunk(PATROL_BOAT));
    assert_eq!(outcome.ship_class(), Some(PATROL_BOAT));
    assert_eq!(
        grid.fire_and_report(at(0, 0)).unwrap_err(),
        RuleViolation::DuplicateFireSelection
    );
}

#[test]
fn test_fire_selections_report_hits() {
    let grid = patrol_boat_grid()
        .fire(at(2, 3))
        .unwrap()
        .fire(at(1, 0))
        .unwrap();
    assert_eq!(
        grid.fire_selections(),
        vec![
            FireSelection {
                coordinate: at(1, 0),
                hit: true
            },
            FireSelection {
                coordinate: at(2, 3),
                hit: false
            },
        ]
    );
}

#[test]
fn test_ship_at() {
    let grid = patrol_boat_grid();
    assert_eq!(grid.ship_at(at(1, 0)).unwrap().ship_class(), PATROL_BOAT);
    assert!(grid.ship_at(at(2, 0)).is_none());
}

#[test]
fn test_earlier_snapshots_are_unaffected() {
    let g0 = patrol_boat_grid();
    let g1 = g0.fire(at(0, 0)).unwrap();
    let g2 = g1.fire(at(1, 0)).unwrap();

    assert_eq!(g0.selected_count(), 0);
    assert_eq!(g1.selected_count(), 1);
    assert!(!g1.all_ships().next().unwrap().is_sunk());
    assert!(g2.all_ships().next().unwrap().is_sunk());

    // A branch from an old snapshot is independent of the main line.
    let branch = g1.fire(at(9, 9)).unwrap();
    assert!(!branch.is_selected(at(1, 0)));
    assert!(!g2.is_selected(at(9, 9)));
}

#[test]
fn test_corner_cells_select_independently() {
    let corners = [at(0, 0), at(9, 0), at(0, 9), at(9, 9)];
    let grid = corners
        .iter()
        .try_fold(GameGrid::new(), |grid, &cell| grid.fire(cell))
        .unwrap();

    assert_eq!(grid.selected_count(), 4);
    assert_eq!(grid.selected_cells().collect::<Vec<_>>(), corners.to_vec());
    for cell in corners {
        assert!(grid.is_selected(cell));
    }
    assert!(!grid.is_selected(at(1, 0)));
    assert!(!grid.is_selected(at(0, 1)));
    assert_eq!(grid.fire(at(9, 9)), Err(RuleViolation::DuplicateFireSelection));
}
