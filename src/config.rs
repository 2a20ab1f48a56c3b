use crate::common::LookupError;
use crate::ship::ShipClass;

/// Number of labels on each axis.
pub const GRID_SIZE: usize = 10;
pub const NUM_SHIP_CLASSES: usize = 5;

pub const CARRIER: ShipClass = ShipClass::new("carrier", 5);
pub const BATTLESHIP: ShipClass = ShipClass::new("battleship", 4);
pub const DESTROYER: ShipClass = ShipClass::new("destroyer", 3);
pub const SUBMARINE: ShipClass = ShipClass::new("submarine", 3);
pub const PATROL_BOAT: ShipClass = ShipClass::new("patrol boat", 2);

/// The standard fleet, largest first.
pub const SHIP_CLASSES: [ShipClass; NUM_SHIP_CLASSES] =
    [CARRIER, BATTLESHIP, DESTROYER, SUBMARINE, PATROL_BOAT];

/// Total number of cells covered by one of each ship class.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// The canonical ship classes in catalog order.
pub fn all_ship_classes() -> &'static [ShipClass; NUM_SHIP_CLASSES] {
    &SHIP_CLASSES
}

/// Look up a ship class by name. Matching ignores ASCII case and treats `-`
/// and `_` as spaces, so `"Patrol-Boat"` finds the patrol boat.
pub fn ship_class_named(name: &str) -> Result<ShipClass, LookupError> {
    let name = name.trim();
    SHIP_CLASSES
        .iter()
        .copied()
        .find(|class| name_matches(class.name(), name))
        .ok_or(LookupError::ShipClassName)
}

fn name_matches(canonical: &str, candidate: &str) -> bool {
    let normalize = |b: u8| match b {
        b'-' | b'_' => b' ',
        other => other.to_ascii_lowercase(),
    };
    canonical.len() == candidate.len()
        && canonical
            .bytes()
            .zip(candidate.bytes())
            .all(|(a, b)| normalize(a) == normalize(b))
}
