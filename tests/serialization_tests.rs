#![cfg(feature = "std")]

use battlegrid::{
    Column, Coordinate, Orientation, Row, ShipClass, ShipPlacement, ShotOutcome, DESTROYER,
    SUBMARINE,
};

#[test]
fn ship_class_serializes_by_name() {
    assert_eq!(serde_json::to_string(&SUBMARINE).unwrap(), "\"submarine\"");
    let class: ShipClass = serde_json::from_str("\"destroyer\"").unwrap();
    assert_eq!(class, DESTROYER);
    assert!(serde_json::from_str::<ShipClass>("\"frigate\"").is_err());
}

#[test]
fn placement_json_shape() {
    let placement = ShipPlacement::new(
        SUBMARINE,
        Orientation::Vertical,
        Coordinate::new(Column::Four, Row::B),
    );
    let value = serde_json::to_value(placement).unwrap();
    assert_eq!(value["ship_class"], "submarine");
    assert_eq!(value["orientation"], "Vertical");
    assert_eq!(value["top_left"]["column"], "Four");
    assert_eq!(value["top_left"]["row"], "B");

    let back: ShipPlacement = serde_json::from_value(value).unwrap();
    assert_eq!(back, placement);
}

#[test]
fn shot_outcome_carries_class_name() {
    let value = serde_json::to_value(ShotOutcome::Sunk(DESTROYER)).unwrap();
    assert_eq!(value["Sunk"], "destroyer");
}

#[test]
fn custom_class_serializes_but_does_not_come_back() {
    let custom = ShipClass::new("frigate", 3);
    let json = serde_json::to_string(&custom).unwrap();
    assert_eq!(json, "\"frigate\"");
    assert!(serde_json::from_str::<ShipClass>(&json).is_err());
}
