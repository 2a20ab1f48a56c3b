//! Commonly used types and utilities for ease of import.

pub use crate::{
    Column, Coordinate, GameGrid, Orientation, Row, RuleViolation, Ship, ShipClass,
    ShipPlacement, ShotOutcome, SHIP_CLASSES,
};
