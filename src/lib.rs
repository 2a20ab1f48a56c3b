#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod bitboard;
mod common;
mod config;
mod coordinate;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod rules;
mod ship;

pub use axis::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use ship::*;
