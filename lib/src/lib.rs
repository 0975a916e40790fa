//! A library for simulating Conway's Game of Life on a finite grid.
//!
//! The core is [`step`], a pure function from one [`Grid`] to the next one.
//! Neighbors outside the grid are handled according to a [`Boundary`] policy.
//! [`Simulation`] drives the engine and detects when the pattern stabilizes.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod boundary;
mod cell;
mod config;
mod engine;
mod error;
mod grid;
mod rule;
mod simulation;

pub use boundary::Boundary;
pub use cell::CellState;
pub use config::{parse_coord, Config, DEFAULT_MAX_DENSITY, DEFAULT_MIN_DENSITY};
pub use engine::{live_neighbor_count, step};
pub use error::{ConfigError, GridError, ParseCoordError, ParseGridError};
pub use grid::{Coord, Grid};
pub use rule::{next_state, NEIGHBOR_OFFSETS};
pub use simulation::{Simulation, Status, DEFAULT_HISTORY_LIMIT};
