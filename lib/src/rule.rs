//! Conway's Game of Life (B3/S23) is the only supported rule.
//!
//! A cell has 8 neighbors in its Moore neighborhood.
//! - A dead cell comes to life if it has exactly 3 living neighbors.
//! - A living cell stays alive if it has 2 or 3 living neighbors.

use crate::{cell::CellState, grid::Coord};

/// The offsets of the 8 neighbors in the Moore neighborhood.
pub const NEIGHBOR_OFFSETS: [Coord; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The state of a cell in the next generation, given its current state and
/// the number of its living neighbors.
#[inline]
pub const fn next_state(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2 | 3) | (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
