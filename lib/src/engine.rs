use crate::{
    boundary::Boundary,
    error::GridError,
    grid::{Coord, Grid},
    rule::{next_state, NEIGHBOR_OFFSETS},
};

/// Compute the next generation of a grid.
///
/// Every cell of the new grid is computed from the cells of `grid` only,
/// so the update is simultaneous. The input is left untouched.
///
/// An empty grid is returned unchanged.
///
/// # Example
///
/// ```
/// use conway_lib::{step, Boundary, Grid};
///
/// let blinker = Grid::from_live_cells(5, 5, [(1, 2), (2, 2), (3, 2)])?;
/// let next = step(&blinker, Boundary::DeadBorder);
/// assert_eq!(next.live_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
/// assert_eq!(step(&next, Boundary::DeadBorder), blinker);
/// # Ok::<(), conway_lib::GridError>(())
/// ```
pub fn step(grid: &Grid, boundary: Boundary) -> Grid {
    if grid.is_empty() {
        return grid.clone();
    }

    let (w, h) = (grid.width() as isize, grid.height() as isize);
    let mut cells = Vec::with_capacity(grid.width() * grid.height());

    for y in 0..h {
        for x in 0..w {
            let neighbors = count_neighbors(grid, (x, y), boundary);
            cells.push(next_state(grid.state_at((x, y)), neighbors));
        }
    }

    Grid::from_cells(grid.width(), grid.height(), cells)
}

/// Count the living cells in the Moore neighborhood of `(x, y)`.
///
/// The result is in `0..=8`. Fails if `(x, y)` is outside the grid.
pub fn live_neighbor_count(
    grid: &Grid,
    x: isize,
    y: isize,
    boundary: Boundary,
) -> Result<u8, GridError> {
    grid.get((x, y))?;
    Ok(count_neighbors(grid, (x, y), boundary))
}

/// Count living neighbors of a cell that is known to be inside the grid.
///
/// A neighbor clipped out by the boundary contributes nothing.
fn count_neighbors(grid: &Grid, coord: Coord, boundary: Boundary) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&offset| boundary.resolve(coord, offset, grid.width(), grid.height()))
        .filter(|&neighbor| grid.state_at(neighbor).is_alive())
        .count() as u8
}
