use crate::{
    cell::CellState,
    error::{GridError, ParseGridError},
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// Coordinates `(x, y)` of a cell in the grid.
///
/// `x` grows to the right and `y` grows downwards.
pub type Coord = (isize, isize);

/// A finite two-dimensional grid of cells.
///
/// A grid is a value: every generation is a new grid, and nothing in this crate
/// mutates a grid after it has been handed out. The builder methods
/// [`with_cell`](Grid::with_cell) and [`with_live_cells`](Grid::with_live_cells)
/// consume the grid and return the modified one.
///
/// Cells are stored in row-major order.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// The states of the cells, row by row.
    cells: Vec<CellState>,
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// Create a grid where every cell is dead.
    ///
    /// Zero-sized grids are allowed. Negative sizes, and sizes whose number of cells
    /// does not fit in memory, are rejected.
    pub fn new(width: isize, height: isize) -> Result<Self, GridError> {
        let area = Self::area(width, height)?;

        Ok(Self {
            width: width as usize,
            height: height as usize,
            cells: vec![CellState::Dead; area],
        })
    }

    /// The number of cells of a `width` by `height` grid.
    pub(crate) fn area(width: isize, height: isize) -> Result<usize, GridError> {
        if width < 0 || height < 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .filter(|&area| area <= isize::MAX as usize)
            .ok_or(GridError::InvalidDimension { width, height })
    }

    /// Create a grid from a list of live cells. All the other cells are dead.
    pub fn from_live_cells(
        width: isize,
        height: isize,
        cells: impl IntoIterator<Item = Coord>,
    ) -> Result<Self, GridError> {
        Self::new(width, height)?.with_live_cells(cells)
    }

    /// Wrap an already computed list of cells.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The index of a cell in `cells`.
    ///
    /// Return `None` if the cell is outside the grid.
    fn index_of(&self, coord: Coord) -> Option<usize> {
        let (x, y) = coord;

        if (0..self.width as isize).contains(&x) && (0..self.height as isize).contains(&y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    fn out_of_range(&self, coord: Coord) -> GridError {
        GridError::OutOfRangeCoordinate {
            x: coord.0,
            y: coord.1,
            width: self.width,
            height: self.height,
        }
    }

    /// Get the state of a cell.
    pub fn get(&self, coord: Coord) -> Result<CellState, GridError> {
        self.index_of(coord)
            .map(|index| self.cells[index])
            .ok_or_else(|| self.out_of_range(coord))
    }

    /// Whether a cell is alive.
    #[inline]
    pub fn is_alive(&self, coord: Coord) -> Result<bool, GridError> {
        self.get(coord).map(CellState::is_alive)
    }

    /// Get the state of a cell, treating cells outside the grid as dead.
    #[inline]
    pub(crate) fn state_at(&self, coord: Coord) -> CellState {
        self.index_of(coord)
            .map_or(CellState::Dead, |index| self.cells[index])
    }

    /// Get a row of cells.
    ///
    /// Return `None` if the row is outside the grid.
    pub fn row(&self, y: usize) -> Option<&[CellState]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Return the grid with one cell set to the given state.
    pub fn with_cell(mut self, coord: Coord, state: CellState) -> Result<Self, GridError> {
        let index = self.index_of(coord).ok_or_else(|| self.out_of_range(coord))?;
        self.cells[index] = state;
        Ok(self)
    }

    /// Return the grid with all the given cells set to alive.
    ///
    /// Fails on the first cell that is outside the grid.
    pub fn with_live_cells(mut self, cells: impl IntoIterator<Item = Coord>) -> Result<Self, GridError> {
        for coord in cells {
            self = self.with_cell(coord, CellState::Alive)?;
        }
        Ok(self)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// Coordinates of the living cells, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(|(index, _)| ((index % self.width) as isize, (index / self.width) as isize))
    }
}

/// Output the grid as a plaintext pattern.
///
/// - Dead cells are represented by `.`.
/// - Alive cells are represented by `o`.
/// - Each row is terminated by a newline.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for state in self.row(y).unwrap_or_default() {
                write!(f, "{}", state.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a plaintext pattern.
///
/// Rows are separated by newlines or `/`. Lines starting with `!` are comments.
/// `o`, `O`, `*` and `#` are alive; `.`, `b`, `_` and space are dead.
///
/// The width of the grid is the length of the longest row. Shorter rows are
/// padded with dead cells. Trailing empty rows are ignored.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();

        for (i, line) in s.split(['\n', '/']).enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if line.starts_with('!') {
                continue;
            }

            let row = line
                .chars()
                .enumerate()
                .map(|(j, glyph)| {
                    CellState::from_glyph(glyph).ok_or(ParseGridError::InvalidGlyph {
                        glyph,
                        line: i + 1,
                        column: j + 1,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            rows.push(row);
        }

        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, CellState::Dead);
            cells.extend(row);
        }

        Ok(Self::from_cells(width, height, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 0);
        assert!(!grid.is_empty());

        assert!(Grid::new(0, 3).unwrap().is_empty());
        assert!(Grid::new(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_new_invalid() {
        assert_eq!(
            Grid::new(-1, 3),
            Err(GridError::InvalidDimension {
                width: -1,
                height: 3
            })
        );
        assert!(Grid::new(3, -2).is_err());

        assert_eq!(
            Grid::new(isize::MAX, 2),
            Err(GridError::InvalidDimension {
                width: isize::MAX,
                height: 2
            })
        );
        assert!(Grid::from_live_cells(isize::MAX, isize::MAX, std::iter::empty()).is_err());
    }

    #[test]
    fn test_get_and_set() {
        let grid = Grid::new(4, 3)
            .unwrap()
            .with_cell((3, 2), CellState::Alive)
            .unwrap();

        assert_eq!(grid.get((3, 2)), Ok(CellState::Alive));
        assert_eq!(grid.get((2, 2)), Ok(CellState::Dead));
        assert_eq!(grid.is_alive((3, 2)), Ok(true));

        let grid = grid.with_cell((3, 2), CellState::Dead).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_out_of_range() {
        let grid = Grid::new(4, 3).unwrap();
        let error = GridError::OutOfRangeCoordinate {
            x: 4,
            y: 0,
            width: 4,
            height: 3,
        };

        assert_eq!(grid.get((4, 0)), Err(error));
        assert_eq!(grid.clone().with_cell((4, 0), CellState::Alive), Err(error));
        assert!(grid.get((-1, 0)).is_err());
        assert!(grid.get((0, 3)).is_err());
        assert!(Grid::from_live_cells(2, 2, [(0, 0), (2, 2)]).is_err());
    }

    #[test]
    fn test_live_cells() {
        let grid = Grid::from_live_cells(3, 3, [(2, 0), (0, 1), (1, 2)]).unwrap();
        assert_eq!(grid.population(), 3);
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(2, 0), (0, 1), (1, 2)]
        );
    }

    #[test]
    fn test_row() {
        let grid = Grid::from_live_cells(3, 2, [(1, 1)]).unwrap();
        assert_eq!(
            grid.row(1),
            Some(&[CellState::Dead, CellState::Alive, CellState::Dead][..])
        );
        assert_eq!(grid.row(2), None);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_live_cells(3, 2, [(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid.to_string(), "o..\n..o\n");
    }

    #[test]
    fn test_parse() {
        let grid: Grid = "!Glider\n.o.\n..o\nooo\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );

        let same: Grid = ".O./..#/***".parse().unwrap();
        assert_eq!(same, grid);

        let displayed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(displayed, grid);
    }

    #[test]
    fn test_parse_pads_rows() {
        let grid: Grid = "o\r\n\r\n..o".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn test_parse_invalid_glyph() {
        assert_eq!(
            "..o\n.x.".parse::<Grid>(),
            Err(ParseGridError::InvalidGlyph {
                glyph: 'x',
                line: 2,
                column: 2
            })
        );
    }
}
