use crate::{
    boundary::Boundary,
    error::{ConfigError, GridError, ParseCoordError},
    grid::{Coord, Grid},
};
#[cfg(feature = "clap")]
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Default lower bound of the percentage of living cells in a random soup.
pub const DEFAULT_MIN_DENSITY: u8 = 5;

/// Default upper bound of the percentage of living cells in a random soup.
pub const DEFAULT_MAX_DENSITY: u8 = 20;

/// Parse a coordinate of the form `X,Y`.
///
/// Whitespace around the numbers is ignored.
pub fn parse_coord(s: &str) -> Result<Coord, ParseCoordError> {
    let error = || ParseCoordError(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(error)?;
    let x = x.trim().parse().map_err(|_| error())?;
    let y = y.trim().parse().map_err(|_| error())?;
    Ok((x, y))
}

/// The configuration of a simulation.
///
/// The initial grid is built from, in this order:
///
/// - the [`pattern`](Config::pattern), centered in the grid,
/// - the [`initial_live_cells`](Config::initial_live_cells).
///
/// If neither is given, the initial grid is a random soup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
pub struct Config {
    /// Width of the grid.
    pub width: u32,

    /// Height of the grid.
    pub height: u32,

    /// How neighbors outside the grid are treated.
    #[cfg_attr(
        feature = "clap",
        arg(short, long, value_enum, default_value = "dead-border")
    )]
    pub boundary: Boundary,

    /// A cell that is alive in the initial grid, given as `X,Y`.
    ///
    /// Can be repeated.
    #[cfg_attr(
        feature = "clap",
        arg(short = 'c', long = "cell", value_parser = parse_coord, allow_negative_numbers = true)
    )]
    pub initial_live_cells: Vec<Coord>,

    /// A plaintext pattern placed at the center of the initial grid.
    ///
    /// Rows are separated by newlines or `/`.
    /// `o`, `O`, `*` and `#` are alive; `.`, `b`, `_` and space are dead.
    ///
    /// For example, a glider is `.o./..o/ooo`.
    #[cfg_attr(feature = "clap", arg(short, long))]
    pub pattern: Option<String>,

    /// Lower bound of the percentage of living cells in a random soup.
    #[cfg_attr(feature = "clap", arg(long, default_value = "5"))]
    pub min_density: u8,

    /// Upper bound of the percentage of living cells in a random soup.
    #[cfg_attr(feature = "clap", arg(long, default_value = "20"))]
    pub max_density: u8,

    /// Random seed for the random soup.
    ///
    /// If this is [`None`], then the seed is randomly generated.
    #[cfg_attr(feature = "clap", arg(long))]
    pub seed: Option<u64>,

    /// Stop after this many generations.
    ///
    /// If this is [`None`], then the simulation runs until it is interrupted.
    #[cfg_attr(feature = "clap", arg(short = 'g', long))]
    pub max_generations: Option<u64>,
}

impl Config {
    /// Create a new configuration with a random soup on a dead-border grid.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            boundary: Boundary::DeadBorder,
            initial_live_cells: Vec::new(),
            pattern: None,
            min_density: DEFAULT_MIN_DENSITY,
            max_density: DEFAULT_MAX_DENSITY,
            seed: None,
            max_generations: None,
        }
    }

    /// Set the boundary policy.
    ///
    /// See [`boundary`](Config::boundary) for more details.
    #[inline]
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Add living cells to the initial grid.
    ///
    /// See [`initial_live_cells`](Config::initial_live_cells) for more details.
    #[inline]
    pub fn with_live_cells(mut self, cells: impl IntoIterator<Item = Coord>) -> Self {
        self.initial_live_cells.extend(cells);
        self
    }

    /// Set the pattern.
    ///
    /// See [`pattern`](Config::pattern) for more details.
    #[inline]
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.to_string());
        self
    }

    /// Set the bounds of the percentage of living cells in a random soup.
    ///
    /// See [`min_density`](Config::min_density) and [`max_density`](Config::max_density)
    /// for more details.
    #[inline]
    pub const fn with_density(mut self, min_density: u8, max_density: u8) -> Self {
        self.min_density = min_density;
        self.max_density = max_density;
        self
    }

    /// Set the random seed.
    ///
    /// See [`seed`](Config::seed) for more details.
    #[inline]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximal number of generations.
    ///
    /// See [`max_generations`](Config::max_generations) for more details.
    #[inline]
    pub const fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = Some(max_generations);
        self
    }

    /// Whether the initial grid is a random soup.
    #[inline]
    pub const fn is_random(&self) -> bool {
        self.pattern.is_none() && self.initial_live_cells.is_empty()
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        self.placed_cells()?;
        Ok(self)
    }

    /// Validate the configuration and collect the cells given by the pattern
    /// and the live cell list.
    fn placed_cells(&self) -> Result<Vec<Coord>, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize);
        }

        if self.min_density > self.max_density || self.max_density > 100 {
            return Err(ConfigError::InvalidDensity);
        }

        let (w, h) = (self.width as isize, self.height as isize);
        Grid::area(w, h)?;
        let mut cells = Vec::new();

        if let Some(pattern) = &self.pattern {
            let pattern: Grid = pattern.parse()?;
            let (pw, ph) = (pattern.width() as isize, pattern.height() as isize);

            if pw > w || ph > h {
                return Err(ConfigError::PatternTooLarge);
            }

            let (ox, oy) = ((w - pw) / 2, (h - ph) / 2);
            cells.extend(pattern.live_cells().map(|(x, y)| (x + ox, y + oy)));
        }

        for &(x, y) in &self.initial_live_cells {
            if !(0..w).contains(&x) || !(0..h).contains(&y) {
                return Err(ConfigError::Grid(GridError::OutOfRangeCoordinate {
                    x,
                    y,
                    width: self.width as usize,
                    height: self.height as usize,
                }));
            }
            cells.push((x, y));
        }

        Ok(cells)
    }

    /// Build the initial grid.
    ///
    /// If the initial grid is a random soup and no [`seed`](Config::seed) is given,
    /// a new seed is drawn on every call.
    pub fn initial_grid(&self) -> Result<Grid, ConfigError> {
        let cells = self.placed_cells()?;
        let grid = Grid::new(self.width as isize, self.height as isize)?;

        if self.is_random() {
            let seed = self.seed.unwrap_or_else(rand::random);
            self.random_soup(grid, seed)
        } else {
            Ok(grid.with_live_cells(cells)?)
        }
    }

    /// Fill a dead grid with a random soup.
    ///
    /// The number of living cells is chosen uniformly between the minimum and maximum
    /// densities. Each of them is then put at a random position. Two of them may land on
    /// the same position, so the final population can be slightly smaller.
    fn random_soup(&self, grid: Grid, seed: u64) -> Result<Grid, ConfigError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let area = grid.width() as u64 * grid.height() as u64;
        let min = area * self.min_density as u64 / 100;
        let max = area * self.max_density as u64 / 100;
        let count = rng.gen_range(min..=max);

        log::info!("Generating a random soup with {count} living cells (seed {seed}).");

        let (w, h) = (grid.width() as isize, grid.height() as isize);
        let cells: Vec<Coord> = (0..count)
            .map(|_| (rng.gen_range(0..w), rng.gen_range(0..h)))
            .collect();

        Ok(grid.with_live_cells(cells)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(64, 36)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("3,4"), Ok((3, 4)));
        assert_eq!(parse_coord(" 10 , 0 "), Ok((10, 0)));
        assert_eq!(parse_coord("-1,2"), Ok((-1, 2)));
        assert_eq!(
            parse_coord("3;4"),
            Err(ParseCoordError("3;4".to_string()))
        );
        assert!(parse_coord("3,").is_err());
        assert!(parse_coord("a,b").is_err());
    }

    #[test]
    fn test_check() {
        assert!(Config::new(10, 10).check().is_ok());
        assert_eq!(Config::new(0, 10).check(), Err(ConfigError::InvalidSize));
        assert_eq!(Config::new(10, 0).check(), Err(ConfigError::InvalidSize));
        assert_eq!(
            Config::new(10, 10).with_density(30, 20).check(),
            Err(ConfigError::InvalidDensity)
        );
        assert_eq!(
            Config::new(10, 10).with_density(30, 101).check(),
            Err(ConfigError::InvalidDensity)
        );
        assert_eq!(
            Config::new(4, 4).with_live_cells([(4, 0)]).check(),
            Err(ConfigError::Grid(GridError::OutOfRangeCoordinate {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            }))
        );
        assert_eq!(
            Config::new(2, 2).with_pattern("ooo").check(),
            Err(ConfigError::PatternTooLarge)
        );
        assert!(matches!(
            Config::new(4, 4).with_pattern("o?o").check(),
            Err(ConfigError::Pattern(_))
        ));
    }

    #[test]
    fn test_check_too_large() {
        let config = Config::new(u32::MAX, u32::MAX).with_live_cells([(0, 0)]);
        assert_eq!(
            config.clone().check(),
            Err(ConfigError::Grid(GridError::InvalidDimension {
                width: u32::MAX as isize,
                height: u32::MAX as isize
            }))
        );
        assert!(config.initial_grid().is_err());
    }

    #[test]
    fn test_initial_grid_from_cells() {
        let config = Config::new(5, 5).with_live_cells([(1, 2), (2, 2), (3, 2)]);
        assert!(!config.is_random());

        let grid = config.initial_grid().unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(1, 2), (2, 2), (3, 2)]
        );
    }

    #[test]
    fn test_initial_grid_from_pattern() {
        let config = Config::new(7, 7)
            .with_pattern(".o./..o/ooo")
            .with_live_cells([(0, 0)]);

        let grid = config.initial_grid().unwrap();
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            vec![(0, 0), (3, 2), (4, 3), (2, 4), (3, 4), (4, 4)]
        );
    }

    #[test]
    fn test_random_soup() {
        let config = Config::new(20, 10).with_density(10, 30).with_seed(7);
        assert!(config.is_random());

        let grid = config.initial_grid().unwrap();
        assert_eq!(grid, config.initial_grid().unwrap());
        assert!(grid.population() <= 60);
        assert!(grid.population() > 0);

        let other = config.clone().with_seed(8).initial_grid().unwrap();
        assert_ne!(grid, other);
    }

    #[test]
    fn test_random_soup_density_bounds() {
        let empty = Config::new(8, 8).with_density(0, 0).with_seed(1);
        assert_eq!(empty.initial_grid().unwrap().population(), 0);

        let full = Config::new(3, 3).with_density(100, 100).with_seed(1);
        let grid = full.initial_grid().unwrap();
        assert!(grid.population() > 0);
        assert!(grid.population() <= 9);
    }
}
