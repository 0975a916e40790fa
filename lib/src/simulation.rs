use crate::{boundary::Boundary, config::Config, engine, error::ConfigError, grid::Grid};
use std::collections::VecDeque;

/// Default number of past generations kept to detect oscillators.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Status of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No repetition has been found yet.
    Running,
    /// Every cell is dead.
    Extinct,
    /// The current generation is equal to the previous one.
    StillLife,
    /// The current generation is equal to the one `period` generations ago.
    Oscillating {
        /// The number of generations between two occurrences of the same grid.
        period: u64,
    },
}

/// A driver that repeatedly applies [`step`](crate::step) to a grid.
///
/// The engine itself keeps no state. This struct holds the current generation,
/// counts generations, and remembers a bounded number of past generations to
/// detect when the pattern has stabilized.
///
/// # Example
///
/// ```
/// use conway_lib::{Boundary, Grid, Simulation, Status};
///
/// let blinker = Grid::from_live_cells(5, 5, [(1, 2), (2, 2), (3, 2)])?;
/// let mut simulation = Simulation::new(blinker, Boundary::DeadBorder);
/// assert_eq!(simulation.run(Some(10)), Status::Oscillating { period: 2 });
/// assert_eq!(simulation.generation(), 2);
/// # Ok::<(), conway_lib::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The current generation.
    grid: Grid,

    /// How neighbors outside the grid are treated.
    boundary: Boundary,

    /// Number of steps since the initial grid.
    generation: u64,

    /// Past generations, the most recent first.
    history: VecDeque<Grid>,

    /// Maximal length of `history`.
    ///
    /// Oscillators whose period is longer than this are not detected.
    history_limit: usize,

    /// Current status.
    status: Status,
}

impl Simulation {
    /// Create a new simulation starting from the given grid.
    pub fn new(grid: Grid, boundary: Boundary) -> Self {
        let mut simulation = Self {
            grid,
            boundary,
            generation: 0,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            status: Status::Running,
        };
        simulation.status = simulation.detect_status();
        simulation
    }

    /// Create a new simulation from a configuration.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let grid = config.initial_grid()?;
        Ok(Self::new(grid, config.boundary))
    }

    /// Set the number of past generations kept to detect oscillators.
    ///
    /// See [`DEFAULT_HISTORY_LIMIT`] for the default value.
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self.history.truncate(history_limit);
        self
    }

    /// Restart the simulation from a new grid.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
        self.history.clear();
        self.status = self.detect_status();
    }

    /// Get the current generation.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the boundary policy.
    #[inline]
    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Number of steps since the initial grid.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells in the current generation.
    #[inline]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Get the status.
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Advance one generation.
    ///
    /// Stepping is still allowed after the pattern has stabilized.
    pub fn step(&mut self) -> Status {
        let next = engine::step(&self.grid, self.boundary);
        let previous = std::mem::replace(&mut self.grid, next);

        if self.history_limit > 0 {
            self.history.push_front(previous);
            self.history.truncate(self.history_limit);
        }

        self.generation += 1;

        let status = self.detect_status();
        if self.status == Status::Running && status != Status::Running {
            log::debug!(
                "Simulation stabilized at generation {}: {:?}",
                self.generation,
                status
            );
        }
        self.status = status;

        status
    }

    /// Advance until the pattern stabilizes, or `max_steps` steps have been made.
    ///
    /// With `None`, a pattern that never repeats within the history runs forever.
    pub fn run(&mut self, max_steps: Option<u64>) -> Status {
        let mut steps = 0;

        while self.status == Status::Running && max_steps.map_or(true, |max| steps < max) {
            self.step();
            steps += 1;
        }

        self.status
    }

    /// Compare the current generation with the history.
    fn detect_status(&self) -> Status {
        if self.grid.population() == 0 {
            return Status::Extinct;
        }

        match self.history.iter().position(|grid| *grid == self.grid) {
            Some(0) => Status::StillLife,
            Some(i) => Status::Oscillating {
                period: i as u64 + 1,
            },
            None => Status::Running,
        }
    }
}
