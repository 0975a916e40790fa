use crate::{args::Args, event::TermEvent};
use color_eyre::Result;
use conway_lib::{Config, Simulation, Status};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Application modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The simulation is running.
    Running,
    /// The simulation is not started yet, or paused by the user.
    #[default]
    Paused,
    /// Ask the user to confirm the quit.
    Quit,
    /// Display the usage.
    Usage,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The driver of the automaton.
    pub simulation: Simulation,
    /// The configuration, kept to rebuild the initial grid on reset.
    pub config: Config,
    /// Current mode of the application.
    pub mode: Mode,
    /// Minimal time between two generations.
    pub tick: Duration,
    /// Time of the last generation.
    pub last_step: Instant,
    /// Whether to pause when the pattern stabilizes.
    pub stop_when_stable: bool,
    /// Whether the application should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new [`App`] from the command line arguments.
    pub fn new(args: Args) -> Result<Self> {
        let simulation = Simulation::from_config(&args.config)?;
        let config = args.config;
        let mode = Mode::Paused;
        let tick = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
        let last_step = Instant::now();
        let stop_when_stable = args.stop_when_stable;
        let should_quit = false;

        Ok(Self {
            simulation,
            config,
            mode,
            tick,
            last_step,
            stop_when_stable,
            should_quit,
        })
    }

    /// Whether the generation limit has been reached.
    pub fn reached_limit(&self) -> bool {
        self.config
            .max_generations
            .is_some_and(|max| self.simulation.generation() >= max)
    }

    /// Whether the simulation may advance.
    fn can_advance(&self) -> bool {
        !self.reached_limit()
            && !(self.stop_when_stable && self.simulation.status() != Status::Running)
    }

    /// Start or resume the simulation.
    fn start(&mut self) {
        if self.mode == Mode::Paused && self.can_advance() {
            self.last_step = Instant::now();
            self.mode = Mode::Running;
        }
    }

    /// Pause the simulation.
    fn pause(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Paused;
        }
    }

    /// Restart from the initial grid.
    ///
    /// A random soup is regenerated with a fresh seed.
    fn reset(&mut self) -> Result<()> {
        let grid = if self.config.is_random() {
            Config {
                seed: None,
                ..self.config.clone()
            }
            .initial_grid()?
        } else {
            self.config.initial_grid()?
        };
        self.simulation.reset(grid);
        Ok(())
    }

    /// Time left before the next generation is due.
    pub fn until_next_step(&self) -> Duration {
        self.tick.saturating_sub(self.last_step.elapsed())
    }

    /// Advance one generation, if allowed.
    ///
    /// Pause when the generation limit is reached, or when the pattern stabilizes
    /// and `stop_when_stable` is set.
    pub fn step(&mut self) {
        if self.can_advance() {
            self.simulation.step();
            self.last_step = Instant::now();
        }

        if !self.can_advance() {
            log::info!(
                "Stopped at generation {} with status {:?}.",
                self.simulation.generation(),
                self.simulation.status()
            );
            self.pause();
        }
    }

    /// Print the current generation in plaintext.
    ///
    /// This function is called when exiting the application.
    pub fn print_grid(&self) {
        print!("{}", summary(&self.simulation));
    }

    /// Update the application state according to the given event.
    pub fn update(&mut self, event: TermEvent) -> Result<()> {
        let TermEvent::KeyPress(key) = event else {
            return Ok(());
        };

        match self.mode {
            Mode::Running => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.pause();
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.pause();
                }
                KeyCode::Char('r' | 'R') => {
                    self.reset()?;
                }
                KeyCode::Char('h' | 'H') => {
                    self.pause();
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Paused => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.start();
                }
                KeyCode::Char('n' | 'N' | '.') => {
                    self.step();
                }
                KeyCode::Char('r' | 'R') => {
                    self.reset()?;
                }
                KeyCode::Char('h' | 'H') => {
                    self.mode = Mode::Usage;
                }
                _ => {}
            },
            Mode::Quit => match key {
                KeyCode::Char('y' | 'Y') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n' | 'N') => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
            Mode::Usage => match key {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.mode = Mode::Quit;
                }
                KeyCode::Char('h' | 'H' | ' ') | KeyCode::Enter => {
                    self.mode = Mode::Paused;
                }
                _ => {}
            },
        }

        Ok(())
    }
}

/// A header line followed by the current generation in plaintext.
pub fn summary(simulation: &Simulation) -> String {
    format!(
        "Generation: {}, population: {}\n{}",
        simulation.generation(),
        simulation.population(),
        simulation.grid()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway_lib::Boundary;

    fn app(config: Config) -> App {
        let args = Args {
            config,
            fps: 60,
            no_tui: false,
            stop_when_stable: false,
        };
        App::new(args).unwrap()
    }

    fn blinker() -> Config {
        Config::new(5, 5).with_live_cells([(1, 2), (2, 2), (3, 2)])
    }

    fn press(app: &mut App, c: char) {
        app.update(TermEvent::KeyPress(KeyCode::Char(c))).unwrap();
    }

    #[test]
    fn test_new() {
        let app = app(blinker());
        assert_eq!(app.mode, Mode::Paused);
        assert_eq!(app.simulation.generation(), 0);
        assert_eq!(app.simulation.population(), 3);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_start_and_pause() {
        let mut app = app(blinker());
        press(&mut app, ' ');
        assert_eq!(app.mode, Mode::Running);
        press(&mut app, ' ');
        assert_eq!(app.mode, Mode::Paused);
    }

    #[test]
    fn test_manual_step() {
        let mut app = app(blinker());
        press(&mut app, 'n');
        assert_eq!(app.simulation.generation(), 1);
        assert_eq!(
            app.simulation.grid().live_cells().collect::<Vec<_>>(),
            vec![(2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_max_generations() {
        let mut app = app(blinker().with_max_generations(2));
        press(&mut app, ' ');
        app.step();
        app.step();
        assert_eq!(app.simulation.generation(), 2);
        assert_eq!(app.mode, Mode::Paused);

        // The limit is reached, so neither starting nor stepping does anything.
        press(&mut app, ' ');
        assert_eq!(app.mode, Mode::Paused);
        press(&mut app, 'n');
        assert_eq!(app.simulation.generation(), 2);
    }

    #[test]
    fn test_stop_when_stable() {
        let mut app = app(blinker());
        app.stop_when_stable = true;
        press(&mut app, ' ');
        app.step();
        assert_eq!(app.mode, Mode::Running);
        app.step();
        assert_eq!(
            app.simulation.status(),
            Status::Oscillating { period: 2 }
        );
        assert_eq!(app.mode, Mode::Paused);
    }

    #[test]
    fn test_reset() {
        let mut app = app(blinker().with_boundary(Boundary::Toroidal));
        press(&mut app, 'n');
        press(&mut app, 'r');
        assert_eq!(app.simulation.generation(), 0);
        assert_eq!(app.simulation.grid(), &blinker().initial_grid().unwrap());
    }

    #[test]
    fn test_reset_random_soup() {
        let mut app = app(Config::new(12, 8).with_seed(3));
        press(&mut app, 'n');
        press(&mut app, 'n');
        press(&mut app, 'r');
        assert_eq!(app.simulation.generation(), 0);
        assert_eq!(app.simulation.status(), Status::Running);
        assert_eq!(app.simulation.grid().width(), 12);
        assert_eq!(app.simulation.grid().height(), 8);
        assert!(app.config.is_random());
    }

    #[test]
    fn test_quit() {
        let mut app = app(blinker());
        press(&mut app, 'q');
        assert_eq!(app.mode, Mode::Quit);
        press(&mut app, 'n');
        assert_eq!(app.mode, Mode::Paused);
        assert!(!app.should_quit);

        press(&mut app, 'q');
        press(&mut app, 'y');
        assert!(app.should_quit);
    }

    #[test]
    fn test_usage() {
        let mut app = app(blinker());
        press(&mut app, ' ');
        press(&mut app, 'h');
        assert_eq!(app.mode, Mode::Usage);
        press(&mut app, 'h');
        assert_eq!(app.mode, Mode::Paused);
    }

    #[test]
    fn test_summary() {
        let app = app(blinker());
        assert_eq!(
            summary(&app.simulation),
            "Generation: 0, population: 3\n.....\n.....\n.ooo.\n.....\n.....\n"
        );
    }
}
