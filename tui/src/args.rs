use clap::{error::ErrorKind, CommandFactory, Parser};
use conway_lib::Config;

/// Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub config: Config,

    /// Maximal number of generations per second.
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Whether to disable the TUI interface.
    ///
    /// If the TUI interface is disabled, the program will print every generation to stdout.
    ///
    /// WARNING: without `--max-generations` or `--stop-when-stable`, the program never stops.
    #[arg(long)]
    pub no_tui: bool,

    /// Whether to stop when the pattern dies out, becomes a still life, or oscillates.
    #[arg(long)]
    pub stop_when_stable: bool,
}

impl Args {
    /// Parse and validate the command line arguments.
    pub fn parse_and_validate() -> Self {
        let args = Self::parse();

        if args.fps == 0 {
            Self::command()
                .error(ErrorKind::ValueValidation, "fps must be > 0")
                .exit();
        }

        match args.config.check() {
            Ok(config) => Self { config, ..args },
            Err(e) => Self::command().error(ErrorKind::ValueValidation, e).exit(),
        }
    }
}
