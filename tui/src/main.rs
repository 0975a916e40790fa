mod app;
mod args;
mod event;
mod tui;
mod ui;

use crate::{app::summary, args::Args, tui::Tui};
use color_eyre::Result;
use conway_lib::{Simulation, Status};
use crossterm::tty::IsTty;
use std::io::stdout;

/// Run the program without the TUI interface.
fn run_no_tui(args: Args) -> Result<()> {
    let mut simulation = Simulation::from_config(&args.config)?;
    let max_generations = args.config.max_generations;

    loop {
        println!("{}", summary(&simulation));

        if max_generations.is_some_and(|max| simulation.generation() >= max)
            || args.stop_when_stable && simulation.status() != Status::Running
        {
            break;
        }

        simulation.step();
    }

    log::info!(
        "Stopped at generation {} with status {:?}.",
        simulation.generation(),
        simulation.status()
    );

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse_and_validate();

    let stdout = stdout();

    if args.no_tui || !stdout.is_tty() {
        run_no_tui(args)?;
    } else {
        let mut tui = Tui::new(args)?;
        tui.run()?;
    }

    Ok(())
}
