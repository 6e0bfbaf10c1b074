use anyhow::Context;
use clap::Parser;
use crossterm::event;
use kaboom_core::{Board, Controller, GameConfig, Outcome};
use std::io::{self, Write};

use args::Args;
use input::Input;
use render::{Painter, outcome_message};
use terminal::RawMode;

mod args;
mod input;
mod render;
mod terminal;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let config = args.game_config();
    let game = Controller::new(Board::generate(config, args.generator()));

    let mut stdout = io::stdout();
    print_banner(&mut stdout, config)?;

    let outcome = {
        let _raw_mode = RawMode::enable().context("failed to enter raw mode")?;
        run(game, Painter::new(&mut stdout, args.renderer()))?
    };

    if let Some(message) = outcome_message(outcome) {
        writeln!(stdout, "{message}")?;
    }
    Ok(())
}

fn print_banner(out: &mut impl Write, config: GameConfig) -> io::Result<()> {
    writeln!(out, "\n\nWelcome to Kaboom!")?;
    writeln!(out, "Use the arrow keys to change the selected square.")?;
    writeln!(out, "Reveal locations by pressing `return`.")?;
    writeln!(out, "Flag locations by pressing `f`.")?;
    writeln!(out, "Have fun!")?;
    writeln!(out, "\n{0}x{0} with {1} mines.", config.size, config.mines)
}

/// Feeds key presses to the controller until the game ends or the player quits.
fn run(mut game: Controller, mut painter: Painter<impl Write>) -> anyhow::Result<Outcome> {
    painter.paint(&game.snapshot()).context("failed to draw board")?;

    loop {
        let event = event::read().context("failed to read terminal input")?;
        let command = match Input::from_event(&event) {
            Some(Input::Play(command)) => command,
            Some(Input::Quit) => {
                log::debug!("quit requested");
                return Ok(game.outcome());
            }
            None => continue,
        };

        let outcome = game.process(command);
        log::trace!("outcome: {:?}", outcome);

        let snapshot = game.snapshot();
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("snapshot: {}", serde_json::to_string(&snapshot)?);
        }
        painter.paint(&snapshot).context("failed to draw board")?;

        if snapshot.outcome.is_finished() {
            return Ok(snapshot.outcome);
        }
    }
}
