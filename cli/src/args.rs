use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use kaboom_core::{GameConfig, ShuffleGenerator};

use crate::render::{Glyphs, Renderer};

const DEFAULT_SIZE: usize = GameConfig::DEFAULT_SIZE as usize;

/// Clear the board without stepping on a mine.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// The size of your board
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// The number of mines to place [default: the board size]
    #[arg(short, long)]
    pub mines: Option<usize>,

    /// Draw cells without a space between them
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Use plain ASCII glyphs instead of emoji
    #[arg(long, default_value_t = false)]
    pub ascii: bool,

    /// Seed for mine placement, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

impl Args {
    /// Resolves the requested size and mine count into a playable config.
    pub fn game_config(&self) -> GameConfig {
        let config = match self.mines {
            Some(mines) => GameConfig::new(self.size, mines),
            None => GameConfig::with_default_mines(self.size),
        };

        let size_changed = usize::from(config.size) != self.size;
        let mines_changed = self.mines.is_some_and(|mines| mines != usize::from(config.mines));
        if size_changed || mines_changed {
            log::debug!(
                "requested size {} with {:?} mines, using {}x{} with {}",
                self.size,
                self.mines,
                config.size,
                config.size,
                config.mines
            );
        }
        config
    }

    pub fn generator(&self) -> ShuffleGenerator {
        self.seed
            .map_or_else(ShuffleGenerator::from_entropy, ShuffleGenerator::new)
    }

    pub fn renderer(&self) -> Renderer {
        let glyphs = if self.ascii { Glyphs::Ascii } else { Glyphs::Emoji };
        Renderer::new(glyphs, self.compact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kaboom").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_eight_by_eight() {
        let args = parse(&[]);
        assert_eq!(args.game_config(), GameConfig::new_unchecked(8, 8));
        assert!(!args.compact);
        assert!(!args.ascii);
    }

    #[test]
    fn mines_default_to_size() {
        assert_eq!(parse(&["-s", "12"]).game_config(), GameConfig::new_unchecked(12, 12));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(
            parse(&["--size", "400", "--mines", "0"]).game_config(),
            GameConfig::new_unchecked(100, 1)
        );
        assert_eq!(
            parse(&["-s", "3", "-m", "50"]).game_config(),
            GameConfig::new_unchecked(3, 8)
        );
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        assert!(Args::try_parse_from(["kaboom", "--size", "big"]).is_err());
    }

    #[test]
    fn seed_fixes_the_generator() {
        assert_eq!(parse(&["--seed", "17"]).generator(), ShuffleGenerator::new(17));
    }
}
