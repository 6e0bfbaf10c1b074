//! Board model and reveal engine for a terminal mine-clearing puzzle.
//!
//! [`Board`] owns hazard placement and adjacency counts and never changes
//! after construction. [`Controller`] owns the cursor and what the player
//! sees, and turns [`Command`]s into board queries and display updates.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use controller::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod controller;
mod error;
mod generator;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Side,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Side = 8;

    pub const fn new_unchecked(size: Side, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps the requested values into a playable configuration.
    ///
    /// `size` lands in `[1, 100]` and `mines` in `[1, size² - 1]`. On a 1x1
    /// board the upper bound wins and the board has no hazards.
    pub fn new(size: usize, mines: usize) -> Self {
        let size = size.clamp(MIN_SIDE.into(), MAX_SIDE.into());
        let max_mines = size * size - 1;
        let mines = mines.max(1).min(max_mines);
        // both values were just bounded by MAX_SIDE
        Self::new_unchecked(size as Side, mines as CellCount)
    }

    /// Clamps `size` and uses it as the hazard count as well.
    pub fn with_default_mines(size: usize) -> Self {
        let size = size.clamp(MIN_SIDE.into(), MAX_SIDE.into());
        Self::new(size, size)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_default_mines(Self::DEFAULT_SIZE.into())
    }
}
