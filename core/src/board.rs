use core::ops::{Index, Range};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hazard layout plus the precomputed adjacency count of every cell.
///
/// Immutable once built, so it can be shared freely between readers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    hazards: Array2<bool>,
    counts: Array2<u8>,
    hazard_count: CellCount,
}

impl Board {
    /// Random board for the clamped `(size, mines)` request.
    pub fn new(size: usize, mines: usize) -> Self {
        Self::random(GameConfig::new(size, mines))
    }

    pub fn random(config: GameConfig) -> Self {
        Self::generate(config, ShuffleGenerator::from_entropy())
    }

    pub fn generate(config: GameConfig, generator: impl HazardGenerator) -> Self {
        let board = Self::from_mask_unchecked(generator.generate(config));
        log::debug!(
            "Board {}x{} with {} hazards",
            board.size(),
            board.size(),
            board.hazard_count()
        );
        board
    }

    /// Builds a board from an explicit square hazard mask.
    pub fn from_mask(hazards: Array2<bool>) -> Result<Self> {
        let (rows, cols) = hazards.dim();
        if rows != cols {
            return Err(GameError::InvalidBoardShape);
        }
        if !(usize::from(MIN_SIDE)..=usize::from(MAX_SIDE)).contains(&rows) {
            return Err(GameError::InvalidSize);
        }
        let hazard_count = hazards.iter().filter(|&&hazard| hazard).count();
        if hazard_count >= hazards.len() {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::from_mask_unchecked(hazards))
    }

    /// Builds a `size`x`size` board with hazards on exactly `hazards`.
    pub fn from_hazards(size: Side, hazards: &[Coord]) -> Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&size) {
            return Err(GameError::InvalidSize);
        }
        let side = usize::from(size);
        let mut mask: Array2<bool> = Array2::default((side, side));
        for &coord in hazards {
            if coord >= area(size) {
                return Err(GameError::InvalidCoords);
            }
            mask[to_nd_index(coord, size)] = true;
        }
        Self::from_mask(mask)
    }

    fn from_mask_unchecked(hazards: Array2<bool>) -> Self {
        let size: Side = hazards.nrows().try_into().unwrap_or(MAX_SIDE);
        let hazard_count = hazards
            .iter()
            .filter(|&&hazard| hazard)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        let counts = Array2::from_shape_fn(hazards.dim(), |(row, col)| {
            let coord = join(row as Side, col as Side, size);
            NeighborIter::new(coord, size)
                .filter(|&pos| hazards[to_nd_index(pos, size)])
                .count() as u8
        });
        Self {
            hazards,
            counts,
            hazard_count,
        }
    }

    pub fn size(&self) -> Side {
        self.hazards.nrows() as Side
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.hazard_count)
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size())
    }

    pub fn hazard_count(&self) -> CellCount {
        self.hazard_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.hazard_count
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord < self.total_cells()
    }

    /// Panics if `coord` is off the board.
    pub fn is_hazard(&self, coord: Coord) -> bool {
        self[coord]
    }

    /// Hazards among the neighbors of `coord`. Defined for hazard cells too.
    pub fn adjacency_count(&self, coord: Coord) -> u8 {
        self.counts[to_nd_index(coord, self.size())]
    }

    /// Every coordinate in row-major order.
    pub fn all_coordinates(&self) -> Range<Coord> {
        0..self.total_cells()
    }

    pub fn hazards(&self) -> impl Iterator<Item = Coord> + '_ {
        self.all_coordinates().filter(|&coord| self[coord])
    }

    pub fn neighbors(&self, coord: Coord) -> NeighborIter {
        NeighborIter::new(coord, self.size())
    }
}

impl Index<Coord> for Board {
    type Output = bool;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.hazards[to_nd_index(coord, self.size())]
    }
}
