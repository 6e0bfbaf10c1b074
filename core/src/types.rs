use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub type Side = u8;

/// Row-major linear index of a cell, `0 <= coord < size * size`.
pub type Coord = u16;

/// Count type used for hazard counts and total-cell counts.
pub type CellCount = u16;

pub const MIN_SIDE: Side = 1;
pub const MAX_SIDE: Side = 100;

pub const fn area(size: Side) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Splits a linear coordinate into `(row, column)`.
pub const fn row_col(coord: Coord, size: Side) -> (Side, Side) {
    let size = size as Coord;
    ((coord / size) as Side, (coord % size) as Side)
}

pub const fn join(row: Side, col: Side, size: Side) -> Coord {
    row as Coord * size as Coord + col as Coord
}

pub fn to_nd_index(coord: Coord, size: Side) -> [usize; 2] {
    let (row, col) = row_col(coord, size);
    [row.into(), col.into()]
}

/// Cursor movement direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, column)` displacement.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Moves `coord` one step, or `None` when that would leave the board.
    pub fn step(self, coord: Coord, size: Side) -> Option<Coord> {
        let (row, col) = row_col(coord, size);
        let (next_row, next_col) = apply_delta((row, col), self.delta(), size)?;
        Some(join(next_row, next_col, size))
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `(row, col)`, returning a value only when it remains on the board.
fn apply_delta((row, col): (Side, Side), (dr, dc): (isize, isize), size: Side) -> Option<(Side, Side)> {
    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up to eight cells surrounding a coordinate, without wrapping
/// across rows or past the board edges.
#[derive(Debug)]
pub struct NeighborIter {
    center: (Side, Side),
    size: Side,
    index: u8,
}

impl NeighborIter {
    pub fn new(coord: Coord, size: Side) -> Self {
        Self {
            center: row_col(coord, size),
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.size);
            self.index += 1;

            if let Some((row, col)) = next_item {
                return Some(join(row, col, self.size));
            }
        }
    }
}
