use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single decoded input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    ToggleFlag,
    Reveal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitHazard,
    Won,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Move(MoveOutcome),
    Mark(MarkOutcome),
    Reveal(RevealOutcome),
}

impl EventOutcome {
    /// Whether the event could have changed what the player sees.
    pub const fn has_update(self) -> bool {
        !matches!(
            self,
            Self::Move(MoveOutcome::NoChange)
                | Self::Mark(MarkOutcome::NoChange)
                | Self::Reveal(RevealOutcome::NoChange)
        )
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Side,
    /// Row-major display state of every cell.
    pub cells: Vec<DisplayCell>,
    pub cursor: Option<Coord>,
    pub outcome: Outcome,
}

impl Snapshot {
    pub fn cell(&self, coord: Coord) -> DisplayCell {
        self.cells[usize::from(coord)]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[DisplayCell]> {
        self.cells.chunks(usize::from(self.size).max(1))
    }
}

/// Cursor and display state layered over a [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    board: Board,
    cells: Array2<DisplayCell>,
    cursor: Option<Coord>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    outcome: Outcome,
}

impl Controller {
    pub fn new(board: Board) -> Self {
        let side = usize::from(board.size());
        Self {
            board,
            cells: Array2::default((side, side)),
            cursor: Some(0),
            revealed_count: 0,
            flagged_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Side {
        self.board.size()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// `None` once the game is lost.
    pub fn cursor(&self) -> Option<Coord> {
        self.cursor
    }

    pub fn cell_at(&self, coord: Coord) -> DisplayCell {
        self.cells[to_nd_index(coord, self.size())]
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn mines_left(&self) -> isize {
        (self.board.hazard_count() as isize) - (self.flagged_count as isize)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size(),
            cells: self.cells.iter().copied().collect(),
            cursor: self.cursor,
            outcome: self.outcome,
        }
    }

    pub fn process(&mut self, command: Command) -> EventOutcome {
        log::trace!("command: {:?}", command);
        match command {
            Command::Move(direction) => EventOutcome::Move(self.move_cursor(direction)),
            Command::ToggleFlag => EventOutcome::Mark(self.toggle_flag()),
            Command::Reveal => EventOutcome::Reveal(self.reveal_at_cursor()),
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) -> MoveOutcome {
        let Some(cursor) = self.active_cursor() else {
            return MoveOutcome::NoChange;
        };

        match direction.step(cursor, self.size()) {
            Some(next) => {
                self.cursor = Some(next);
                MoveOutcome::Moved
            }
            None => MoveOutcome::NoChange,
        }
    }

    /// Places the cursor directly; ignored for off-board coordinates.
    pub fn move_cursor_to(&mut self, coord: Coord) -> MoveOutcome {
        match self.active_cursor() {
            Some(cursor) if cursor != coord && self.board.contains(coord) => {
                self.cursor = Some(coord);
                MoveOutcome::Moved
            }
            _ => MoveOutcome::NoChange,
        }
    }

    pub fn toggle_flag(&mut self) -> MarkOutcome {
        use DisplayCell::*;

        let Some(cursor) = self.active_cursor() else {
            return MarkOutcome::NoChange;
        };

        match self.cell_at(cursor) {
            Covered => self.set_cell(cursor, Flagged),
            Flagged => self.set_cell(cursor, Covered),
            _ => return MarkOutcome::NoChange,
        }
        MarkOutcome::Changed
    }

    pub fn reveal_at_cursor(&mut self) -> RevealOutcome {
        let Some(cursor) = self.active_cursor() else {
            return RevealOutcome::NoChange;
        };

        if self.cell_at(cursor) != DisplayCell::Covered {
            return RevealOutcome::NoChange;
        }

        if self.board.is_hazard(cursor) {
            self.explode(cursor);
            return RevealOutcome::HitHazard;
        }

        let opened = self.flood_reveal(cursor);
        log::trace!("revealed {} cells from {}", opened, cursor);

        if self.revealed_count == self.board.safe_cell_count() {
            self.win();
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens `start` and, through zero-count cells, the connected region around
    /// it. Flagged cells are left alone. Returns the number of cells opened.
    fn flood_reveal(&mut self, start: Coord) -> CellCount {
        let mut opened = 0;
        let mut pending = VecDeque::from([start]);

        while let Some(coord) = pending.pop_front() {
            if self.cell_at(coord) != DisplayCell::Covered {
                continue;
            }
            debug_assert!(!self.board.is_hazard(coord));

            let count = self.board.adjacency_count(coord);
            self.set_cell(coord, DisplayCell::Revealed(count));
            opened += 1;

            if count == 0 {
                pending.extend(
                    self.board
                        .neighbors(coord)
                        .filter(|&pos| self.cell_at(pos) == DisplayCell::Covered),
                );
            }
        }

        opened
    }

    fn explode(&mut self, coord: Coord) {
        log::debug!("hazard revealed at {}", coord);
        let hazards: Vec<Coord> = self.board.hazards().collect();
        for hazard in hazards {
            self.set_cell(hazard, DisplayCell::ShownHazard);
        }
        self.set_cell(coord, DisplayCell::ExplodedHazard);
        self.cursor = None;
        self.outcome = Outcome::Lost;
    }

    fn win(&mut self) {
        log::debug!("all {} safe cells revealed", self.revealed_count);
        let hazards: Vec<Coord> = self.board.hazards().collect();
        for hazard in hazards {
            self.set_cell(hazard, DisplayCell::ShownHazard);
        }
        self.outcome = Outcome::Won;
    }

    fn set_cell(&mut self, coord: Coord, cell: DisplayCell) {
        let index = to_nd_index(coord, self.size());
        let previous = core::mem::replace(&mut self.cells[index], cell);

        match previous {
            DisplayCell::Flagged => self.flagged_count -= 1,
            DisplayCell::Revealed(_) => self.revealed_count -= 1,
            _ => {}
        }
        match cell {
            DisplayCell::Flagged => self.flagged_count += 1,
            DisplayCell::Revealed(_) => self.revealed_count += 1,
            _ => {}
        }
    }

    fn active_cursor(&self) -> Option<Coord> {
        if self.outcome.is_finished() {
            None
        } else {
            self.cursor
        }
    }
}
