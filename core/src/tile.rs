use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCell {
    Covered,
    Flagged,
    Revealed(u8),
    /// The hazard the player revealed.
    ExplodedHazard,
    /// Any other hazard, uncovered once the game is over.
    ShownHazard,
}

impl DisplayCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Covered | Self::Flagged)
    }

    /// Terminal cells never change again.
    pub const fn is_terminal(self) -> bool {
        !self.is_unrevealed()
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::Covered
    }
}
