use ndarray::Array2;

use crate::*;
pub use shuffle::*;

mod shuffle;

/// Strategy for laying out hazards on a board of a given configuration.
pub trait HazardGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool>;
}
