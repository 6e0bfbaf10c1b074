use super::*;

/// Uniform placement: Fisher-Yates shuffle of every coordinate, the first
/// `mines` entries become hazards. The same seed always yields the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl HazardGenerator for ShuffleGenerator {
    fn generate(self, config: GameConfig) -> Array2<bool> {
        use rand::prelude::*;

        let size = config.size;
        log::debug!("placing {} hazards with seed {}", config.mines, self.seed);
        let mut coords: Vec<Coord> = (0..config.total_cells()).collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..coords.len()).rev() {
            let j = rng.random_range(0..=i);
            coords.swap(i, j);
        }

        let side = usize::from(size);
        let mut mask: Array2<bool> = Array2::default((side, side));
        let mines = usize::from(config.mines).min(coords.len());
        for &coord in &coords[..mines] {
            mask[to_nd_index(coord, size)] = true;
        }

        // double check mine count
        let count = mask.iter().filter(|&&hazard| hazard).count();
        if count != usize::from(config.mines) {
            log::warn!(
                "Generated hazard count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        mask
    }
}
