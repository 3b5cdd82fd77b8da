use rand::prelude::*;

use super::*;

/// Uniform generator: random cells are drawn, repeats rejected, until the
/// requested number of distinct mines has been placed.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: &BoardConfig) -> Board {
        let mut board = Board::blank(config.size());
        let mut placed: CellCount = 0;

        // draws repeat until `mines` distinct cells are hit; validated configs
        // keep the mine count below the cell count
        while placed < config.mines {
            let coords = (
                self.rng.random_range(0..config.height),
                self.rng.random_range(0..config.width),
            );
            if board.place_mine(coords) {
                placed += 1;
            }
        }

        board.recompute_adjacency();
        board
    }
}
