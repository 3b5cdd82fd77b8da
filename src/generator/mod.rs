use crate::*;

pub use random::*;

mod random;

/// Strategy for laying out mines on a fresh board.
pub trait BoardGenerator {
    /// Produces a board matching `config`: exact mine count, adjacency clues
    /// filled in, every cell hidden. `config` must be valid.
    fn generate(&mut self, config: &BoardConfig) -> Board;

    /// Generates boards until the first-click cell is not a mine.
    ///
    /// The whole board is re-rolled on a bad draw rather than relocating the
    /// offending mine, so the final layout stays uniform over all safe
    /// placements. No attempt bound is enforced; validated configs always
    /// leave at least one safe cell, so the loop terminates.
    fn generate_safe(&mut self, config: &BoardConfig, first_click: Coord2) -> Board {
        loop {
            let board = self.generate(config);
            if !board[first_click].value.is_mine() {
                return board;
            }
            log::debug!(
                "first click {:?} landed on a mine, re-rolling the board",
                first_click
            );
        }
    }
}
