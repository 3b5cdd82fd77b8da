use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use storage::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod storage;
mod types;

/// Board dimensions plus the mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: Coord,
    pub width: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(height, width, mines);
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the engine cannot play: no mines, or no safe
    /// cell left (which also covers zero-area boards).
    pub fn validate(&self) -> Result<()> {
        if self.mines == 0 {
            return Err(GameError::NoMines);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Classic 9×9 board with 10 mines.
    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    /// Classic 16×16 board with 40 mines.
    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    /// Classic 16×30 board with 99 mines.
    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
