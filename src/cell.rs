use serde::{Deserialize, Serialize};

/// What a cell holds underneath: nothing, a mine, or an adjacent-mine clue.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Count(u8),
    Mine,
}

impl CellValue {
    /// Builds a value from an adjacent-mine tally (at most 8).
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            count => Self::Count(count),
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Numeric clue, 0 for empty and mine cells.
    pub const fn adjacent_mines(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Count(count) => count,
            Self::Mine => 0,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One square of the board: the authoritative value plus what the player sees.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub state: CellState,
}
