use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::ops::{Index, IndexMut};

use crate::*;

/// Rectangular minefield grid.
///
/// Values carry the placed mines and the precomputed adjacency clues; states
/// track what the player sees. Exactly `mine_count` cells hold a mine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// All-empty, all-hidden board with no mines placed yet.
    pub fn blank(size: Coord2) -> Self {
        Self {
            grid: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Board with mines at the given coordinates and adjacency clues filled in.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::blank(size);
        for &coords in mine_coords {
            board.validate_coords(coords)?;
            board.place_mine(coords);
        }
        board.recompute_adjacency();
        Ok(board)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.grid.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    /// Raw grid dimensions, before any `Coord` narrowing. Snapshot
    /// verification compares against these so an oversized persisted grid is
    /// rejected instead of overflowing in `size`.
    pub(crate) fn dim(&self) -> (usize, usize) {
        self.grid.dim()
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.len().try_into().unwrap()
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Marks a mine at `coords`, returning whether the cell was previously clear.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.value.is_mine() {
            return false;
        }
        cell.value = CellValue::Mine;
        self.mine_count += 1;
        true
    }

    /// Second generation pass: every non-mine cell gets its neighbor mine tally.
    pub fn recompute_adjacency(&mut self) {
        let (height, width) = self.size();
        for row in 0..height {
            for col in 0..width {
                let coords = (row, col);
                if self[coords].value.is_mine() {
                    continue;
                }
                let count = self.count_mine_neighbors(coords);
                self.grid[coords.to_nd_index()].value = CellValue::from_count(count);
            }
        }
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    fn count_mine_neighbors(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].value.is_mine())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].state == CellState::Flagged)
            .count()
            .try_into()
            .unwrap()
    }

    /// Hidden cells around `coords`, in scan order.
    pub fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].state == CellState::Hidden)
    }

    /// Reveals `coords` and, when it is empty, cascades through the connected
    /// zero-clue region with an explicit worklist. Numbered cells on the region
    /// border are revealed without expanding; flagged cells are never touched.
    /// Returns how many cells were newly revealed.
    ///
    /// Mine hits are resolved by the caller before this is invoked.
    pub fn flood_reveal(&mut self, coords: Coord2) -> CellCount {
        use CellState::*;

        if self[coords].state != Hidden {
            return 0;
        }

        self.grid[coords.to_nd_index()].state = Revealed;
        let mut revealed: CellCount = 1;

        if self[coords].value.is_empty() {
            let mut visited = HashSet::from([coords]);
            let mut to_visit: VecDeque<_> = self
                .iter_neighbors(coords)
                .filter(|&pos| self[pos].state == Hidden)
                .collect();
            log::trace!(
                "flood reveal from {:?}, initial neighbors: {:?}",
                coords,
                to_visit
            );

            while let Some(visit_coords) = to_visit.pop_front() {
                if !visited.insert(visit_coords) {
                    continue;
                }

                // skip flagged or already revealed cells
                if self[visit_coords].state != Hidden {
                    log::trace!("skipping cell at {:?}", visit_coords);
                    continue;
                }

                self.grid[visit_coords.to_nd_index()].state = Revealed;
                revealed += 1;
                log::trace!("flood revealed cell at {:?}", visit_coords);

                // only zero-clue cells keep the cascade going
                if self[visit_coords].value.is_empty() {
                    to_visit.extend(
                        self.iter_neighbors(visit_coords)
                            .filter(|&pos| self[pos].state == Hidden)
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        revealed
    }

    /// Loss sweep: every mine becomes revealed, flags on mines included.
    /// Returns how many flagged mines had their flag displaced.
    pub fn reveal_mines(&mut self) -> CellCount {
        use CellState::*;

        let mut unflagged: CellCount = 0;
        for cell in self.grid.iter_mut() {
            if !cell.value.is_mine() {
                continue;
            }
            if cell.state == Flagged {
                unflagged += 1;
            }
            cell.state = Revealed;
        }
        unflagged
    }

    /// Win sweep: every still-hidden mine gets a flag for display.
    /// Returns how many flags were added.
    pub fn flag_mines(&mut self) -> CellCount {
        use CellState::*;

        let mut flagged: CellCount = 0;
        for cell in self.grid.iter_mut() {
            if cell.value.is_mine() && cell.state == Hidden {
                cell.state = Flagged;
                flagged += 1;
            }
        }
        flagged
    }

    pub(crate) fn any_revealed_mine(&self) -> bool {
        self.grid
            .iter()
            .any(|cell| cell.value.is_mine() && cell.state == CellState::Revealed)
    }

    pub(crate) fn recount(&self) -> BoardTally {
        let mut tally = BoardTally::default();
        for cell in self.grid.iter() {
            if cell.value.is_mine() {
                tally.mines += 1;
            } else if cell.state == CellState::Revealed {
                tally.revealed_safe += 1;
            }
            if cell.state == CellState::Flagged {
                tally.flagged += 1;
            }
        }
        tally
    }
}

/// Per-state cell totals used to cross-check persisted counters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardTally {
    pub(crate) mines: CellCount,
    pub(crate) revealed_safe: CellCount,
    pub(crate) flagged: CellCount,
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.grid[coords.to_nd_index()]
    }
}
