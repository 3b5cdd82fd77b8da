use chrono::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::BitOr;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress (first reveal, after mine placement)
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    /// Mines are not placed yet; waiting for the first reveal.
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Outcome of revealing or chording a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the action changed the session.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed => true,
            Self::HitMine => true,
            Self::Won => true,
        }
    }
}

/// Merges per-neighbor outcomes when chording: a mine hit dominates, then a
/// win, then a plain reveal.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine, _) => HitMine,
            (_, HitMine) => HitMine,
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

/// Outcome of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Toggled)
    }
}

/// Outcome of the transient chord-highlight gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HighlightOutcome {
    NoChange,
    Applied,
    Cleared,
    /// The release-time sweep found a revealed mine and ended the game.
    LossDetected,
}

impl HighlightOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Presentation view of one cell: the cell plus its transient flags.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellView {
    pub cell: Cell,
    pub danger: bool,
    pub highlighted: bool,
}

/// Game record in the shape the statistics consumer expects.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub config: BoardConfig,
    pub won: bool,
    pub lost: bool,
    pub moves: u32,
    pub elapsed_secs: u32,
}

/// One game from configuration to completion.
///
/// The session owns its board exclusively; callers hold read-only projections
/// and submit intents by value. Mines are placed lazily on the first reveal,
/// so the first-clicked cell is never a mine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: BoardConfig,
    board: Board,
    state: SessionState,
    seed: u64,
    mines_placed: bool,
    moves: u32,
    revealed_count: CellCount,
    flagged_count: CellCount,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    danger: Option<Coord2>,
    #[serde(skip)]
    highlighted: BTreeSet<Coord2>,
}

impl GameSession {
    /// Fresh unstarted session with a random generation seed.
    pub fn new(config: BoardConfig) -> Result<Self> {
        Self::with_seed(config, rand::rng().random())
    }

    /// Fresh unstarted session generating its board from `seed`.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config, seed))
    }

    /// Session over a board whose mines are already placed. The first reveal
    /// skips generation, so it can hit a mine.
    pub fn from_board(board: Board) -> Self {
        let (height, width) = board.size();
        let config = BoardConfig::new_unchecked(height, width, board.mine_count());
        let tally = board.recount();
        Self {
            config,
            board,
            state: Default::default(),
            seed: rand::rng().random(),
            mines_placed: true,
            moves: 0,
            revealed_count: tally.revealed_safe,
            flagged_count: tally.flagged,
            started_at: None,
            ended_at: None,
            danger: None,
            highlighted: BTreeSet::new(),
        }
    }

    fn fresh(config: BoardConfig, seed: u64) -> Self {
        Self {
            config,
            board: Board::blank(config.size()),
            state: Default::default(),
            seed,
            mines_placed: false,
            moves: 0,
            revealed_count: 0,
            flagged_count: 0,
            started_at: None,
            ended_at: None,
            danger: None,
            highlighted: BTreeSet::new(),
        }
    }

    /// Opens a hidden cell: places mines on the very first reveal, cascades
    /// empty regions, and resolves the win or loss.
    pub fn open_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if self.state.is_final() {
            return Ok(NoChange);
        }
        if self.board[coords].state != CellState::Hidden {
            return Ok(NoChange);
        }

        if !self.mines_placed {
            self.place_mines(coords);
        }
        self.mark_started();

        let outcome = self.resolve_reveal(coords);
        self.record_move(outcome.has_update());
        Ok(outcome)
    }

    /// Toggles a flag on a hidden cell. Flags only exist while the game is in
    /// progress; revealed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use FlagOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if !matches!(self.state, SessionState::InProgress) {
            return Ok(NoChange);
        }

        let outcome = match self.board[coords].state {
            CellState::Hidden => {
                self.board[coords].state = CellState::Flagged;
                self.flagged_count += 1;
                Toggled
            }
            CellState::Flagged => {
                self.board[coords].state = CellState::Hidden;
                self.flagged_count -= 1;
                Toggled
            }
            CellState::Revealed => NoChange,
        };

        self.record_move(outcome.has_update());
        self.check_win();
        Ok(outcome)
    }

    /// Opens every hidden, unflagged neighbor of a revealed cell once at least
    /// as many neighbors are flagged as the cell's clue. Overflagging counts
    /// as satisfied; fewer flags leave the board untouched.
    pub fn chord_open(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if !matches!(self.state, SessionState::InProgress) {
            return Ok(NoChange);
        }

        let Cell { value, state } = self.board[coords];
        if state != CellState::Revealed {
            return Ok(NoChange);
        }
        if self.board.count_flagged_neighbors(coords) < value.adjacent_mines() {
            return Ok(NoChange);
        }

        let mut outcome = NoChange;
        for pos in self.board.iter_neighbors(coords) {
            let resolved = self.resolve_reveal(pos);
            outcome = outcome | resolved;
            if matches!(resolved, HitMine) {
                break;
            }
        }

        self.record_move(outcome.has_update());
        Ok(outcome)
    }

    /// Applies or clears the transient chord highlight on the hidden neighbors
    /// of a revealed cell. Release also re-checks the loss condition: a
    /// revealed mine anywhere ends the game on the spot.
    pub fn set_hover_highlight(&mut self, coords: Coord2, on: bool) -> Result<HighlightOutcome> {
        use HighlightOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        if !matches!(self.state, SessionState::InProgress) {
            return Ok(NoChange);
        }

        if on {
            if self.board[coords].state != CellState::Revealed {
                return Ok(NoChange);
            }
            let next: BTreeSet<_> = self.board.hidden_neighbors(coords).collect();
            if next == self.highlighted {
                return Ok(NoChange);
            }
            self.highlighted = next;
            Ok(Applied)
        } else {
            let cleared = !self.highlighted.is_empty();
            self.highlighted.clear();
            if self.board.any_revealed_mine() {
                self.end_game(false);
                return Ok(LossDetected);
            }
            Ok(if cleared { Cleared } else { NoChange })
        }
    }

    /// Abandons the current game: same config, fresh board, new seed.
    pub fn reset(&mut self) {
        log::debug!("session reset");
        *self = Self::fresh(self.config, rand::rng().random());
    }

    fn place_mines(&mut self, first_click: Coord2) {
        let mut generator = RandomBoardGenerator::new(self.seed);
        self.board = generator.generate_safe(&self.config, first_click);
        self.mines_placed = true;
        log::debug!(
            "placed {} mines after first click at {:?}",
            self.config.mines,
            first_click
        );
    }

    /// Reveals one hidden cell, resolving mine hits, cascades, and the win
    /// condition. Revealed and flagged cells are skipped.
    fn resolve_reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if self.board[coords].state != CellState::Hidden {
            return NoChange;
        }

        if self.board[coords].value.is_mine() {
            self.danger = Some(coords);
            let unflagged = self.board.reveal_mines();
            self.flagged_count -= unflagged;
            self.end_game(false);
            return HitMine;
        }

        let opened = self.board.flood_reveal(coords);
        self.revealed_count += opened;
        log::debug!("revealed {} cell(s) from {:?}", opened, coords);

        if self.check_win() {
            Won
        } else {
            Revealed
        }
    }

    /// Ends the game as won once every safe cell is revealed; the remaining
    /// hidden mines get display flags.
    fn check_win(&mut self) -> bool {
        if self.state.is_final() || self.revealed_count != self.board.safe_cells() {
            return false;
        }
        self.flagged_count += self.board.flag_mines();
        self.end_game(true);
        true
    }

    fn record_move(&mut self, changed: bool) {
        if changed {
            self.moves = self.moves.saturating_add(1);
        }
    }

    fn mark_started(&mut self) {
        if self.state.is_initial() {
            let now = Utc::now();
            log::debug!("session started at {}", now);
            self.started_at = Some(now);
            self.state = SessionState::InProgress;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_final() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        let now = Utc::now();
        self.ended_at = Some(now);
        self.highlighted.clear();
        log::debug!("session ended at {}, won: {}", now, won);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// How many flags are still unplaced; negative once the player overflags.
    pub fn flags_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count as isize)
    }

    /// Seconds since the first reveal, frozen once the game ends, 0 before it
    /// starts.
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Cell whose mine ended the game, if one was opened directly.
    pub fn danger(&self) -> Option<Coord2> {
        self.danger
    }

    pub fn is_highlighted(&self, coords: Coord2) -> bool {
        self.highlighted.contains(&coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    /// Cell plus its transient presentation flags.
    pub fn view_at(&self, coords: Coord2) -> CellView {
        CellView {
            cell: self.board[coords],
            danger: self.danger == Some(coords),
            highlighted: self.highlighted.contains(&coords),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            config: self.config,
            won: matches!(self.state, SessionState::Won),
            lost: matches!(self.state, SessionState::Lost),
            moves: self.moves,
            elapsed_secs: self.elapsed_secs(),
        }
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub(crate) fn counters(&self) -> (CellCount, CellCount) {
        (self.revealed_count, self.flagged_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: Coord2, mines: &[Coord2]) -> GameSession {
        GameSession::from_board(Board::with_mines(size, mines).unwrap())
    }

    #[test]
    fn first_reveal_is_never_a_mine() {
        for seed in 0..16 {
            let mut game = GameSession::with_seed(BoardConfig::beginner(), seed).unwrap();

            game.open_cell((4, 4)).unwrap();

            assert!(!game.cell_at((4, 4)).value.is_mine());
            assert_eq!(game.cell_at((4, 4)).state, CellState::Revealed);
        }
    }

    #[test]
    fn single_safe_cell_board_wins_on_the_first_reveal() {
        let config = BoardConfig::new(4, 4, 15).unwrap();
        let mut game = GameSession::with_seed(config, 1).unwrap();

        assert_eq!(game.open_cell((2, 1)).unwrap(), RevealOutcome::Won);
        assert_eq!(game.state(), SessionState::Won);
        assert_eq!(game.moves(), 1);
        assert_eq!(game.flags_left(), 0);
    }

    #[test]
    fn opening_a_mine_loses_and_reveals_every_mine() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(game.open_cell((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.open_cell((0, 0)).unwrap(), RevealOutcome::HitMine);

        assert_eq!(game.state(), SessionState::Lost);
        assert_eq!(game.danger(), Some((0, 0)));
        assert_eq!(game.cell_at((0, 0)).state, CellState::Revealed);
        assert_eq!(game.cell_at((2, 2)).state, CellState::Revealed);
        // untouched safe cells stay hidden
        assert_eq!(game.cell_at((0, 1)).state, CellState::Hidden);
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn revealing_every_safe_cell_wins_and_flags_the_mines() {
        let mut game = session((2, 2), &[(0, 0)]);

        assert_eq!(game.open_cell((0, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.open_cell((1, 0)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.open_cell((1, 1)).unwrap(), RevealOutcome::Won);

        assert_eq!(game.state(), SessionState::Won);
        assert_eq!(game.cell_at((0, 0)).state, CellState::Flagged);
        assert_eq!(game.flags_left(), 0);
        assert_eq!(game.moves(), 3);
    }

    #[test]
    fn terminal_sessions_ignore_further_actions() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.open_cell((0, 0)).unwrap();
        assert_eq!(game.state(), SessionState::Lost);

        assert_eq!(game.open_cell((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.toggle_flag((1, 1)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(game.chord_open((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(
            game.set_hover_highlight((1, 1), true).unwrap(),
            HighlightOutcome::NoChange
        );
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn out_of_bounds_coordinates_are_rejected_without_mutation() {
        let mut game = session((2, 2), &[(0, 0)]);

        assert_eq!(game.open_cell((2, 0)).unwrap_err(), GameError::InvalidCoords);
        assert_eq!(game.toggle_flag((0, 2)).unwrap_err(), GameError::InvalidCoords);
        assert_eq!(game.state(), SessionState::NotStarted);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn flags_only_toggle_while_in_progress() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);

        // nothing to toggle before the first reveal
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), FlagOutcome::NoChange);

        game.open_cell((0, 2)).unwrap();
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), FlagOutcome::Toggled);
        assert_eq!(game.flags_left(), 1);
        assert_eq!(game.toggle_flag((0, 0)).unwrap(), FlagOutcome::Toggled);
        assert_eq!(game.flags_left(), 2);
        // revealed cells cannot be flagged
        assert_eq!(game.toggle_flag((0, 1)).unwrap(), FlagOutcome::NoChange);
        assert_eq!(game.moves(), 3);
    }

    #[test]
    fn opening_a_flagged_cell_is_a_silent_no_op() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);
        game.open_cell((0, 2)).unwrap();
        game.toggle_flag((2, 0)).unwrap();

        assert_eq!(game.open_cell((2, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.cell_at((2, 0)).state, CellState::Flagged);
    }

    #[test]
    fn chord_reveals_neighbors_once_flags_match_the_clue() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);
        game.open_cell((0, 2)).unwrap();

        game.toggle_flag((0, 0)).unwrap();
        // one flag of two: not enough
        assert_eq!(game.chord_open((1, 1)).unwrap(), RevealOutcome::NoChange);

        game.toggle_flag((2, 2)).unwrap();
        assert_eq!(game.chord_open((1, 1)).unwrap(), RevealOutcome::Won);
        assert_eq!(game.state(), SessionState::Won);
    }

    #[test]
    fn overflagged_chord_behaves_like_an_exact_match() {
        let mut game = session((3, 3), &[(0, 0), (2, 0)]);
        game.open_cell((0, 1)).unwrap();
        game.toggle_flag((0, 0)).unwrap();
        // misflag: two flags against a clue of one
        game.toggle_flag((1, 0)).unwrap();

        assert_eq!(game.chord_open((0, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.cell_at((1, 1)).state, CellState::Revealed);
        assert_eq!(game.cell_at((1, 0)).state, CellState::Flagged);
        assert_eq!(game.state(), SessionState::InProgress);
    }

    #[test]
    fn chord_into_a_misflagged_mine_loses() {
        let mut game = session((3, 3), &[(0, 0)]);
        game.open_cell((1, 1)).unwrap();
        game.toggle_flag((1, 0)).unwrap();

        assert_eq!(game.chord_open((1, 1)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(game.state(), SessionState::Lost);
        assert_eq!(game.danger(), Some((0, 0)));
    }

    #[test]
    fn chord_needs_a_revealed_target() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);
        game.open_cell((0, 2)).unwrap();

        assert_eq!(game.chord_open((2, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn hover_highlight_marks_hidden_neighbors_only() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);
        game.open_cell((0, 2)).unwrap();

        assert_eq!(
            game.set_hover_highlight((1, 1), true).unwrap(),
            HighlightOutcome::Applied
        );
        assert!(game.is_highlighted((0, 0)));
        assert!(game.is_highlighted((2, 1)));
        assert!(!game.is_highlighted((0, 1)));

        assert_eq!(
            game.set_hover_highlight((1, 1), false).unwrap(),
            HighlightOutcome::Cleared
        );
        assert!(!game.is_highlighted((0, 0)));
        // the gesture is presentational and never counts as a move
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn hover_highlight_needs_a_revealed_target() {
        let mut game = session((3, 3), &[(0, 0), (2, 2)]);
        game.open_cell((0, 2)).unwrap();

        assert_eq!(
            game.set_hover_highlight((2, 0), true).unwrap(),
            HighlightOutcome::NoChange
        );
    }

    #[test]
    fn highlight_release_detects_a_revealed_mine() {
        let mut board = Board::with_mines((3, 3), &[(0, 0), (0, 2)]).unwrap();
        board[(0, 0)].state = CellState::Revealed;
        let mut game = GameSession::from_board(board);
        game.open_cell((2, 2)).unwrap();
        assert_eq!(game.state(), SessionState::InProgress);

        let outcome = game.set_hover_highlight((1, 1), false).unwrap();

        assert_eq!(outcome, HighlightOutcome::LossDetected);
        assert_eq!(game.state(), SessionState::Lost);
        // no danger mark and no mine sweep on the re-check path
        assert_eq!(game.danger(), None);
        assert_eq!(game.cell_at((0, 2)).state, CellState::Hidden);
    }

    #[test]
    fn reset_returns_to_a_fresh_unstarted_session() {
        let mut game = GameSession::with_seed(BoardConfig::beginner(), 5).unwrap();
        game.open_cell((0, 0)).unwrap();
        game.toggle_flag((8, 8)).unwrap();
        assert!(game.moves() > 0);

        game.reset();

        assert_eq!(game.state(), SessionState::NotStarted);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.flags_left(), 10);
        assert_eq!(game.elapsed_secs(), 0);
        assert_eq!(game.size(), (9, 9));
        assert_eq!(game.cell_at((0, 0)).state, CellState::Hidden);
        assert_eq!(game.config(), BoardConfig::beginner());
    }

    #[test]
    fn center_mine_board_reveals_a_single_clue_cell() {
        // every safe cell borders the mine, so nothing cascades
        let mut game = session((3, 3), &[(1, 1)]);

        assert_eq!(game.open_cell((0, 0)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.cell_at((0, 0)).value, CellValue::Count(1));
        assert_eq!(game.cell_at((0, 1)).state, CellState::Hidden);
        assert_eq!(game.state(), SessionState::InProgress);
    }

    #[test]
    fn corner_mine_board_cascades_to_a_win() {
        let mut game = session((3, 3), &[(0, 0)]);

        assert_eq!(game.open_cell((2, 2)).unwrap(), RevealOutcome::Won);
        assert_eq!(game.state(), SessionState::Won);
        assert_eq!(game.cell_at((0, 0)).state, CellState::Flagged);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn view_at_carries_the_transient_danger_flag() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.open_cell((1, 1)).unwrap();
        game.open_cell((0, 0)).unwrap();

        let view = game.view_at((0, 0));
        assert!(view.danger);
        assert!(view.cell.value.is_mine());
        assert_eq!(view.cell.state, CellState::Revealed);
        assert!(!game.view_at((1, 1)).danger);
    }

    #[test]
    fn won_session_summary_matches_the_final_state() {
        let mut game = session((2, 2), &[(0, 0)]);
        game.open_cell((0, 1)).unwrap();
        game.open_cell((1, 0)).unwrap();
        game.open_cell((1, 1)).unwrap();

        let summary = game.summary();

        assert!(summary.won);
        assert!(!summary.lost);
        assert_eq!(summary.moves, 3);
        assert_eq!(summary.config.mines, 1);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert_eq!(
            GameSession::new(BoardConfig::new_unchecked(3, 3, 0)).unwrap_err(),
            GameError::NoMines
        );
        assert_eq!(
            GameSession::new(BoardConfig::new_unchecked(3, 3, 9)).unwrap_err(),
            GameError::TooManyMines
        );
        assert_eq!(
            GameSession::new(BoardConfig::new_unchecked(0, 3, 1)).unwrap_err(),
            GameError::TooManyMines
        );
    }
}
