use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("A board needs at least one mine")]
    NoMines,
    #[error("Too many mines for the board size")]
    TooManyMines,
}

pub type Result<T> = std::result::Result<T, GameError>;
