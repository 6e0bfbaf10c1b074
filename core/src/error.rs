use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size must be between 1 and 100")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape is not square")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
