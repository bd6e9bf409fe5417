use thiserror::Error;

use crate::Coord;

/// Reason a game configuration or mine layout was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("width and height must be positive")]
    ZeroSize,
    #[error("at least one mine is required")]
    NoMines,
    #[error("mine count must leave at least one safe cell")]
    TooManyMines,
    #[error("a mine was placed on the first revealed cell")]
    MineOnSafeCell,
    #[error("the same cell was mined twice")]
    DuplicateMine,
    #[error("mine layout does not match the configured mine count")]
    MineCountMismatch,
    #[error("board shape does not match declared size")]
    InvalidBoardShape,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    #[error("Coordinates ({col}, {row}) are out of bounds")]
    OutOfBounds { col: Coord, row: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
