use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be at least 2")]
    InvalidSize,
    #[error("Target must be a power of two of at least 4")]
    InvalidTarget,
    #[error("Grid rows do not form a square matching the declared size")]
    InvalidGridShape,
    #[error("Tile value must be zero or a power of two of at least 2")]
    InvalidTile,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Unknown direction")]
    InvalidDirection,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
