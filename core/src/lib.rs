#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use direction::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use session::*;
pub use spawner::*;
pub use tile::*;
pub use types::*;

mod direction;
mod engine;
mod error;
mod grid;
mod session;
mod spawner;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub target: Tile,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 4;
    pub const DEFAULT_TARGET: Tile = 2048;

    pub const fn new_unchecked(size: Coord, target: Tile) -> Self {
        Self { size, target }
    }

    pub fn new(size: Coord, target: Tile) -> Result<Self> {
        if size < 2 {
            return Err(GameError::InvalidSize);
        }
        if target < 4 || target > MAX_TILE || !target.is_power_of_two() {
            return Err(GameError::InvalidTarget);
        }
        Ok(Self::new_unchecked(size, target))
    }

    pub const fn total_cells(&self) -> u16 {
        (self.size as u16) * (self.size as u16)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_TARGET)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    Ignored,
    Continued,
    Won,
    Lost,
}

impl MoveStatus {
    pub const fn has_update(self) -> bool {
        use MoveStatus::*;
        match self {
            Ignored => false,
            Continued => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn phase(self) -> Option<Phase> {
        use MoveStatus::*;
        match self {
            Ignored => None,
            Continued => Some(Phase::Playing),
            Won => Some(Phase::Won),
            Lost => Some(Phase::Lost),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    NoChange,
    Restored,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Restored => true,
        }
    }
}
