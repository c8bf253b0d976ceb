use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// A direction to slide and merge tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Clockwise quarter turns that bring this direction's leading edge to the left.
    pub const fn rotation(self) -> usize {
        use Direction::*;
        match self {
            Left => 0,
            Down => 1,
            Right => 2,
            Up => 3,
        }
    }

    /// Quarter turns that undo [`Direction::rotation`].
    pub const fn inverse_rotation(self) -> usize {
        (4 - self.rotation()) % 4
    }

    pub const fn name(self) -> &'static str {
        use Direction::*;
        match self {
            Up => "up",
            Down => "down",
            Left => "left",
            Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::InvalidDirection)
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(GameError::InvalidDirection)
    }
}
