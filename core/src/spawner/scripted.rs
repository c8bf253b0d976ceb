use alloc::collections::VecDeque;

use super::*;

/// Spawner that replays a fixed list of picks, then stops placing tiles.
///
/// Each pick is an index into the empty cells (row-major, wrapping around) and a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedSpawner {
    picks: VecDeque<(usize, Tile)>,
}

impl ScriptedSpawner {
    /// ```
    /// use twenty48_core::{ScriptedSpawner, TileSpawner};
    /// let mut spawner = ScriptedSpawner::new([(1, 2), (0, 4)]).unwrap();
    /// assert_eq!(spawner.pick(&[(0, 0), (0, 1)]), Some(((0, 1), 2)));
    /// assert!(ScriptedSpawner::new([(0, 8)]).is_err());
    /// ```
    pub fn new(picks: impl IntoIterator<Item = (usize, Tile)>) -> Result<Self> {
        let picks: VecDeque<_> = picks.into_iter().collect();
        if picks.iter().any(|&(_, value)| !is_spawn_value(value)) {
            return Err(GameError::InvalidTile);
        }
        Ok(Self { picks })
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl TileSpawner for ScriptedSpawner {
    fn pick(&mut self, empty: &[Coord2]) -> Option<(Coord2, Tile)> {
        if empty.is_empty() {
            return None;
        }

        let (index, value) = self.picks.pop_front()?;
        Some((empty[index % empty.len()], value))
    }
}
