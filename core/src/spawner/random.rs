use rand::prelude::*;

use super::*;

/// Spawner that picks a uniformly random empty cell and places a 2 three times out of four,
/// otherwise a 4.
///
/// Seeded so that a game can be replayed exactly.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    seed: u64,
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileSpawner for RandomSpawner {
    fn pick(&mut self, empty: &[Coord2]) -> Option<(Coord2, Tile)> {
        if empty.is_empty() {
            return None;
        }

        let coords = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_range(0..4u8) == 0 {
            SPAWN_VALUES[1]
        } else {
            SPAWN_VALUES[0]
        };
        Some((coords, value))
    }
}
