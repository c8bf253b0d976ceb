use crate::*;

/// Largest tile a grid may hold; two of these never merge.
pub const MAX_TILE: Tile = 1 << 30;

/// Whether `value` may appear in a grid cell.
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Whether two equal tiles of `value` combine into one.
pub const fn can_merge(value: Tile) -> bool {
    value != 0 && value < MAX_TILE
}

pub fn validate_tile(value: Tile) -> Result<Tile> {
    if is_valid_tile(value) {
        Ok(value)
    } else {
        Err(GameError::InvalidTile)
    }
}

/// Values a freshly spawned tile may take.
pub const SPAWN_VALUES: [Tile; 2] = [2, 4];

pub const fn is_spawn_value(value: Tile) -> bool {
    value == SPAWN_VALUES[0] || value == SPAWN_VALUES[1]
}
