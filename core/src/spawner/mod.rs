use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of new tiles.
pub trait TileSpawner {
    /// Picks one of the `empty` cells and the value to place there, which must be 2 or 4.
    ///
    /// Returns `None` when nothing should be placed, which is always the case for an empty slice.
    ///
    /// A pick that lands on an occupied cell or carries another value is rejected by the session,
    /// which then leaves its own state untouched. The spawner has still consumed that pick, so a
    /// scripted or seeded sequence is one step ahead afterwards.
    fn pick(&mut self, empty: &[Coord2]) -> Option<(Coord2, Tile)>;
}

impl<S: TileSpawner + ?Sized> TileSpawner for &mut S {
    fn pick(&mut self, empty: &[Coord2]) -> Option<(Coord2, Tile)> {
        (**self).pick(empty)
    }
}

/// Asks `spawner` for a tile and places it on `grid`.
///
/// The grid is only touched once the pick has been checked, so a failed pick leaves it unchanged.
pub(crate) fn spawn_tile<S: TileSpawner + ?Sized>(
    spawner: &mut S,
    grid: &mut Grid,
) -> Result<Option<(Coord2, Tile)>> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        log::warn!("Grid is full, no tile spawned");
        return Ok(None);
    }

    let Some((coords, value)) = spawner.pick(&empty) else {
        log::debug!("Spawner declined to place a tile");
        return Ok(None);
    };

    if !empty.contains(&coords) {
        return Err(GameError::InvalidCoords);
    }
    if !is_spawn_value(value) {
        return Err(GameError::InvalidTile);
    }

    grid.place(coords, value);
    log::debug!("Spawned {} at {:?}", value, coords);
    Ok(Some((coords, value)))
}
