use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of tiles, stored row-major as `(row, col)`.
///
/// Grids have value semantics: every transformation returns a new grid and never aliases the
/// source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Tile>,
}

impl Grid {
    pub fn empty(size: Coord) -> Self {
        let size = usize::from(size);
        Self {
            cells: Array2::from_elem((size, size), 0),
        }
    }

    /// Builds a grid from its rows, top to bottom.
    ///
    /// ```
    /// use twenty48_core::Grid;
    /// let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert!(Grid::from_rows(&[[2, 0, 0], [0, 4, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 || size > usize::from(Coord::MAX) {
            return Err(GameError::InvalidGridShape);
        }

        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::InvalidGridShape);
            }
            for &value in row {
                validate_tile(value)?;
            }
        }

        Ok(Self {
            cells: Array2::from_shape_fn((size, size), |(r, c)| rows[r].as_ref()[c]),
        })
    }

    pub(crate) fn from_fn(size: Coord, mut f: impl FnMut(usize, usize) -> Tile) -> Self {
        let size = usize::from(size);
        Self {
            cells: Array2::from_shape_fn((size, size), |(r, c)| f(r, c)),
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub(crate) fn place(&mut self, coords: Coord2, value: Tile) {
        self.cells[coords.to_nd_index()] = value;
    }

    pub fn row(&self, index: Coord) -> Vec<Tile> {
        self.cells.row(usize::from(index)).to_vec()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Tile>> + '_ {
        self.cells.rows().into_iter().map(|row| row.to_vec())
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().collect()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().copied()
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|((r, c), _)| (r as Coord, c as Coord))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.tiles().filter(|&value| value == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.tiles().all(|value| value != 0)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.tiles().any(|tile| tile == value)
    }

    pub fn max_tile(&self) -> Tile {
        self.tiles().max().unwrap_or(0)
    }

    pub fn sum(&self) -> u64 {
        self.tiles().map(u64::from).sum()
    }

    /// Whether any two orthogonally adjacent cells hold equal tiles that can merge.
    pub fn has_mergeable_neighbors(&self) -> bool {
        let size = self.size();
        self.cells.indexed_iter().any(|((r, c), &value)| {
            can_merge(value)
                && ForwardNeighborIter::new((r as Coord, c as Coord), size)
                    .any(|pos| self[pos] == value)
        })
    }

    /// Rotates 90° clockwise `k` times; only `k mod 4` matters.
    pub fn rotated(&self, k: usize) -> Self {
        let last = self.cells.nrows().saturating_sub(1);
        let mut grid = self.clone();
        for _ in 0..k % 4 {
            let prev = grid.cells;
            grid = Self::from_fn(self.size(), |r, c| prev[[last - c, r]]);
        }
        grid
    }

    /// Reflects the grid across its vertical axis.
    pub fn mirrored(&self) -> Self {
        let last = self.cells.nrows().saturating_sub(1);
        Self::from_fn(self.size(), |r, c| self.cells[[r, last - c]])
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(2).ilog10() as usize + 2;
        for row in self.cells.rows() {
            for &value in row {
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> Grid {
        Grid::from_rows(&[
            [2, 4, 8, 16],
            [0, 0, 0, 32],
            [0, 0, 0, 64],
            [0, 0, 0, 128],
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_rejects_bad_shapes_and_tiles() {
        let empty: [[Tile; 0]; 0] = [];

        assert_eq!(Grid::from_rows(&empty), Err(GameError::InvalidGridShape));
        assert_eq!(
            Grid::from_rows(&[vec![2, 0], vec![0]]),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(
            Grid::from_rows(&[[2, 3], [0, 0]]),
            Err(GameError::InvalidTile)
        );
        assert_eq!(
            Grid::from_rows(&[[1u32 << 31, 1 << 31], [0, 0]]),
            Err(GameError::InvalidTile)
        );
    }

    #[test]
    fn rotation_moves_left_column_to_top_row() {
        let rotated = sample().rotated(1);

        assert_eq!(rotated.row(0), [0, 0, 0, 2]);
        assert_eq!(rotated.row(3), [128, 64, 32, 16]);
    }

    #[test]
    fn rotation_round_trips_for_every_count() {
        let grid = sample();

        for k in 0..8 {
            assert_eq!(grid.rotated(k).rotated(4 - k % 4), grid);
        }
        assert_eq!(grid.rotated(4), grid);
    }

    #[test]
    fn mirror_reverses_each_row() {
        let mirrored = sample().mirrored();

        assert_eq!(mirrored.row(0), [16, 8, 4, 2]);
        assert_eq!(mirrored.mirrored(), sample());
    }

    #[test]
    fn empty_cells_are_row_major() {
        let grid = Grid::from_rows(&[[2, 0], [0, 4]]).unwrap();

        assert_eq!(grid.empty_cells(), [(0, 1), (1, 0)]);
        assert_eq!(grid.count_empty(), 2);
        assert!(!grid.is_full());
    }

    #[test]
    fn mergeable_neighbors_checks_rows_and_columns() {
        let horizontal = Grid::from_rows(&[[2, 2], [4, 8]]).unwrap();
        let vertical = Grid::from_rows(&[[2, 4], [2, 8]]).unwrap();
        let none = Grid::from_rows(&[[2, 4], [4, 2]]).unwrap();
        let zeros = Grid::from_rows(&[[0, 0], [4, 2]]).unwrap();

        assert!(horizontal.has_mergeable_neighbors());
        assert!(vertical.has_mergeable_neighbors());
        assert!(!none.has_mergeable_neighbors());
        assert!(!zeros.has_mergeable_neighbors());
    }

    #[test]
    fn get_validates_coords() {
        let grid = sample();

        assert_eq!(grid.get((0, 3)), Ok(16));
        assert_eq!(grid.get((4, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn display_pads_to_widest_tile() {
        let grid = Grid::from_rows(&[[2, 0], [0, 128]]).unwrap();

        assert_eq!(grid.to_string(), "   2   .\n   . 128\n");
    }
}
