use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of sliding a grid in one direction, before any tile is spawned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub grid: Grid,
    pub moved: bool,
    pub score_gain: Score,
}

/// Packs the non-zero tiles of `row` to the left, keeping their order, and pads with zeros.
pub fn compress(row: &[Tile]) -> Vec<Tile> {
    let mut packed: Vec<Tile> = row.iter().copied().filter(|&value| value != 0).collect();
    packed.resize(row.len(), 0);
    packed
}

/// Slides `row` to the left, merging each pair of equal neighbours at most once.
///
/// Returns the new row and the sum of the merged tile values.
///
/// ```
/// use twenty48_core::merge_row_left;
/// assert_eq!(merge_row_left(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
/// ```
pub fn merge_row_left(row: &[Tile]) -> (Vec<Tile>, Score) {
    let mut merged = compress(row);
    let mut gain: Score = 0;

    for i in 1..merged.len() {
        let left = merged[i - 1];
        if can_merge(left) && left == merged[i] {
            merged[i - 1] = left * 2;
            merged[i] = 0;
            gain = gain.saturating_add(left * 2);
        }
    }

    (compress(&merged), gain)
}

/// Applies [`merge_row_left`] to every row of `grid`.
pub fn move_left_core(grid: &Grid) -> MoveResult {
    let mut moved = false;
    let mut score_gain: Score = 0;

    let rows: Vec<Vec<Tile>> = grid
        .rows()
        .map(|row| {
            let (merged, gain) = merge_row_left(&row);
            moved |= merged != row;
            score_gain = score_gain.saturating_add(gain);
            merged
        })
        .collect();

    MoveResult {
        grid: Grid::from_fn(grid.size(), |r, c| rows[r][c]),
        moved,
        score_gain,
    }
}

/// Slides `grid` towards `direction` by rotating it so the move becomes a left move.
pub fn apply_direction(grid: &Grid, direction: Direction) -> MoveResult {
    let MoveResult {
        grid: moved_grid,
        moved,
        score_gain,
    } = move_left_core(&grid.rotated(direction.rotation()));

    MoveResult {
        grid: moved_grid.rotated(direction.inverse_rotation()),
        moved,
        score_gain,
    }
}

pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_direction(grid, direction).moved
}

/// Whether any direction would change the grid.
pub fn has_moves(grid: &Grid) -> bool {
    !grid.is_full() || grid.has_mergeable_neighbors()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid(rows: &[[Tile; 4]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn locked() -> Grid {
        grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
    }

    #[test]
    fn compress_is_a_stable_left_pack() {
        assert_eq!(compress(&[0, 4, 0, 2]), [4, 2, 0, 0]);
        assert_eq!(compress(&[8, 0, 8, 0]), [8, 8, 0, 0]);
        assert_eq!(compress(&[0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn compress_is_idempotent() {
        for row in [[0, 4, 0, 2], [2, 0, 0, 2], [16, 8, 0, 4], [0, 0, 0, 32]] {
            let once = compress(&row);
            assert_eq!(compress(&once), once);
        }
    }

    #[test]
    fn tiles_merge_once_per_move() {
        assert_eq!(merge_row_left(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
        assert_eq!(merge_row_left(&[4, 4, 8, 0]), (vec![8, 8, 0, 0], 8));
        assert_eq!(merge_row_left(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
    }

    #[test]
    fn merge_closes_gaps_before_comparing() {
        assert_eq!(merge_row_left(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], 4));
        assert_eq!(merge_row_left(&[0, 4, 2, 2]), (vec![4, 4, 0, 0], 4));
        assert_eq!(merge_row_left(&[2, 4, 2, 4]), (vec![2, 4, 2, 4], 0));
    }

    #[test]
    fn left_move_on_single_pair() {
        let start = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

        let result = apply_direction(&start, Direction::Left);

        assert!(result.moved);
        assert_eq!(result.score_gain, 4);
        assert_eq!(result.grid.row(0), [4, 0, 0, 0]);
        assert_eq!(result.grid.sum(), 4);
    }

    #[test]
    fn every_direction_lands_on_its_edge() {
        let start = grid(&[[0, 0, 0, 0], [0, 2, 0, 0], [0, 0, 0, 0], [0, 2, 0, 0]]);

        let up = apply_direction(&start, Direction::Up).grid;
        let down = apply_direction(&start, Direction::Down).grid;
        let left = apply_direction(&start, Direction::Left).grid;
        let right = apply_direction(&start, Direction::Right).grid;

        assert_eq!(up[(0, 1)], 4);
        assert_eq!(down[(3, 1)], 4);
        assert_eq!(left[(1, 0)], 2);
        assert_eq!(left[(3, 0)], 2);
        assert_eq!(right[(1, 3)], 2);
        assert_eq!(right[(3, 3)], 2);
        assert_eq!(up.sum(), 4);
    }

    #[test]
    fn right_move_mirrors_left_move() {
        let start = grid(&[[2, 2, 4, 0], [0, 8, 8, 8], [4, 0, 4, 2], [16, 0, 0, 16]]);

        let right = apply_direction(&start, Direction::Right);
        let left = apply_direction(&start.mirrored(), Direction::Left);

        assert_eq!(right.grid, left.grid.mirrored());
        assert_eq!(right.score_gain, left.score_gain);
        assert_eq!(right.grid.row(1), [0, 0, 8, 16]);
    }

    #[test]
    fn moves_conserve_tile_sum() {
        let start = grid(&[[2, 2, 4, 4], [8, 0, 8, 2], [2, 2, 0, 2], [4, 0, 0, 4]]);

        for dir in Direction::ALL {
            let result = apply_direction(&start, dir);
            assert_eq!(result.grid.sum(), start.sum(), "{dir}");
        }
    }

    #[test]
    fn gain_is_the_value_of_merged_tiles() {
        let start = grid(&[[2, 2, 4, 4], [8, 0, 8, 2], [2, 2, 0, 2], [4, 0, 0, 4]]);

        let left = apply_direction(&start, Direction::Left);

        assert_eq!(left.grid.row(0), [4, 8, 0, 0]);
        assert_eq!(left.grid.row(1), [16, 2, 0, 0]);
        assert_eq!(left.grid.row(2), [4, 2, 0, 0]);
        assert_eq!(left.grid.row(3), [8, 0, 0, 0]);
        assert_eq!(left.score_gain, 4 + 8 + 16 + 4 + 8);
    }

    #[test]
    fn largest_tiles_slide_but_never_merge() {
        let pair = Grid::from_rows(&[[MAX_TILE, MAX_TILE], [0, 0]]).unwrap();
        let full = Grid::from_rows(&[[MAX_TILE, MAX_TILE], [MAX_TILE, MAX_TILE]]).unwrap();

        let left = apply_direction(&pair, Direction::Left);
        let down = apply_direction(&pair, Direction::Down);

        assert!(!left.moved);
        assert_eq!(left.score_gain, 0);
        assert_eq!(down.grid.row(1), [MAX_TILE, MAX_TILE]);
        assert_eq!(down.score_gain, 0);
        assert!(!has_moves(&full));
    }

    #[test]
    fn locked_grid_never_moves() {
        let start = locked();

        for dir in Direction::ALL {
            let result = apply_direction(&start, dir);
            assert!(!result.moved);
            assert_eq!(result.score_gain, 0);
            assert_eq!(result.grid, start);
        }
        assert!(!has_moves(&start));
    }

    #[test]
    fn blocked_direction_is_not_a_move() {
        let start = grid(&[[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

        assert!(!can_move(&start, Direction::Left));
        assert!(!can_move(&start, Direction::Up));
        assert!(can_move(&start, Direction::Right));
        assert!(can_move(&start, Direction::Down));
        assert!(has_moves(&start));
    }

    #[test]
    fn input_grid_is_left_untouched() {
        let start = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]]);
        let copy = start.clone();

        let _ = apply_direction(&start, Direction::Up);

        assert_eq!(start, copy);
    }
}
