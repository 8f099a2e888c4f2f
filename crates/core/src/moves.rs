//! Moves module - shifting, merging, spawning, and terminal checks
//!
//! A move compacts every line toward one edge, merges equal neighbors once,
//! and compacts again. All four directions reduce to the same left-shift on
//! an extracted line: right uses the reversed row, up the column top-to-bottom,
//! down the column bottom-to-top.
//!
//! Functions here are pure: they take `&Grid` and return a fresh grid, so the
//! caller's copy is never touched.

use crate::grid::{Grid, LINE};
use crate::rng::SimpleRng;
use crate::types::{Direction, Tile, GRID_SIZE, START_TILES, WIN_TILE};

/// Result of shifting a grid in one direction
#[derive(Debug, Clone, Copy)]
pub struct ShiftOutcome {
    /// The grid after the shift
    pub grid: Grid,
    /// Sum of the values of every tile created by a merge
    pub score_delta: u32,
    /// Whether any cell changed (a no-op shift must not spawn a tile)
    pub moved: bool,
}

/// Create a starting grid with `START_TILES` random tiles
pub fn initialize(rng: &mut SimpleRng) -> Grid {
    let mut grid = Grid::new();
    for _ in 0..START_TILES {
        grid = spawn_tile(&grid, rng);
    }
    grid
}

/// Place one random tile on an empty cell
///
/// The cell is picked uniformly among empty cells; the value is 2 with
/// probability 0.9, otherwise 4. A full grid is returned unchanged.
pub fn spawn_tile(grid: &Grid, rng: &mut SimpleRng) -> Grid {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return *grid;
    }

    let (x, y) = empty[rng.next_range(empty.len() as u32) as usize];
    let tile: Tile = if rng.next_range(10) < 9 { 2 } else { 4 };

    let mut next = *grid;
    next.set(x, y, tile);
    next
}

/// Shift the whole grid in one direction
pub fn shift(grid: &Grid, direction: Direction) -> ShiftOutcome {
    let mut next = *grid;
    let mut score_delta = 0;

    for i in 0..GRID_SIZE {
        match direction {
            Direction::Left => {
                let mut line = next.row(i);
                score_delta += shift_line(&mut line);
                next.set_row(i, line);
            }
            Direction::Right => {
                let mut line = next.row(i);
                line.reverse();
                score_delta += shift_line(&mut line);
                line.reverse();
                next.set_row(i, line);
            }
            Direction::Up => {
                let mut line = next.column(i);
                score_delta += shift_line(&mut line);
                next.set_column(i, line);
            }
            Direction::Down => {
                let mut line = next.column(i);
                line.reverse();
                score_delta += shift_line(&mut line);
                line.reverse();
                next.set_column(i, line);
            }
        }
    }

    let moved = next != *grid;
    ShiftOutcome {
        grid: next,
        score_delta,
        moved,
    }
}

/// Shift one line toward index 0, merging equal neighbors
///
/// Returns the score delta (the sum of tiles created by merges). A tile
/// merges at most once per shift: the zero left behind by a merge blocks
/// the freshly doubled tile from merging again in the same pass.
pub fn shift_line(line: &mut [Tile; LINE]) -> u32 {
    compact(line);

    let mut delta = 0;
    for i in 0..LINE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            delta += line[i];
            line[i + 1] = 0;
        }
    }

    compact(line);
    delta
}

/// Slide every tile over the zeros toward index 0, preserving order
fn compact(line: &mut [Tile; LINE]) {
    let mut write = 0;
    for read in 0..LINE {
        if line[read] != 0 {
            if write != read {
                line[write] = line[read];
                line[read] = 0;
            }
            write += 1;
        }
    }
}

/// Check whether any move is still possible
///
/// True when any cell is empty, or any cell equals its right or bottom
/// neighbor. This is the authoritative check; it never simulates shifts.
pub fn can_move(grid: &Grid) -> bool {
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let tile = match grid.get(x, y) {
                Some(tile) => tile,
                None => continue,
            };
            if tile == 0 {
                return true;
            }
            if grid.get(x + 1, y) == Some(tile) {
                return true;
            }
            if grid.get(x, y + 1) == Some(tile) {
                return true;
            }
        }
    }
    false
}

/// Check whether the grid holds a winning tile (exactly `WIN_TILE`)
pub fn has_won(grid: &Grid) -> bool {
    grid.cells().iter().any(|&tile| tile == WIN_TILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_line_merges_each_tile_once() {
        let mut line = [2, 2, 2, 2];
        let delta = shift_line(&mut line);
        assert_eq!(line, [4, 4, 0, 0]);
        assert_eq!(delta, 8);
    }

    #[test]
    fn test_shift_line_merges_two_pairs() {
        let mut line = [2, 2, 4, 4];
        let delta = shift_line(&mut line);
        assert_eq!(line, [4, 8, 0, 0]);
        assert_eq!(delta, 12);
    }

    #[test]
    fn test_shift_line_does_not_chain_merges() {
        // The 4 made from 2+2 must not merge into the leading 4.
        let mut line = [4, 2, 2, 0];
        let delta = shift_line(&mut line);
        assert_eq!(line, [4, 4, 0, 0]);
        assert_eq!(delta, 4);
    }

    #[test]
    fn test_shift_line_merges_across_gaps() {
        let mut line = [2, 0, 0, 2];
        let delta = shift_line(&mut line);
        assert_eq!(line, [4, 0, 0, 0]);
        assert_eq!(delta, 4);
    }

    #[test]
    fn test_shift_line_no_merge_just_slides() {
        let mut line = [0, 2, 0, 4];
        let delta = shift_line(&mut line);
        assert_eq!(line, [2, 4, 0, 0]);
        assert_eq!(delta, 0);
    }

    #[test]
    fn test_shift_left() {
        let grid = Grid::from_rows([[2, 2, 4, 4], [0, 2, 0, 2], [8, 0, 0, 8], [2, 4, 2, 4]]);
        let out = shift(&grid, Direction::Left);
        assert_eq!(
            out.grid.to_rows(),
            [[4, 8, 0, 0], [4, 0, 0, 0], [16, 0, 0, 0], [2, 4, 2, 4]]
        );
        assert_eq!(out.score_delta, 32);
        assert!(out.moved);
    }

    #[test]
    fn test_shift_right() {
        let grid = Grid::from_rows([[2, 2, 4, 4], [0, 2, 0, 2], [8, 0, 0, 8], [2, 4, 2, 4]]);
        let out = shift(&grid, Direction::Right);
        assert_eq!(
            out.grid.to_rows(),
            [[0, 0, 4, 8], [0, 0, 0, 4], [0, 0, 0, 16], [2, 4, 2, 4]]
        );
        assert_eq!(out.score_delta, 32);
        assert!(out.moved);
    }

    #[test]
    fn test_shift_up() {
        let grid = Grid::from_rows([[2, 2, 0, 4], [2, 2, 0, 4], [4, 0, 2, 8], [4, 4, 2, 8]]);
        let out = shift(&grid, Direction::Up);
        assert_eq!(
            out.grid.to_rows(),
            [[4, 4, 4, 8], [8, 4, 0, 16], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(out.score_delta, 44);
        assert!(out.moved);
    }

    #[test]
    fn test_shift_down() {
        let grid = Grid::from_rows([[2, 2, 0, 4], [2, 2, 0, 4], [4, 0, 2, 8], [4, 4, 2, 8]]);
        let out = shift(&grid, Direction::Down);
        assert_eq!(
            out.grid.to_rows(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [4, 4, 0, 8], [8, 4, 4, 16]]
        );
        assert_eq!(out.score_delta, 44);
        assert!(out.moved);
    }

    #[test]
    fn test_shift_reports_no_move() {
        let grid = Grid::from_rows([[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = shift(&grid, Direction::Left);
        assert_eq!(out.grid, grid);
        assert_eq!(out.score_delta, 0);
        assert!(!out.moved);
    }

    #[test]
    fn test_shift_never_mutates_input() {
        let grid = Grid::from_rows([[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let before = grid;
        let _ = shift(&grid, Direction::Left);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_tile_fills_one_empty_cell() {
        let mut rng = SimpleRng::new(7);
        let grid = Grid::new();
        let next = spawn_tile(&grid, &mut rng);

        let filled: Vec<Tile> = next.cells().iter().copied().filter(|&t| t != 0).collect();
        assert_eq!(filled.len(), 1);
        assert!(filled[0] == 2 || filled[0] == 4);
    }

    #[test]
    fn test_spawn_tile_on_full_grid_is_identity() {
        let mut rng = SimpleRng::new(7);
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let state_before = rng.seed();
        assert_eq!(spawn_tile(&grid, &mut rng), grid);
        // No draws consumed either.
        assert_eq!(rng.seed(), state_before);
    }

    #[test]
    fn test_spawn_tile_value_odds() {
        let mut rng = SimpleRng::new(42);
        let empty = Grid::new();
        let mut twos = 0u32;
        let mut fours = 0u32;
        for _ in 0..400 {
            let next = spawn_tile(&empty, &mut rng);
            match next.cells().iter().copied().find(|&t| t != 0) {
                Some(2) => twos += 1,
                Some(4) => fours += 1,
                other => panic!("unexpected spawn value: {:?}", other),
            }
        }
        assert!(fours > 0);
        assert!(twos > fours * 3);
    }

    #[test]
    fn test_spawn_tile_is_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);
        let mut g1 = Grid::new();
        let mut g2 = Grid::new();
        for _ in 0..12 {
            g1 = spawn_tile(&g1, &mut rng1);
            g2 = spawn_tile(&g2, &mut rng2);
        }
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_initialize_spawns_start_tiles() {
        let mut rng = SimpleRng::new(99);
        let grid = initialize(&mut rng);
        let filled = grid.cells().iter().filter(|&&t| t != 0).count();
        assert_eq!(filled as u32, START_TILES);
        assert!(grid.cells().iter().all(|&t| t == 0 || t == 2 || t == 4));
    }

    #[test]
    fn test_can_move_with_empty_cell() {
        let mut grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!can_move(&grid));
        grid.set(1, 1, 0);
        assert!(can_move(&grid));
    }

    #[test]
    fn test_can_move_with_horizontal_pair() {
        let grid = Grid::from_rows([[2, 2, 4, 8], [4, 8, 2, 4], [2, 4, 8, 2], [4, 2, 4, 8]]);
        assert!(can_move(&grid));
    }

    #[test]
    fn test_can_move_with_vertical_pair() {
        let grid = Grid::from_rows([[2, 4, 2, 4], [4, 2, 4, 8], [2, 4, 2, 8], [4, 2, 4, 2]]);
        assert!(can_move(&grid));
    }

    #[test]
    fn test_has_won_checks_exact_tile() {
        let mut grid = Grid::new();
        assert!(!has_won(&grid));
        grid.set(0, 0, 1024);
        assert!(!has_won(&grid));
        grid.set(3, 3, WIN_TILE);
        assert!(has_won(&grid));
    }

    #[test]
    fn test_tiles_stay_powers_of_two() {
        let mut rng = SimpleRng::new(2026);
        let mut grid = initialize(&mut rng);
        let dirs = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ];
        for step in 0..500 {
            let out = shift(&grid, dirs[step % 4]);
            if out.moved {
                grid = spawn_tile(&out.grid, &mut rng);
            }
            assert!(grid
                .cells()
                .iter()
                .all(|&t| t == 0 || (t >= 2 && t.is_power_of_two())));
            if !can_move(&grid) {
                break;
            }
        }
    }
}
