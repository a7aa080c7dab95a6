//! Connected communities of live cells.
//!
//! A community is a maximal set of live cells connected through the same
//! toroidal 8-neighborhood the stepping rule uses. Dead cells belong to no
//! community; an isolated live cell is a community of one.
//!
//! # Example
//!
//! ```
//! use toroidal_life::{count_communities, Grid};
//!
//! // Two live cells too far apart to touch, even across the wrap
//! let grid = Grid::from_cells(4, 4, &[(0, 0), (2, 2)]).unwrap();
//! assert_eq!(count_communities(&grid), 2);
//! ```

use std::collections::{HashMap, HashSet};

use crate::disjoint_set::DisjointSet;
use crate::grid::Grid;
use crate::life::toroidal_neighbors;

/// Counts the distinct communities of live cells on the board.
///
/// Builds a fresh disjoint-set over all cells, unions every live cell with
/// its live toroidal neighbors, and counts the distinct roots reachable from
/// live cells. Returns 0 when nothing is alive. Pure query; the board is
/// never mutated and nothing persists across calls.
pub fn count_communities(grid: &Grid) -> usize {
    if !grid.any_alive() {
        return 0;
    }

    let sets = live_unions(grid);
    let mut roots = HashSet::new();
    for (row, col) in live_cells(grid) {
        roots.insert(sets.find_cell(row, col));
    }
    roots.len()
}

/// Returns the size of every community, largest first.
///
/// The sum of the sizes equals the live count; an all-dead board yields an
/// empty vector.
pub fn community_sizes(grid: &Grid) -> Vec<usize> {
    if !grid.any_alive() {
        return Vec::new();
    }

    let sets = live_unions(grid);
    let mut sizes: HashMap<usize, usize> = HashMap::new();
    for (row, col) in live_cells(grid) {
        *sizes.entry(sets.find_cell(row, col)).or_default() += 1;
    }

    let mut sizes: Vec<usize> = sizes.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

/// Unions every live cell with each of its live toroidal neighbors.
fn live_unions(grid: &Grid) -> DisjointSet {
    let mut sets = DisjointSet::new(grid.rows(), grid.cols());
    for (row, col) in live_cells(grid) {
        for (nr, nc) in toroidal_neighbors(grid.rows(), grid.cols(), row, col) {
            if grid.at(nr, nc) {
                sets.union_cells(row, col, nr, nc);
            }
        }
    }
    sets
}

fn live_cells(grid: &Grid) -> impl Iterator<Item = (usize, usize)> + '_ {
    let cols = grid.cols();
    grid.cells()
        .iter()
        .enumerate()
        .filter(|&(_, &alive)| alive)
        .map(move |(idx, _)| (idx / cols, idx % cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::presets;

    #[test]
    fn test_all_dead_is_zero() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(count_communities(&grid), 0);
        assert!(community_sizes(&grid).is_empty());
    }

    #[test]
    fn test_isolated_cell_is_singleton_community() {
        let grid = Grid::from_cells(5, 5, &[(2, 2)]).unwrap();
        assert_eq!(count_communities(&grid), 1);
        assert_eq!(community_sizes(&grid), vec![1]);
    }

    #[test]
    fn test_full_board_is_one_community() {
        // Toroidal wrap connects a fully live 3x3 board into one component
        let mut grid = Grid::new(3, 3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, true).unwrap();
            }
        }
        assert_eq!(count_communities(&grid), 1);
        assert_eq!(community_sizes(&grid), vec![9]);
    }

    #[test]
    fn test_two_distant_cells_two_communities() {
        // Maximal toroidal separation on a 4x4 board: not adjacent either way
        let grid = Grid::from_cells(4, 4, &[(0, 0), (2, 2)]).unwrap();
        assert_eq!(count_communities(&grid), 2);
        assert_eq!(community_sizes(&grid), vec![1, 1]);
    }

    #[test]
    fn test_corner_cells_join_across_wrap() {
        // (0,0) and (3,3) are diagonal neighbors through the corner wrap
        let grid = Grid::from_cells(4, 4, &[(0, 0), (3, 3)]).unwrap();
        assert_eq!(count_communities(&grid), 1);
        assert_eq!(community_sizes(&grid), vec![2]);
    }

    #[test]
    fn test_diagonal_adjacency_joins() {
        let grid = Grid::from_cells(5, 5, &[(1, 1), (2, 2)]).unwrap();
        assert_eq!(count_communities(&grid), 1);
    }

    #[test]
    fn test_mixed_communities() {
        // A blinker plus a lone far-away cell
        let mut live: Vec<(usize, usize)> = presets::BLINKER.to_vec();
        live.push((5, 6));
        let grid = Grid::from_cells(8, 9, &live).unwrap();
        assert_eq!(count_communities(&grid), 2);
        assert_eq!(community_sizes(&grid), vec![3, 1]);
    }

    #[test]
    fn test_glider_is_one_community() {
        let grid = Grid::from_cells(6, 6, presets::GLIDER).unwrap();
        assert_eq!(count_communities(&grid), 1);
        assert_eq!(community_sizes(&grid), vec![5]);
    }

    #[test]
    fn test_query_does_not_mutate() {
        let grid = Grid::from_cells(5, 5, presets::GLIDER).unwrap();
        let before = grid.clone();
        count_communities(&grid);
        community_sizes(&grid);
        assert_eq!(grid, before);
    }
}
