//! Game of Life stepping over a toroidal grid.
//!
//! Applies the classic B3/S23 rule with toroidal wrap: every cell has the
//! same 8-cell Moore neighborhood, edges included.
//!
//! # Example
//!
//! ```
//! use toroidal_life::Life;
//!
//! // The default 5x5 board dies out after exactly four generations.
//! let mut life = Life::default();
//! life.steps(3);
//! assert!(life.grid().any_alive());
//! life.step();
//! assert!(!life.grid().any_alive());
//! ```

use crate::community;
use crate::error::GridError;
use crate::grid::Grid;
use crate::pattern;

/// Moore neighborhood offsets: the 8 cells around a cell.
pub(crate) const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the toroidally-wrapped neighbor coordinates of `(row, col)`.
///
/// An offset whose wrapped coordinate lands back on the cell itself (possible
/// only on 1-row or 1-column grids) is not a neighbor and is skipped; offsets
/// that wrap onto the same other cell each yield a coordinate.
pub(crate) fn toroidal_neighbors(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let nr = (row as i64 + dr as i64).rem_euclid(rows as i64) as usize;
        let nc = (col as i64 + dc as i64).rem_euclid(cols as i64) as usize;
        (nr != row || nc != col).then_some((nr, nc))
    })
}

/// A Game of Life simulation on a toroidal board.
#[derive(Debug, Clone)]
pub struct Life {
    grid: Grid,
}

impl Life {
    /// Creates a simulation over an all-dead board.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
        })
    }

    /// Wraps an existing board.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Returns the current board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current board mutably.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Consumes the simulation, returning the board.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Counts live cells among the 8 toroidal neighbors of `(row, col)`.
    ///
    /// The single wrap formula covers corners and edges identically to
    /// interior cells; out-of-range coordinates are a
    /// [`GridError::OutOfBounds`].
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.grid.state(row, col)?;
        Ok(self.neighbor_count(row, col))
    }

    fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        toroidal_neighbors(self.grid.rows(), self.grid.cols(), row, col)
            .filter(|&(nr, nc)| self.grid.at(nr, nc))
            .count() as u8
    }

    /// Computes the next generation without mutating the current board.
    ///
    /// Every cell is evaluated against the unmodified current grid:
    /// fewer than 2 live neighbors dies, more than 3 dies, exactly 3 lives,
    /// exactly 2 keeps its current state.
    pub fn next_grid(&self) -> Grid {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut next = vec![false; rows * cols];

        for row in 0..rows {
            for col in 0..cols {
                let neighbors = self.neighbor_count(row, col);
                next[row * cols + col] = match neighbors {
                    3 => true,
                    2 => self.grid.at(row, col),
                    _ => false,
                };
            }
        }

        Grid::from_flat(rows, cols, next)
    }

    /// Advances the board by one generation.
    ///
    /// The next grid is computed entirely from the current one, then swapped
    /// in as a single replacement.
    pub fn step(&mut self) {
        self.grid = self.next_grid();
    }

    /// Advances the board by `n` generations; `steps(0)` is a no-op.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Counts the communities of live cells on the current board.
    pub fn communities(&self) -> usize {
        community::count_communities(&self.grid)
    }
}

impl Default for Life {
    /// The fixed 5x5 starter board with five live cells; its activity ceases
    /// after four generations.
    fn default() -> Self {
        let mut cells = vec![false; 25];
        for &(row, col) in pattern::DEFAULT {
            cells[row * 5 + col] = true;
        }
        Self {
            grid: Grid::from_flat(5, 5, cells),
        }
    }
}
