//! Rectangular grid of cells with a cached live count.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A rectangular board of cells (`true` = alive).
///
/// Dimensions are fixed at construction and every mutation keeps the cached
/// live count consistent with the cell matrix. Storage is row-major, indexed
/// by `row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Row count.
    rows: usize,
    /// Column count.
    cols: usize,
    /// Cell states, row-major.
    cells: Vec<bool>,
    /// Number of live cells.
    live: usize,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// Returns [`GridError::EmptyGrid`] when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            live: 0,
        })
    }

    /// Builds a grid from row-major nested rows.
    ///
    /// All rows must have the same length; ragged input is a
    /// [`GridError::DimensionMismatch`].
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(height * width);
        for row in &rows {
            if row.len() != width {
                return Err(GridError::DimensionMismatch {
                    expected: (height, width),
                    got: (height, row.len()),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self::from_flat(height, width, cells))
    }

    /// Builds an all-dead grid and stamps the given coordinates alive.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for &(row, col) in live {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    /// Internal constructor from pre-validated flat storage.
    pub(crate) fn from_flat(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        let live = cells.iter().filter(|&&alive| alive).count();
        Self {
            rows,
            cols,
            cells,
            live,
        }
    }

    /// Returns the row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the state of a cell.
    ///
    /// Out-of-range coordinates are a [`GridError::OutOfBounds`], never
    /// clamped or wrapped.
    pub fn state(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Sets the state of a cell, keeping the live count consistent.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        if self.cells[idx] != alive {
            self.cells[idx] = alive;
            if alive {
                self.live += 1;
            } else {
                self.live -= 1;
            }
        }
        Ok(())
    }

    /// Returns the number of live cells.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Returns true if at least one cell is alive.
    pub fn any_alive(&self) -> bool {
        self.live > 0
    }

    /// Atomically replaces the whole board with `next`.
    ///
    /// Dimensions must match the current grid; on mismatch the current grid
    /// is left untouched.
    pub fn replace(&mut self, next: Grid) -> Result<(), GridError> {
        if next.rows != self.rows || next.cols != self.cols {
            return Err(GridError::DimensionMismatch {
                expected: (self.rows, self.cols),
                got: (next.rows, next.cols),
            });
        }
        *self = next;
        Ok(())
    }

    /// Returns the raw row-major cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Returns the board as nested rows.
    pub fn as_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    /// Kills all cells.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.live = 0;
    }

    /// Randomizes cells with the given live density (0.0 to 1.0).
    pub fn randomize(&mut self, seed: u64, density: f32) {
        let mut rng = SimpleRng::new(seed);
        for cell in &mut self.cells {
            *cell = rng.next_f32() < density;
        }
        self.live = self.cells.iter().filter(|&&alive| alive).count();
    }

    /// Unchecked accessor for in-range coordinates.
    pub(crate) fn at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

/// Simple deterministic RNG for seeding boards.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn next_f32(&mut self) -> f32 {
        (self.next_u64() as f64 / u64::MAX as f64) as f32
    }
}
