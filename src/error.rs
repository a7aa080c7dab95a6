//! Error types for toroidal-life.

use thiserror::Error;

/// Errors from grid construction, access, and replacement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Coordinate outside the grid bounds.
    #[error("cell ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// A replacement or source matrix has the wrong dimensions.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        /// Expected (rows, cols).
        expected: (usize, usize),
        /// Actual (rows, cols).
        got: (usize, usize),
    },

    /// A grid must have at least one row and one column.
    #[error("grid dimensions must be at least 1x1")]
    EmptyGrid,
}

/// Errors from parsing an initial-pattern text source.
#[derive(Debug, Error)]
pub enum PatternError {
    /// I/O failure reading the pattern source.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A dimension token was missing.
    #[error("missing {0} dimension")]
    MissingDimension(&'static str),

    /// A dimension token was not a non-negative integer.
    #[error("invalid dimension token: {0:?}")]
    InvalidDimension(String),

    /// A cell token was not a recognized boolean.
    #[error("invalid cell token: {0:?} (expected true/false/1/0)")]
    InvalidCell(String),

    /// The input ended before all cells were read.
    #[error("unexpected end of input: expected {expected} cell tokens, got {got}")]
    UnexpectedEnd {
        /// Number of cell tokens required by the header.
        expected: usize,
        /// Number of cell tokens actually present.
        got: usize,
    },

    /// The parsed dimensions could not form a grid.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}
