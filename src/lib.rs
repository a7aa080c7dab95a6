//! Conway's Game of Life on a toroidal grid, with community analysis.
//!
//! The board wraps at every edge, so all cells have exactly 8 neighbors and
//! the classic B3/S23 rule applies uniformly. On top of the simulation, the
//! crate counts "communities" — connected components of live cells under the
//! same toroidal 8-adjacency — using a weighted quick-union.
//!
//! # Example
//!
//! ```
//! use toroidal_life::{count_communities, Grid, Life};
//! use toroidal_life::pattern::presets;
//!
//! // A blinker on a 5x5 torus
//! let grid = Grid::from_cells(5, 5, presets::BLINKER).unwrap();
//! let mut life = Life::from_grid(grid);
//! assert_eq!(count_communities(life.grid()), 1);
//!
//! life.step();
//! assert_eq!(life.grid().live_count(), 3);
//! ```
//!
//! Boards come from [`Grid`] constructors, the [`pattern`] text loader, or
//! [`Life::default`] (a fixed 5x5 board that dies out after 4 generations).

mod community;
mod disjoint_set;
mod error;
mod grid;
mod life;
pub mod pattern;

pub use community::{community_sizes, count_communities};
pub use disjoint_set::DisjointSet;
pub use error::{GridError, PatternError};
pub use grid::Grid;
pub use life::Life;
