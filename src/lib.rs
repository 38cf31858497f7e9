//! # grid_astar
//!
//! Shortest paths on static, 4-connected grids using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic. Every
//! step has unit cost. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! A [GridModel] is immutable once built and is only borrowed by searches, so one grid can serve
//! any number of searches, including concurrent ones. All per-search state (open set, closed set,
//! costs and predecessors) is allocated by the search itself and dropped when it returns.
//!
//! ```
//! use grid_astar::{Cell, GridModel, GridSolver, PathSearch, DEFAULT_BLOCKED_MARKER};
//!
//! let grid = GridModel::from_rows(["S-X", "--X", "---"], DEFAULT_BLOCKED_MARKER).unwrap();
//! let path = PathSearch::new()
//!     .find_path(Cell::new(0, 0), Cell::new(2, 2), &grid)
//!     .unwrap()
//!     .expect("goal is reachable");
//! assert_eq!(path.len(), 5);
//! ```
pub mod astar;
pub mod error;
pub mod grid_model;
pub mod solver;

/// Grid coordinate. Signed components keep neighbours of border cells representable, so they are
/// rejected by bounds checks instead of wrapping.
pub use grid_util::Point as Cell;
pub use error::{Result, SearchError};
pub use grid_model::GridModel;
pub use solver::{astar::PathSearch, dijkstra::DijkstraSolver, validate_path, GridSolver};

/// Character marking a blocked cell in text maps.
pub const DEFAULT_BLOCKED_MARKER: char = 'X';

/// Cost of a single axis-aligned step.
pub const STEP_COST: i32 = 1;

/// Inline capacity of neighbour lists; a 4-grid cell never has more.
pub const N_SMALLVEC_SIZE: usize = 4;
