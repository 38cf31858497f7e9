//! Error types for grid construction and path queries.

use thiserror::Error;

use crate::Cell;

/// Caller-input faults. An unreachable goal is not an error: searches report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(Cell),

    #[error("endpoint {0} is blocked or outside the grid")]
    InvalidEndpoint(Cell),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("heuristic factor must be finite and non-negative")]
    InvalidHeuristicFactor,
}

pub type Result<T> = std::result::Result<T, SearchError>;
