use crate::error::{Result, SearchError};
use crate::{solver::GridSolver, Cell, STEP_COST};

/// A* with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as
/// heuristic, which is admissible and consistent on a 4-connected unit-cost grid.
#[derive(Clone, Debug)]
pub struct PathSearch {
    /// Multiplier applied to the heuristic. Values above 1.0 turn the search into weighted A*,
    /// which expands fewer nodes but no longer guarantees a shortest path.
    pub heuristic_factor: f32,
    pub check_components: bool,
}

impl Default for PathSearch {
    fn default() -> PathSearch {
        PathSearch::new()
    }
}

impl PathSearch {
    pub fn new() -> PathSearch {
        PathSearch {
            heuristic_factor: 1.0,
            check_components: true,
        }
    }

    /// Fails with [SearchError::InvalidHeuristicFactor] for NaN, infinite or negative factors.
    pub fn with_heuristic_factor(heuristic_factor: f32) -> Result<PathSearch> {
        if !heuristic_factor.is_finite() || heuristic_factor < 0.0 {
            return Err(SearchError::InvalidHeuristicFactor);
        }
        Ok(PathSearch {
            heuristic_factor,
            ..PathSearch::new()
        })
    }
}

impl GridSolver for PathSearch {
    /// Manhattan distance times the heuristic factor.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32 {
        ((p1.manhattan_distance(p2) * STEP_COST) as f32 * self.heuristic_factor) as i32
    }

    fn check_components(&self) -> bool {
        self.check_components
    }
}
