use itertools::Itertools;
use log::{debug, info, warn};
use smallvec::SmallVec;

use crate::astar::SearchContext;
use crate::error::{Result, SearchError};
use crate::{Cell, GridModel, N_SMALLVEC_SIZE, STEP_COST};

pub mod astar;
pub mod dijkstra;

/// Fails with [SearchError::InvalidEndpoint] unless `cell` is in bounds and passable.
fn check_endpoint(grid: &GridModel, cell: Cell) -> Result<()> {
    match grid.is_passable(cell) {
        Ok(true) => Ok(()),
        _ => Err(SearchError::InvalidEndpoint(cell)),
    }
}

/// Checks that `path` is non-empty, only visits passable in-bounds cells and only makes
/// axis-aligned unit steps.
pub fn validate_path(grid: &GridModel, path: &[Cell]) -> bool {
    !path.is_empty()
        && path.iter().all(|c| grid.can_move_to(*c))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b): (&Cell, &Cell)| a.manhattan_distance(b) == 1)
}

/// A best-first grid search. Implementors choose the heuristic; neighbour generation, endpoint
/// validation and the search loop are shared.
pub trait GridSolver {
    /// Estimated cost from `p1` to `p2`. Must not overestimate for optimal paths.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> i32;

    /// Whether to consult the connected components of the grid before searching. When enabled,
    /// goals on another component are rejected without expanding a single node.
    fn check_components(&self) -> bool {
        true
    }

    /// The passable 4-neighbours of `node` with their step cost.
    fn successors(
        &self,
        grid: &GridModel,
        node: &Cell,
    ) -> SmallVec<[(Cell, i32); N_SMALLVEC_SIZE]> {
        grid.neighbors4(*node)
            .into_iter()
            .filter(|n| grid.can_move_to(*n))
            .map(|n| (n, STEP_COST))
            .collect()
    }

    /// Sum of the step costs along `path`. For a valid path this is its number of edges.
    fn path_cost(&self, path: &[Cell]) -> usize {
        path.iter()
            .tuple_windows()
            .map(|(a, b): (&Cell, &Cell)| (a.manhattan_distance(b) * STEP_COST) as usize)
            .sum()
    }

    /// Computes a shortest path from `start` to `goal`, both inclusive.
    ///
    /// Returns `Ok(None)` if the goal cannot be reached and
    /// [SearchError::InvalidEndpoint] if either endpoint is blocked or outside the grid.
    fn find_path(&self, start: Cell, goal: Cell, grid: &GridModel) -> Result<Option<Vec<Cell>>> {
        check_endpoint(grid, start)?;
        check_endpoint(grid, goal)?;
        if start == goal {
            return Ok(Some(vec![start]));
        }
        if self.check_components() && grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Ok(None);
        }
        debug!("Computing path from {} to {}", start, goal);
        let mut ctx = SearchContext::new();
        let result = ctx.astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((path, cost)) => {
                debug!(
                    "Found path of cost {} after expanding {} nodes",
                    cost,
                    ctx.expanded()
                );
                Ok(Some(path))
            }
            None => {
                if self.check_components() {
                    warn!(
                        "Reachable goal {} could not be pathed to, are the components correct?",
                        goal
                    );
                }
                Ok(None)
            }
        }
    }

    /// Computes a path from the start to the closest of the given goals and returns the selected
    /// goal in addition to the found path. The heuristic is the minimum over all goals. Otherwise
    /// behaves like [find_path](Self::find_path).
    fn find_path_multiple_goals(
        &self,
        start: Cell,
        goals: &[Cell],
        grid: &GridModel,
    ) -> Result<Option<(Cell, Vec<Cell>)>> {
        check_endpoint(grid, start)?;
        for goal in goals {
            check_endpoint(grid, *goal)?;
        }
        if goals.contains(&start) {
            return Ok(Some((start, vec![start])));
        }
        let goals = if self.check_components() {
            goals
                .iter()
                .copied()
                .filter(|goal| grid.reachable(start, *goal))
                .collect::<Vec<Cell>>()
        } else {
            goals.to_vec()
        };
        if goals.is_empty() {
            info!("None of the goals are reachable from {}", start);
            return Ok(None);
        }
        let mut ctx = SearchContext::new();
        let result = ctx.astar(
            &start,
            |node| self.successors(grid, node),
            |point| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(point, goal))
                    .min()
                    .unwrap_or(0)
            },
            |point| goals.contains(point),
        );
        Ok(result.and_then(|(path, _cost)| path.last().copied().map(|goal| (goal, path))))
    }
}
