use crate::{solver::GridSolver, Cell};

/// Uninformed search: A* with a zero heuristic. Finds the same path lengths as
/// [PathSearch](crate::solver::astar::PathSearch) while expanding more nodes.
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Cell, _: &Cell) -> i32 {
        0
    }
}
