use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::error::{Result, SearchError};
use crate::{Cell, N_SMALLVEC_SIZE};

/// Offsets of the 4-neighbourhood in the order left, right, up, down.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// [GridModel] maintains the raw [bool] values of a [BoolGrid] that determine whether a cell is
/// blocked ([true]) or may be entered ([false]). In addition it records the 4-connected
/// components of the passable cells in a [UnionFind] structure, computed once at construction,
/// so that unreachable goals can be reported without flood-filling the grid.
///
/// The model is immutable after construction and can be shared by reference between any number
/// of searches, including concurrent ones.
#[derive(Clone, Debug)]
pub struct GridModel {
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl Default for GridModel {
    fn default() -> GridModel {
        GridModel::new(0, 0, true)
    }
}

impl GridModel {
    /// Creates a grid where every cell has the same passability.
    pub fn new(width: usize, height: usize, passable: bool) -> GridModel {
        GridModel::from_blocked_grid(BoolGrid::new(width, height, !passable))
    }

    /// Builds a grid from rows of passability flags, `rows[y][x]` describing cell `(x, y)`.
    pub fn from_passability(rows: Vec<Vec<bool>>) -> Result<GridModel> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = BoolGrid::new(width, height, false);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SearchError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, passable) in row.into_iter().enumerate() {
                grid.set(x as i32, y as i32, !passable);
            }
        }
        Ok(GridModel::from_blocked_grid(grid))
    }

    /// Creates a passable grid and blocks the given cells. Fails with [SearchError::OutOfBounds]
    /// if one of them lies outside the grid.
    pub fn from_blocked_cells<I>(width: usize, height: usize, blocked: I) -> Result<GridModel>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut grid = BoolGrid::new(width, height, false);
        for cell in blocked {
            if !grid.point_in_bounds(cell) {
                return Err(SearchError::OutOfBounds(cell));
            }
            grid.set(cell.x, cell.y, true);
        }
        Ok(GridModel::from_blocked_grid(grid))
    }

    /// Parses a text map where each string is one row. Characters equal to `blocked_marker` are
    /// blocked, every other character is passable.
    pub fn from_rows<I, S>(rows: I, blocked_marker: char) -> Result<GridModel>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let flags = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(|c| c != blocked_marker).collect())
            .collect::<Vec<Vec<bool>>>();
        GridModel::from_passability(flags)
    }

    /// Wraps a [BoolGrid] where [true] marks blocked cells.
    pub fn from_blocked_grid(grid: BoolGrid) -> GridModel {
        let components = UnionFind::new(grid.width() * grid.height());
        let mut model = GridModel { grid, components };
        model.generate_components();
        model
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.point_in_bounds(cell)
    }

    /// Returns whether `cell` may be entered, or [SearchError::OutOfBounds] if it lies outside
    /// the grid.
    pub fn is_passable(&self, cell: Cell) -> Result<bool> {
        if self.in_bounds(cell) {
            Ok(!self.grid.get_point(cell))
        } else {
            Err(SearchError::OutOfBounds(cell))
        }
    }

    /// In bounds and passable.
    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.grid.get_point(cell)
    }

    /// The in-bounds axis-aligned neighbours of `cell` in the order left, right, up, down.
    /// Passability is not checked.
    pub fn neighbors4(&self, cell: Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                Some(Cell::new(cell.x.checked_add(dx)?, cell.y.checked_add(dy)?))
            })
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    pub fn passable_count(&self) -> usize {
        (0..self.height() as i32)
            .flat_map(|y| (0..self.width() as i32).map(move |x| Cell::new(x, y)))
            .filter(|c| !self.grid.get_point(*c))
            .count()
    }

    /// Retrieves the component id a passable [Cell] belongs to, [None] for blocked or
    /// out-of-bounds cells.
    pub fn component(&self, cell: Cell) -> Option<usize> {
        self.can_move_to(cell)
            .then(|| self.components.find(self.grid.get_ix_point(&cell)))
    }

    /// Checks if start and goal are passable and on the same connected component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        match (self.component(start), self.component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Checks if start and goal are not on the same connected component.
    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Links every passable cell to its passable right and lower neighbours, which covers every
    /// 4-connected edge exactly once.
    fn generate_components(&mut self) {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let cell = Cell::new(x, y);
                if !self.can_move_to(cell) {
                    continue;
                }
                let cell_ix = self.grid.get_ix_point(&cell);
                for n in [Cell::new(x + 1, y), Cell::new(x, y + 1)] {
                    if self.can_move_to(n) {
                        let n_ix = self.grid.get_ix_point(&n);
                        self.components.union(cell_ix, n_ix);
                    }
                }
            }
        }
        debug!(
            "Generated components for {}x{} grid with {} passable cells",
            self.width(),
            self.height(),
            self.passable_count()
        );
    }
}

impl fmt::Display for GridModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let row = (0..self.width() as i32)
                .map(|x| if self.can_move_to(Cell::new(x, y)) { '.' } else { '#' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BLOCKED_MARKER;

    #[test]
    fn parse_rows() {
        let grid = GridModel::from_rows(["-X-", "---"], DEFAULT_BLOCKED_MARKER).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.is_passable(Cell::new(1, 0)), Ok(false));
        assert_eq!(grid.is_passable(Cell::new(1, 1)), Ok(true));
        assert_eq!(grid.passable_count(), 5);
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = GridModel::from_rows(["---", "--"], 'X').unwrap_err();
        assert_eq!(
            err,
            SearchError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn out_of_bounds_queries() {
        let grid = GridModel::new(2, 2, true);
        for cell in [
            Cell::new(-1, 0),
            Cell::new(0, -1),
            Cell::new(2, 0),
            Cell::new(0, 2),
        ] {
            assert_eq!(grid.is_passable(cell), Err(SearchError::OutOfBounds(cell)));
            assert!(!grid.can_move_to(cell));
        }
    }

    #[test]
    fn neighbors_are_clipped_to_bounds() {
        let grid = GridModel::new(3, 3, false);
        assert_eq!(
            grid.neighbors4(Cell::new(0, 0)).as_slice(),
            &[Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            grid.neighbors4(Cell::new(1, 1)).as_slice(),
            &[
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 0),
                Cell::new(1, 2)
            ]
        );
        // Blocked neighbours are still listed
        assert_eq!(grid.neighbors4(Cell::new(2, 2)).len(), 2);
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let grid = GridModel::from_rows([".#.", ".#."], '#').unwrap();
        let left = Cell::new(0, 0);
        assert!(grid.reachable(left, Cell::new(0, 1)));
        assert!(grid.unreachable(left, Cell::new(2, 0)));
        assert!(grid.unreachable(left, Cell::new(1, 0)));
        assert_eq!(grid.component(Cell::new(1, 1)), None);
        assert_eq!(grid.component(Cell::new(5, 5)), None);
    }

    #[test]
    fn neighbors_near_integer_limits() {
        let grid = GridModel::new(3, 3, true);
        assert!(grid.neighbors4(Cell::new(i32::MAX, 0)).is_empty());
        assert!(grid.neighbors4(Cell::new(0, i32::MAX)).is_empty());
        assert!(grid.neighbors4(Cell::new(i32::MIN, i32::MIN)).is_empty());
        assert_eq!(
            grid.neighbors4(Cell::new(-1, 0)).as_slice(),
            &[Cell::new(0, 0)]
        );
    }

    #[test]
    fn blocked_cells_constructor() {
        let grid = GridModel::from_blocked_cells(3, 2, [Cell::new(2, 1)]).unwrap();
        assert_eq!(grid.to_string(), "...\n..#\n");
        let err = GridModel::from_blocked_cells(3, 2, [Cell::new(3, 0)]).unwrap_err();
        assert_eq!(err, SearchError::OutOfBounds(Cell::new(3, 0)));
    }

    #[test]
    fn wraps_bool_grid() {
        let mut blocked = BoolGrid::new(3, 2, false);
        blocked.set(1, 0, true);
        blocked.set(1, 1, true);
        let grid = GridModel::from_blocked_grid(blocked);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.passable_count(), 4);
        assert_eq!(grid.to_string(), ".#.\n.#.\n");
        assert!(grid.unreachable(Cell::new(0, 0), Cell::new(2, 1)));
    }

    /// Diagonal contact does not join components on a 4-grid.
    #[test]
    fn diagonal_cells_are_separate() {
        // |.#|
        // |#.|
        let grid =
            GridModel::from_passability(vec![vec![true, false], vec![false, true]]).unwrap();
        assert!(grid.unreachable(Cell::new(0, 0), Cell::new(1, 1)));
    }
}
