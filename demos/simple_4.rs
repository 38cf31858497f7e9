use grid_astar::{Cell, GridModel, GridSolver, PathSearch, DEFAULT_BLOCKED_MARKER};

// In this example a path is found on a 6x6 map with shape
//  ______
// |G-----|
// |XXXXX-|
// |S-X-X-|
// |--X-X-|
// |--X-X-|
// |------|
//  ______
// where
// - X marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood, so the path has to leave through the bottom row and return
// along the rightmost column.

fn main() -> grid_astar::Result<()> {
    let grid = GridModel::from_rows(
        ["G-----", "XXXXX-", "S-X-X-", "--X-X-", "--X-X-", "------"],
        DEFAULT_BLOCKED_MARKER,
    )?;
    println!("{}", grid);
    let solver = PathSearch::new();
    let start = Cell::new(0, 2);
    let goal = Cell::new(0, 0);
    match solver.find_path(start, goal, &grid)? {
        Some(path) => {
            println!("Path of {} steps:", solver.path_cost(&path));
            for p in path {
                println!("{}", p);
            }
        }
        None => println!("No path from {} to {}", start, goal),
    }
    Ok(())
}
