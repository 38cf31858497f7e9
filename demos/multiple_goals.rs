use grid_astar::{Cell, GridModel, GridSolver, PathSearch};

// In this example a path is found to one of two goals on a 3x3 grid with shape
//  ___
// |S G|
// | # |
// |  G|
//  ___
// where
// - \# marks an obstacle
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() -> grid_astar::Result<()> {
    let grid = GridModel::from_blocked_cells(3, 3, [Cell::new(1, 1)])?;
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let goals = [Cell::new(2, 0), Cell::new(2, 2)];
    if let Some((selected_goal, path)) =
        PathSearch::new().find_path_multiple_goals(start, &goals, &grid)?
    {
        println!("Selected goal: {}\n", selected_goal);
        println!("Path:");
        for p in path {
            println!("{}", p);
        }
    }
    Ok(())
}
