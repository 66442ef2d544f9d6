use maze_pathfinding::{Cell, Grid, Pathfinder};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// The obstacle blocks every diagonal, so the path follows the border.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::with_blocked(3, 3, [Cell::new(1, 1)])?;
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let solution = Pathfinder::new(&grid, start, end)?.solve_with_cost()?;
    println!("Path (cost {:.3}):", solution.cost);
    for p in &solution.path {
        println!("{}", p);
    }
    Ok(())
}
