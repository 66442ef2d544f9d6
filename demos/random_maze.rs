use maze_pathfinding::{
    maze::{generate_random_maze, DEFAULT_HEIGHT, DEFAULT_WALL_DENSITY, DEFAULT_WIDTH},
    Cell, Pathfinder, PathfindingError,
};
use rand::{rngs::StdRng, SeedableRng};

// Generates random mazes until one is solvable between its corners and prints the solution.
// Regenerating on failure is the caller's policy; the solver never retries.
fn main() -> Result<(), PathfindingError> {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Cell::new(0, 0);
    let goal = Cell::new(DEFAULT_WIDTH as i32 - 1, DEFAULT_HEIGHT as i32 - 1);
    for attempt in 1.. {
        let grid =
            generate_random_maze(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_WALL_DENSITY, &mut rng)?;
        match Pathfinder::new(&grid, start, goal)?.solve_with_cost() {
            Ok(solution) => {
                println!("{}", grid.render_path(&solution.path));
                println!(
                    "Solved maze {} with {} moves, cost {:.3}, {} nodes expanded",
                    attempt,
                    solution.moves(),
                    solution.cost,
                    solution.expanded
                );
                return Ok(());
            }
            Err(PathfindingError::NoPathFound { .. }) => println!("Maze {} has no path", attempt),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
