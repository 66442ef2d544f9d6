//! Random maze generation, used as a source of grids.

use crate::error::{PathfindingError, Result};
use crate::grid::{CellState, Grid};
use log::debug;
use rand::Rng;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 30;
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;

/// Blocks every cell independently with probability `wall_density`. The top-left and
/// bottom-right corners are always left open so they can serve as endpoints. The result is
/// not guaranteed to be solvable.
pub fn generate_random_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    wall_density: f64,
    rng: &mut R,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&wall_density) {
        return Err(PathfindingError::InvalidConfig(format!(
            "wall density {} must lie within [0, 1]",
            wall_density
        )));
    }
    if width == 0 || height == 0 {
        return Err(PathfindingError::MalformedGrid(format!(
            "grid size {}x{} is empty",
            width, height
        )));
    }
    let mut rows: Vec<Vec<CellState>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    if rng.gen_bool(wall_density) {
                        CellState::Blocked
                    } else {
                        CellState::Open
                    }
                })
                .collect()
        })
        .collect();
    rows[0][0] = CellState::Open;
    rows[height - 1][width - 1] = CellState::Open;
    let grid = Grid::new(rows)?;
    debug!(
        "Generated {}x{} maze with {} walls",
        width,
        height,
        grid.blocked_count()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn corners_stay_open() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let grid = generate_random_maze(8, 5, 0.9, &mut rng).unwrap();
            assert_eq!(grid.width(), 8);
            assert_eq!(grid.height(), 5);
            assert_eq!(grid.is_open(Cell::new(0, 0)), Ok(true));
            assert_eq!(grid.is_open(Cell::new(7, 4)), Ok(true));
        }
    }

    #[test]
    fn density_extremes() {
        let mut rng = StdRng::seed_from_u64(0);
        let open = generate_random_maze(DEFAULT_WIDTH, DEFAULT_HEIGHT, 0.0, &mut rng).unwrap();
        assert_eq!(open.blocked_count(), 0);
        let full = generate_random_maze(4, 4, 1.0, &mut rng).unwrap();
        assert_eq!(full.blocked_count(), 14);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_random_maze(20, 10, DEFAULT_WALL_DENSITY, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let b = generate_random_maze(20, 10, DEFAULT_WALL_DENSITY, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_random_maze(3, 3, 1.5, &mut rng),
            Err(PathfindingError::InvalidConfig(_))
        ));
        assert!(matches!(
            generate_random_maze(0, 3, 0.3, &mut rng),
            Err(PathfindingError::MalformedGrid(_))
        ));
    }
}
