use crate::{config::SearchConfig, solver::GridSolver, Cell, Grid};

/// Uniform-cost search: A* without a heuristic. Slower, but optimal for any diagonal cost,
/// which makes it the reference the heuristic solvers are checked against.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub config: SearchConfig,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> DijkstraSolver {
        DijkstraSolver { config }
    }
}

impl GridSolver for DijkstraSolver {
    fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn heuristic(&self, _: &Grid, _: &Cell, _: &Cell) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar::AstarSolver;

    #[test]
    fn expands_more_than_astar() {
        let grid = Grid::open(15, 15).unwrap();
        let start = Cell::new(0, 0);
        let goal = Cell::new(14, 7);
        let dijkstra = DijkstraSolver::new().solve(&grid, start, goal).unwrap();
        let astar = AstarSolver::new().solve(&grid, start, goal).unwrap();
        assert!((dijkstra.cost - astar.cost).abs() < 1e-9);
        assert!(dijkstra.expanded > astar.expanded);
    }
}
