use crate::{config::SearchConfig, solver::GridSolver, Cell, Grid};

#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub config: SearchConfig,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }

    pub fn with_config(config: SearchConfig) -> AstarSolver {
        AstarSolver { config }
    }
}

impl GridSolver for AstarSolver {
    fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The Euclidean distance times the heuristic factor.
    fn heuristic(&self, _grid: &Grid, cell: &Cell, goal: &Cell) -> f64 {
        cell.euclidean_distance(goal) * self.config.heuristic_factor
    }
}
