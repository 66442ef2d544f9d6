use crate::error::{EndpointRole, Result};
use crate::solver::{astar::AstarSolver, check_endpoint, GridSolver, Solution};
use crate::{Action, Cell, Grid};
use smallvec::SmallVec;

/// A search problem on a borrowed [Grid] between two fixed endpoints. The endpoints are
/// validated on construction, so an invalid start or goal never reaches the search.
///
/// The grid is only read, so any number of [Pathfinder]s may share it, including across
/// threads; every call to [solve](Self::solve) owns its own frontier.
#[derive(Clone, Debug)]
pub struct Pathfinder<'g, S = AstarSolver> {
    grid: &'g Grid,
    start: Cell,
    goal: Cell,
    solver: S,
}

impl<'g> Pathfinder<'g, AstarSolver> {
    pub fn new(grid: &'g Grid, start: Cell, goal: Cell) -> Result<Self> {
        Pathfinder::with_solver(grid, start, goal, AstarSolver::new())
    }
}

impl<'g, S: GridSolver> Pathfinder<'g, S> {
    pub fn with_solver(grid: &'g Grid, start: Cell, goal: Cell, solver: S) -> Result<Self> {
        check_endpoint(grid, EndpointRole::Start, start)?;
        check_endpoint(grid, EndpointRole::Goal, goal)?;
        Ok(Pathfinder {
            grid,
            start,
            goal,
            solver,
        })
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    pub fn actions(&self, cell: Cell) -> SmallVec<[Action; 8]> {
        self.grid.actions(cell)
    }

    pub fn transition(&self, cell: Cell, action: Action) -> Cell {
        action.apply(cell)
    }

    pub fn step_cost(&self, action: Action) -> f64 {
        self.solver.config().step_cost(action.is_diagonal())
    }

    /// Estimated remaining cost from `cell` to the goal.
    pub fn heuristic(&self, cell: Cell) -> f64 {
        self.solver.heuristic(self.grid, &cell, &self.goal)
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    /// The cells from start to goal inclusive, or [NoPathFound](crate::PathfindingError::NoPathFound).
    pub fn solve(&self) -> Result<Vec<Cell>> {
        self.solve_with_cost().map(|s| s.path)
    }

    pub fn solve_with_cost(&self) -> Result<Solution> {
        self.solver.solve(self.grid, self.start, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SearchConfig, DIAGONAL_COST};
    use crate::error::{EndpointIssue, PathfindingError};
    use crate::solver::dijkstra::DijkstraSolver;

    #[test]
    fn state_space_operations() {
        let grid = Grid::with_blocked(3, 3, [Cell::new(1, 0)]).unwrap();
        let pf = Pathfinder::new(&grid, Cell::new(0, 1), Cell::new(2, 2)).unwrap();
        assert_eq!(pf.transition(Cell::new(0, 1), Action::NE), Cell::new(1, 0));
        assert_eq!(pf.transition(Cell::new(0, 1), Action::SW), Cell::new(-1, 2));
        assert_eq!(pf.step_cost(Action::N), 1.0);
        assert_eq!(pf.step_cost(Action::SW), DIAGONAL_COST);
        assert!(pf.is_goal(Cell::new(2, 2)));
        assert!(!pf.is_goal(Cell::new(2, 1)));
        assert!((pf.heuristic(Cell::new(0, 0)) - 8f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            pf.actions(Cell::new(0, 1)).as_slice(),
            &[Action::N, Action::S, Action::E, Action::SE]
        );
    }

    #[test]
    fn rejects_endpoints_on_construction() {
        let grid = Grid::with_blocked(2, 2, [Cell::new(1, 1)]).unwrap();
        assert_eq!(
            Pathfinder::new(&grid, Cell::new(0, 0), Cell::new(1, 1)).unwrap_err(),
            PathfindingError::InvalidEndpoint {
                role: EndpointRole::Goal,
                cell: Cell::new(1, 1),
                issue: EndpointIssue::Blocked,
            }
        );
        assert!(Pathfinder::new(&grid, Cell::new(0, 2), Cell::new(0, 0)).is_err());
    }

    #[test]
    fn custom_solver() {
        let grid = Grid::open(4, 4).unwrap();
        let solver = DijkstraSolver::with_config(SearchConfig::legacy());
        let pf = Pathfinder::with_solver(&grid, Cell::new(0, 0), Cell::new(3, 3), solver).unwrap();
        assert_eq!(pf.heuristic(Cell::new(0, 0)), 0.0);
        let solution = pf.solve_with_cost().unwrap();
        assert_eq!(solution.moves(), 3);
        assert!((solution.cost - 5.1).abs() < 1e-9);
    }

    #[test]
    fn shared_grid_across_threads() {
        let grid = Grid::open(12, 12).unwrap();
        let costs: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let grid = &grid;
                    s.spawn(move || {
                        Pathfinder::new(grid, Cell::new(0, i), Cell::new(11, 11))
                            .and_then(|pf| pf.solve_with_cost())
                            .map(|sol| sol.cost)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect()
        });
        for (i, cost) in costs.iter().enumerate() {
            let dy = 11 - i as i32;
            let expected = (11 - dy) as f64 + dy as f64 * DIAGONAL_COST;
            assert!((cost - expected).abs() < 1e-9);
        }
    }
}
