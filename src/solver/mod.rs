use crate::astar::{astar, SearchOutcome};
use crate::config::SearchConfig;
use crate::error::{EndpointIssue, EndpointRole, PathfindingError, Result};
use crate::{Action, Cell, Grid};
use log::{debug, info, warn};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// A cost-minimal path from start to goal, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub path: Vec<Cell>,
    pub cost: f64,
    /// Number of nodes expanded by the search.
    pub expanded: usize,
}

impl Solution {
    /// Number of moves along the path.
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Rejects an endpoint that lies outside the grid or on a blocked cell.
pub fn check_endpoint(grid: &Grid, role: EndpointRole, cell: Cell) -> Result<()> {
    let issue = match grid.is_open(cell) {
        Ok(true) => return Ok(()),
        Ok(false) => EndpointIssue::Blocked,
        Err(_) => EndpointIssue::OutOfBounds,
    };
    debug!("Rejecting {} {}: {}", role, cell, issue);
    Err(PathfindingError::InvalidEndpoint { role, cell, issue })
}

pub trait GridSolver {
    fn config(&self) -> &SearchConfig;

    fn heuristic(&self, grid: &Grid, cell: &Cell, goal: &Cell) -> f64;

    /// Legal neighbours of `cell` with the cost of moving there.
    fn successors(&self, grid: &Grid, cell: &Cell) -> SmallVec<[(Cell, f64); 8]> {
        let config = self.config();
        grid.actions(*cell)
            .into_iter()
            .map(|a| (a.apply(*cell), config.step_cost(a.is_diagonal())))
            .collect()
    }

    /// Sums the step costs along `path`. Fails with [PathfindingError::InvalidCell] if two
    /// consecutive cells are not a legal single move apart.
    fn path_cost(&self, grid: &Grid, path: &[Cell]) -> Result<f64> {
        let config = self.config();
        let mut total = 0.0;
        for pair in path.windows(2) {
            match Action::between(pair[0], pair[1]) {
                Some(a) if grid.can_move(pair[0], a) => total += config.step_cost(a.is_diagonal()),
                _ => return Err(PathfindingError::InvalidCell(pair[1])),
            }
        }
        Ok(total)
    }

    /// Computes a path from start to goal. An invalid endpoint is rejected before searching
    /// and an unreachable goal is reported as [PathfindingError::NoPathFound].
    fn solve(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Solution> {
        let config = self.config();
        config.validate()?;
        check_endpoint(grid, EndpointRole::Start, start)?;
        check_endpoint(grid, EndpointRole::Goal, goal)?;
        if !config.is_admissible() {
            warn!(
                "Heuristic may overestimate with diagonal cost {} and factor {}, path is best-effort",
                config.diagonal_cost, config.heuristic_factor
            );
        }
        // Check if start and goal are on the same connected component.
        if !grid.reachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(PathfindingError::NoPathFound { start, goal });
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let outcome = astar(
            &start,
            |cell| self.successors(grid, cell),
            |cell| self.heuristic(grid, cell, &goal),
            |cell| *cell == goal,
            config.max_expansions,
        );
        match outcome {
            SearchOutcome::Found {
                path,
                cost,
                expanded,
            } => {
                debug!(
                    "Found path of {} cells with cost {:.3} after {} expansions",
                    path.len(),
                    cost,
                    expanded
                );
                Ok(Solution {
                    path,
                    cost,
                    expanded,
                })
            }
            SearchOutcome::Exhausted { expanded } => {
                warn!(
                    "Reachable goal could not be pathed to after {} expansions, are the components correct?",
                    expanded
                );
                Err(PathfindingError::NoPathFound { start, goal })
            }
            SearchOutcome::LimitReached { expanded } => {
                debug!("Giving up on {} -> {} after {} expansions", start, goal, expanded);
                Err(PathfindingError::ExpansionLimit(expanded))
            }
        }
    }

    fn get_path_single_goal(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Vec<Cell>> {
        self.solve(grid, start, goal).map(|s| s.path)
    }
}

/// Checks that every consecutive pair of cells in `path` is a legal move on `grid`.
pub fn validate_path(grid: &Grid, path: &[Cell]) -> bool {
    path.iter().all(|c| grid.is_open(*c) == Ok(true))
        && path.windows(2).all(|pair| {
            Action::between(pair[0], pair[1]).is_some_and(|a| grid.can_move(pair[0], a))
        })
}
