//! # maze_pathfinding
//!
//! Minimum-cost paths on 2-D occupancy grids with 8-directional movement. Diagonal moves
//! cost more than straight ones and may not cut through the corner of a wall: moving
//! diagonally requires both orthogonal neighbours of the source cell on that side to be
//! open. Searches use [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a
//! Euclidean heuristic, and unreachable goals are detected up front from pre-computed
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)).
//!
//! ```
//! use maze_pathfinding::{Cell, Grid, Pathfinder};
//!
//! let grid: Grid = "...\n.#.\n...".parse().unwrap();
//! let path = Pathfinder::new(&grid, Cell::new(0, 0), Cell::new(2, 2))
//!     .and_then(|pf| pf.solve())
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod action;
pub mod astar;
mod cell;
pub mod config;
pub mod error;
mod grid;
pub mod maze;
mod pathfinder;
pub mod solver;

pub use action::Action;
pub use cell::Cell;
pub use config::{SearchConfig, CARDINAL_COST, DIAGONAL_COST};
pub use error::{EndpointIssue, EndpointRole, PathfindingError, Result};
pub use grid::{CellState, Grid};
pub use pathfinder::Pathfinder;
pub use solver::{validate_path, GridSolver, Solution};
