use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` indexes columns and `y` indexes rows, with `y` growing
/// downward. Coordinates are signed so that a move off the edge of the grid yields a
/// cell that [Grid::in_bounds](crate::Grid::in_bounds) rejects instead of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Straight-line distance, used as the A* heuristic.
    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    /// Number of moves between two cells on an unobstructed 8-connected grid.
    pub fn chebyshev_distance(&self, other: &Cell) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell::new(x, y)
    }
}
