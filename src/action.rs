use crate::Cell;
use core::fmt;

/// One of the eight moves available from a cell. `N` points toward `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Action {
    /// All actions, cardinals first. Successors are generated in this order.
    pub const ALL: [Action; 8] = [
        Action::N,
        Action::S,
        Action::E,
        Action::W,
        Action::NE,
        Action::NW,
        Action::SE,
        Action::SW,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Action::N => (0, -1),
            Action::S => (0, 1),
            Action::E => (1, 0),
            Action::W => (-1, 0),
            Action::NE => (1, -1),
            Action::NW => (-1, -1),
            Action::SE => (1, 1),
            Action::SW => (-1, 1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(self, Action::NE | Action::NW | Action::SE | Action::SW)
    }

    /// The two orthogonal offsets forming the corner of a diagonal move, e.g. `NE` from
    /// `(x, y)` passes `(x, y - 1)` and `(x + 1, y)`. [None] for cardinal moves.
    pub const fn corner_offsets(self) -> Option<[(i32, i32); 2]> {
        if self.is_diagonal() {
            let (dx, dy) = self.offset();
            Some([(0, dy), (dx, 0)])
        } else {
            None
        }
    }

    pub fn apply(self, cell: Cell) -> Cell {
        let (dx, dy) = self.offset();
        cell.offset(dx, dy)
    }

    /// The action leading from `from` to the adjacent cell `to`, if they are adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Action> {
        let delta = (to.x - from.x, to.y - from.y);
        Action::ALL.into_iter().find(|a| a.offset() == delta)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_diagonals() {
        assert_eq!(Action::ALL.iter().filter(|a| a.is_diagonal()).count(), 4);
    }

    #[test]
    fn north_east_corners() {
        let corners = Action::NE.corner_offsets().unwrap();
        assert_eq!(corners, [(0, -1), (1, 0)]);
        assert!(Action::N.corner_offsets().is_none());
    }

    #[test]
    fn between_recovers_action() {
        let c = Cell::new(4, 4);
        for a in Action::ALL {
            assert_eq!(Action::between(c, a.apply(c)), Some(a));
        }
        assert_eq!(Action::between(c, Cell::new(6, 4)), None);
        assert_eq!(Action::between(c, c), None);
    }
}
