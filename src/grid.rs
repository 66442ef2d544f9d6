use crate::action::Action;
use crate::error::{PathfindingError, Result};
use crate::Cell;
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    Open,
    Blocked,
}

impl CellState {
    pub fn is_blocked(self) -> bool {
        self == CellState::Blocked
    }
}

/// [Grid] stores occupancy in a [BoolGrid] where [true] marks a blocked cell, together
/// with connected components kept in a [UnionFind] structure so that searches towards an
/// unreachable goal can be rejected without flood-filling. A grid is immutable once built:
/// regenerating a maze produces a new [Grid].
#[derive(Clone, Debug)]
pub struct Grid {
    grid: BoolGrid,
    components: UnionFind<usize>,
}

impl Grid {
    /// Builds a grid from rows of cell states. Every row must have the same non-zero length.
    pub fn new(rows: Vec<Vec<CellState>>) -> Result<Grid> {
        let height = rows.len();
        if height == 0 {
            return Err(PathfindingError::MalformedGrid("grid has no rows".to_owned()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(PathfindingError::MalformedGrid("grid has empty rows".to_owned()));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PathfindingError::MalformedGrid(format!(
                "row {} has length {}, expected {}",
                y,
                row.len(),
                width
            )));
        }
        let mut grid = BoolGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            for (x, state) in row.iter().enumerate() {
                grid.set(x as i32, y as i32, state.is_blocked());
            }
        }
        Ok(Grid::from_bool_grid(grid))
    }

    /// Builds a grid from rows of booleans, [true] meaning blocked.
    pub fn from_bools(rows: Vec<Vec<bool>>) -> Result<Grid> {
        Grid::new(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|b| if b { CellState::Blocked } else { CellState::Open })
                        .collect()
                })
                .collect(),
        )
    }

    /// A grid without obstacles.
    pub fn open(width: usize, height: usize) -> Result<Grid> {
        Grid::with_blocked(width, height, core::iter::empty())
    }

    /// A grid of the given size in which exactly the listed cells are blocked.
    pub fn with_blocked<I>(width: usize, height: usize, blocked: I) -> Result<Grid>
    where
        I: IntoIterator<Item = Cell>,
    {
        if width == 0 || height == 0 {
            return Err(PathfindingError::MalformedGrid(format!(
                "grid size {}x{} is empty",
                width, height
            )));
        }
        let mut grid = BoolGrid::new(width, height, false);
        for cell in blocked {
            if cell.x < 0 || cell.y < 0 || cell.x >= width as i32 || cell.y >= height as i32 {
                return Err(PathfindingError::InvalidCell(cell));
            }
            grid.set(cell.x, cell.y, true);
        }
        Ok(Grid::from_bool_grid(grid))
    }

    fn from_bool_grid(grid: BoolGrid) -> Grid {
        let mut base_grid = Grid {
            components: UnionFind::new(grid.width() * grid.height()),
            grid,
        };
        base_grid.generate_components();
        base_grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < self.width() as i32
            && cell.y < self.height() as i32
    }

    /// Fails with [PathfindingError::InvalidCell] when `cell` is outside the grid.
    pub fn is_open(&self, cell: Cell) -> Result<bool> {
        self.state(cell).map(|s| s == CellState::Open)
    }

    pub fn state(&self, cell: Cell) -> Result<CellState> {
        if !self.in_bounds(cell) {
            return Err(PathfindingError::InvalidCell(cell));
        }
        Ok(if self.blocked_unchecked(cell) {
            CellState::Blocked
        } else {
            CellState::Open
        })
    }

    /// Must only be called with in-bounds cells.
    fn blocked_unchecked(&self, cell: Cell) -> bool {
        self.grid.get(cell.x, cell.y)
    }

    fn open_in_bounds(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked_unchecked(cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let w = self.width() as i32;
        (0..self.height() as i32).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|c| !self.blocked_unchecked(*c))
    }

    pub fn blocked_count(&self) -> usize {
        self.cells().filter(|c| self.blocked_unchecked(*c)).count()
    }

    /// Whether `action` is a legal move from `cell`: the destination is in bounds and open
    /// and, for diagonals, both orthogonal neighbours of `cell` forming the corner are open.
    /// Only the source cell's neighbours are consulted.
    pub fn can_move(&self, cell: Cell, action: Action) -> bool {
        if !self.open_in_bounds(action.apply(cell)) {
            return false;
        }
        match action.corner_offsets() {
            Some(corners) => corners
                .iter()
                .all(|&(dx, dy)| self.open_in_bounds(cell.offset(dx, dy))),
            None => true,
        }
    }

    /// The legal actions from `cell`, in [Action::ALL] order.
    pub fn actions(&self, cell: Cell) -> SmallVec<[Action; 8]> {
        Action::ALL
            .into_iter()
            .filter(|a| self.can_move(cell, *a))
            .collect()
    }

    fn ix(&self, cell: Cell) -> usize {
        cell.y as usize * self.width() + cell.x as usize
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn component(&self, cell: Cell) -> Result<usize> {
        if !self.in_bounds(cell) {
            return Err(PathfindingError::InvalidCell(cell));
        }
        Ok(self.components.find(self.ix(cell)))
    }

    /// Checks if start and goal are open and on the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        if self.open_in_bounds(start) && self.open_in_bounds(goal) {
            self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            false
        }
    }

    /// Links up open neighbours into components. Legal moves are symmetric under the corner
    /// rule, so looking east and south of every cell covers every edge.
    fn generate_components(&mut self) {
        debug!(
            "Generating connected components for {}x{} grid",
            self.width(),
            self.height()
        );
        let cells: Vec<Cell> = self.open_cells().collect();
        for cell in cells {
            let parent_ix = self.ix(cell);
            for action in [Action::E, Action::S, Action::SE, Action::SW] {
                if self.can_move(cell, action) {
                    let ix = self.ix(action.apply(cell));
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// Renders the grid with `S` and `G` on the path ends and `*` on the cells between.
    pub fn render_path(&self, path: &[Cell]) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let cell = Cell::new(x, y);
                let c = if path.first() == Some(&cell) {
                    'S'
                } else if path.last() == Some(&cell) {
                    'G'
                } else if path.contains(&cell) {
                    '*'
                } else if self.blocked_unchecked(cell) {
                    '#'
                } else {
                    '.'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

/// Parses one row per line, `#` for blocked and `.` or a space for open cells.
impl FromStr for Grid {
    type Err = PathfindingError;

    fn from_str(s: &str) -> Result<Grid> {
        let rows = s
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.trim_end_matches('\r')
                    .chars()
                    .enumerate()
                    .map(|(x, c)| match c {
                        '#' => Ok(CellState::Blocked),
                        '.' | ' ' => Ok(CellState::Open),
                        other => Err(PathfindingError::MalformedGrid(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, x, y
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Grid::new(rows)
    }
}
