//! The [`Grid`] board: a row-major rectangle of [`Cell`]s with exactly one
//! start and one finish, plus the painting mutators the interactive board
//! exposes (wall / weight toggling, endpoint dragging).

use std::fmt;

use crate::cell::Cell;
use crate::coords::Coords;

/// Traversal cost of a plain cell.
pub const UNIT_COST: i32 = 1;
/// Traversal cost of a weighted cell.
pub const WEIGHT_COST: i32 = 5;

/// Errors from grid construction and the painting mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns were not strictly positive.
    ZeroSize { rows: i32, cols: i32 },
    /// The cell count would exceed [`Grid::MAX_CELLS`].
    TooLarge { rows: i32, cols: i32 },
    /// A coordinate fell outside the grid. Never silently clamped.
    OutOfBounds(Coords),
    /// Start and finish would occupy the same cell.
    EndpointsCoincide(Coords),
    /// A wall or weight toggle targeted the start or finish cell.
    EndpointCell(Coords),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize { rows, cols } => {
                write!(f, "grid size must be positive, got {rows}x{cols}")
            }
            Self::TooLarge { rows, cols } => {
                write!(
                    f,
                    "grid size {rows}x{cols} exceeds {} cells",
                    Grid::MAX_CELLS
                )
            }
            Self::OutOfBounds(c) => write!(f, "coordinates {c} are out of bounds"),
            Self::EndpointsCoincide(c) => {
                write!(f, "start and finish cannot both be {c}")
            }
            Self::EndpointCell(c) => {
                write!(f, "cell {c} is the start or finish and cannot be painted")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size board of cells, row-major.
///
/// The grid owns the single source of truth for the start and finish
/// positions; the invariants — one start, one finish, never the same cell,
/// endpoints never walls or weights, a cell never both wall and weight —
/// hold after construction and after every mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: Coords,
    finish: Coords,
}

impl Grid {
    /// Upper bound on `rows * cols`, keeping every flat index within
    /// `i32` range.
    pub const MAX_CELLS: usize = i32::MAX as usize;

    /// Build a `rows x cols` grid of open cells with the given start and
    /// finish marked.
    ///
    /// Rejects non-positive dimensions, cell counts beyond
    /// [`MAX_CELLS`](Self::MAX_CELLS), out-of-bounds endpoints, and
    /// coinciding endpoints. Validation happens before the cells are
    /// allocated.
    pub fn new(rows: i32, cols: i32, start: Coords, finish: Coords) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::ZeroSize { rows, cols });
        }
        // Multiply as usize: rows * cols can exceed i32 range.
        let len = rows as usize * cols as usize;
        if len > Self::MAX_CELLS {
            return Err(GridError::TooLarge { rows, cols });
        }
        let in_bounds = |c: Coords| c.row >= 0 && c.row < rows && c.col >= 0 && c.col < cols;
        if !in_bounds(start) {
            return Err(GridError::OutOfBounds(start));
        }
        if !in_bounds(finish) {
            return Err(GridError::OutOfBounds(finish));
        }
        if start == finish {
            return Err(GridError::EndpointsCoincide(start));
        }
        let mut grid = Self {
            rows,
            cols,
            cells: vec![Cell::OPEN; len],
            start,
            finish,
        };
        grid.cell_mut(start).is_start = true;
        grid.cell_mut(finish).is_finish = true;
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells. Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the coordinates fall inside the grid.
    #[inline]
    pub fn contains(&self, c: Coords) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Convert coordinates to a flat row-major index.
    /// Returns `None` when out of bounds.
    #[inline]
    pub fn index(&self, c: Coords) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a flat index back to coordinates.
    #[inline]
    pub fn coords(&self, idx: usize) -> Coords {
        let cols = self.cols as usize;
        Coords::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at the given coordinates, or `None` when out of bounds.
    #[inline]
    pub fn cell(&self, c: Coords) -> Option<&Cell> {
        self.index(c).map(|i| &self.cells[i])
    }

    /// The start coordinates.
    #[inline]
    pub fn start(&self) -> Coords {
        self.start
    }

    /// The finish coordinates.
    #[inline]
    pub fn finish(&self) -> Coords {
        self.finish
    }

    /// Traversal cost of entering the cell: [`WEIGHT_COST`] for weighted
    /// cells, [`UNIT_COST`] otherwise. Walls have no cost; callers exclude
    /// them before asking.
    #[inline]
    pub fn cost(&self, c: Coords) -> i32 {
        match self.cell(c) {
            Some(cell) if cell.is_weight => WEIGHT_COST,
            _ => UNIT_COST,
        }
    }

    /// Whether the cell at `c` is a wall. Out-of-bounds counts as a wall.
    #[inline]
    pub fn is_wall(&self, c: Coords) -> bool {
        self.cell(c).is_none_or(|cell| cell.is_wall)
    }

    fn cell_mut(&mut self, c: Coords) -> &mut Cell {
        let i = c.row as usize * self.cols as usize + c.col as usize;
        &mut self.cells[i]
    }

    fn checked_cell_mut(&mut self, c: Coords) -> Result<&mut Cell, GridError> {
        let i = self.index(c).ok_or(GridError::OutOfBounds(c))?;
        Ok(&mut self.cells[i])
    }

    // -----------------------------------------------------------------------
    // Painting mutators
    // -----------------------------------------------------------------------

    /// Flip the wall flag at `c`, clearing any weight there.
    ///
    /// Rejected on the start or finish cell.
    pub fn toggle_wall(&mut self, c: Coords) -> Result<(), GridError> {
        let cell = self.checked_cell_mut(c)?;
        if cell.is_start || cell.is_finish {
            return Err(GridError::EndpointCell(c));
        }
        cell.is_wall = !cell.is_wall;
        cell.is_weight = false;
        Ok(())
    }

    /// Flip the weight flag at `c`, clearing any wall there.
    ///
    /// Rejected on the start or finish cell.
    pub fn toggle_weight(&mut self, c: Coords) -> Result<(), GridError> {
        let cell = self.checked_cell_mut(c)?;
        if cell.is_start || cell.is_finish {
            return Err(GridError::EndpointCell(c));
        }
        cell.is_weight = !cell.is_weight;
        cell.is_wall = false;
        Ok(())
    }

    /// Drag the start to `to`, clearing any wall or weight there.
    ///
    /// Rejected out of bounds or onto the finish cell. Moving onto the
    /// current start position is a no-op.
    pub fn move_start(&mut self, to: Coords) -> Result<(), GridError> {
        if !self.contains(to) {
            return Err(GridError::OutOfBounds(to));
        }
        if to == self.finish {
            return Err(GridError::EndpointsCoincide(to));
        }
        let from = self.start;
        self.cell_mut(from).is_start = false;
        let dst = self.cell_mut(to);
        dst.is_start = true;
        dst.is_wall = false;
        dst.is_weight = false;
        self.start = to;
        Ok(())
    }

    /// Drag the finish to `to`, clearing any wall or weight there.
    ///
    /// Rejected out of bounds or onto the start cell.
    pub fn move_finish(&mut self, to: Coords) -> Result<(), GridError> {
        if !self.contains(to) {
            return Err(GridError::OutOfBounds(to));
        }
        if to == self.start {
            return Err(GridError::EndpointsCoincide(to));
        }
        let from = self.finish;
        self.cell_mut(from).is_finish = false;
        let dst = self.cell_mut(to);
        dst.is_finish = true;
        dst.is_wall = false;
        dst.is_weight = false;
        self.finish = to;
        Ok(())
    }

    /// Clear any wall and weight at `c`, leaving the cell open.
    ///
    /// Unlike [`toggle_wall`](Self::toggle_wall) this is idempotent and
    /// permitted on the endpoints (where it is a no-op), which is what a
    /// maze carver needs.
    pub fn clear_wall(&mut self, c: Coords) -> Result<(), GridError> {
        let cell = self.checked_cell_mut(c)?;
        cell.is_wall = false;
        cell.is_weight = false;
        Ok(())
    }

    /// Wall every cell except the start and finish.
    ///
    /// This is the precondition of maze generation: the generator carves
    /// passages out of a fully walled board.
    pub fn fill_walls(&mut self) {
        for cell in &mut self.cells {
            if cell.is_start || cell.is_finish {
                continue;
            }
            cell.is_wall = true;
            cell.is_weight = false;
        }
    }

    /// Clear every wall and weight, keeping the endpoints where they are.
    pub fn clear_walls_and_weights(&mut self) {
        for cell in &mut self.cells {
            cell.is_wall = false;
            cell.is_weight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Grid {
        Grid::new(3, 3, Coords::new(0, 0), Coords::new(2, 2)).unwrap()
    }

    #[test]
    fn construction_marks_endpoints() {
        let g = small();
        assert!(g.cell(Coords::new(0, 0)).unwrap().is_start);
        assert!(g.cell(Coords::new(2, 2)).unwrap().is_finish);
        assert_eq!(g.start(), Coords::new(0, 0));
        assert_eq!(g.finish(), Coords::new(2, 2));
        assert_eq!(g.len(), 9);
    }

    #[test]
    fn construction_rejects_bad_input() {
        let s = Coords::new(0, 0);
        assert_eq!(
            Grid::new(0, 5, s, Coords::new(0, 1)),
            Err(GridError::ZeroSize { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(3, 3, s, Coords::new(3, 3)),
            Err(GridError::OutOfBounds(Coords::new(3, 3)))
        );
        assert_eq!(Grid::new(3, 3, s, s), Err(GridError::EndpointsCoincide(s)));
    }

    #[test]
    fn construction_rejects_oversized_grids_without_overflow() {
        // 65536 * 65536 overflows i32; the usize cell count is checked
        // against MAX_CELLS before anything is allocated.
        let s = Coords::new(0, 0);
        let f = Coords::new(1, 1);
        assert_eq!(
            Grid::new(65_536, 65_536, s, f),
            Err(GridError::TooLarge {
                rows: 65_536,
                cols: 65_536,
            })
        );
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(4, 7, Coords::new(0, 0), Coords::new(3, 6)).unwrap();
        let c = Coords::new(2, 5);
        let i = g.index(c).unwrap();
        assert_eq!(i, 19);
        assert_eq!(g.coords(i), c);
        assert_eq!(g.index(Coords::new(-1, 0)), None);
        assert_eq!(g.index(Coords::new(0, 7)), None);
    }

    #[test]
    fn wall_and_weight_are_mutually_exclusive() {
        let mut g = small();
        let c = Coords::new(1, 1);
        g.toggle_wall(c).unwrap();
        assert!(g.is_wall(c));
        g.toggle_weight(c).unwrap();
        let cell = *g.cell(c).unwrap();
        assert!(!cell.is_wall);
        assert!(cell.is_weight);
        assert_eq!(g.cost(c), WEIGHT_COST);
        g.toggle_wall(c).unwrap();
        assert!(g.is_wall(c));
        assert!(!g.cell(c).unwrap().is_weight);
    }

    #[test]
    fn painting_endpoints_is_rejected() {
        let mut g = small();
        assert_eq!(
            g.toggle_wall(Coords::new(0, 0)),
            Err(GridError::EndpointCell(Coords::new(0, 0)))
        );
        assert_eq!(
            g.toggle_weight(Coords::new(2, 2)),
            Err(GridError::EndpointCell(Coords::new(2, 2)))
        );
    }

    #[test]
    fn out_of_bounds_is_rejected_not_clamped() {
        let mut g = small();
        let c = Coords::new(3, 0);
        assert_eq!(g.toggle_wall(c), Err(GridError::OutOfBounds(c)));
        assert_eq!(g.move_start(c), Err(GridError::OutOfBounds(c)));
    }

    #[test]
    fn move_start_clears_destination_and_keeps_invariant() {
        let mut g = small();
        let to = Coords::new(1, 1);
        g.toggle_wall(to).unwrap();
        g.move_start(to).unwrap();
        let cell = *g.cell(to).unwrap();
        assert!(cell.is_start && !cell.is_wall && !cell.is_weight);
        assert!(!g.cell(Coords::new(0, 0)).unwrap().is_start);
        assert_eq!(g.start(), to);
        // Onto the finish: rejected.
        assert_eq!(
            g.move_start(Coords::new(2, 2)),
            Err(GridError::EndpointsCoincide(Coords::new(2, 2)))
        );
    }

    #[test]
    fn move_finish_rejects_start_cell() {
        let mut g = small();
        assert_eq!(
            g.move_finish(Coords::new(0, 0)),
            Err(GridError::EndpointsCoincide(Coords::new(0, 0)))
        );
        g.move_finish(Coords::new(1, 2)).unwrap();
        assert_eq!(g.finish(), Coords::new(1, 2));
        assert!(!g.cell(Coords::new(2, 2)).unwrap().is_finish);
    }

    #[test]
    fn fill_walls_spares_endpoints() {
        let mut g = small();
        g.toggle_weight(Coords::new(1, 0)).unwrap();
        g.fill_walls();
        assert!(!g.is_wall(g.start()));
        assert!(!g.is_wall(g.finish()));
        assert!(g.is_wall(Coords::new(1, 0)));
        assert!(!g.cell(Coords::new(1, 0)).unwrap().is_weight);
        g.clear_walls_and_weights();
        assert!((0..3).all(|r| (0..3).all(|c| !g.is_wall(Coords::new(r, c)))));
    }

    #[test]
    fn out_of_bounds_counts_as_wall() {
        let g = small();
        assert!(g.is_wall(Coords::new(-1, 0)));
        assert_eq!(g.cost(Coords::new(1, 1)), UNIT_COST);
    }
}
