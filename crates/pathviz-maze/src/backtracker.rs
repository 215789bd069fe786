//! Randomized recursive-backtracker maze carving.

use std::fmt;

use pathviz_core::{Coords, Grid, GridError};
use rand::{Rng, RngExt};

/// Errors from [`MazeGen::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The carve start fell outside the grid.
    OutOfBounds(Coords),
    /// The carve start was not on the odd-odd room lattice. Carving from
    /// an even coordinate would misalign rooms and wall gaps and the
    /// result would not be a perfect maze.
    EvenStart(Coords),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "maze start {c} is out of bounds"),
            Self::EvenStart(c) => {
                write!(f, "maze start {c} must have odd row and column")
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Room candidates sit two cells away in up, down, left, right order;
/// the wall gap to carve is the cell between.
const CARVE_DIRS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// One backtracker frame: a room and the candidate rooms not yet drawn
/// from it.
struct Frame {
    candidates: Vec<(Coords, Coords)>, // (room, connecting gap)
}

/// Recursive-backtracker maze generator over an injected randomness
/// source, so tests can carve reproducibly from a seeded generator.
///
/// Operates on a grid the caller has pre-filled with walls
/// ([`Grid::fill_walls`]); rooms are carved on odd (row, col) coordinates
/// with the connecting wall gaps between them. The recursion of the
/// textbook algorithm is replaced by an explicit frame stack with
/// identical carve order, so grids hundreds of cells wide cannot overflow
/// the call stack.
pub struct MazeGen<R: Rng> {
    rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze into `grid` starting from the odd-odd room
    /// `start`, and return the carve order for animated reveal.
    ///
    /// Every carved cell — the start room first, then alternating gaps and
    /// rooms as the backtracker advances — appears exactly once, in carve
    /// order. Rooms all end up mutually reachable and the carved gaps form
    /// a spanning tree of the rooms (no cycles).
    pub fn generate(&mut self, grid: &mut Grid, start: Coords) -> Result<Vec<Coords>, MazeError> {
        if !grid.contains(start) {
            return Err(MazeError::OutOfBounds(start));
        }
        if start.row % 2 == 0 || start.col % 2 == 0 {
            return Err(MazeError::EvenStart(start));
        }

        let mut visited = vec![false; grid.len()];
        let mut order = Vec::new();
        let mut stack = Vec::new();

        stack.push(Self::enter(grid, start, &mut visited, &mut order)?);

        while let Some(frame) = stack.last_mut() {
            if frame.candidates.is_empty() {
                // Dead end: backtrack.
                stack.pop();
                continue;
            }
            // Ordered removal at a uniform index, so each remaining
            // candidate is equally likely on every draw.
            let i = self.rng.random_range(0..frame.candidates.len());
            let (room, gap) = frame.candidates.remove(i);
            // An earlier branch may have reached the room since the
            // candidates were gathered.
            if Self::is_visited(grid, &visited, room) {
                continue;
            }
            Self::carve(grid, gap, &mut visited, &mut order)?;
            let frame = Self::enter(grid, room, &mut visited, &mut order)?;
            stack.push(frame);
        }

        log::debug!("maze carved {} cells from {start}", order.len());
        Ok(order)
    }

    /// Carve and record a room, returning its frame with the candidate
    /// rooms two cells away that are in bounds and still unvisited.
    fn enter(
        grid: &mut Grid,
        room: Coords,
        visited: &mut [bool],
        order: &mut Vec<Coords>,
    ) -> Result<Frame, MazeError> {
        Self::carve(grid, room, visited, order)?;
        let candidates = CARVE_DIRS
            .iter()
            .filter_map(|&(dr, dc)| {
                let target = room.shift(dr, dc);
                (grid.contains(target) && !Self::is_visited(grid, visited, target))
                    .then(|| (target, room.shift(dr / 2, dc / 2)))
            })
            .collect();
        Ok(Frame { candidates })
    }

    fn carve(
        grid: &mut Grid,
        c: Coords,
        visited: &mut [bool],
        order: &mut Vec<Coords>,
    ) -> Result<(), MazeError> {
        grid.clear_wall(c)
            .map_err(|_: GridError| MazeError::OutOfBounds(c))?;
        if let Some(i) = grid.index(c) {
            visited[i] = true;
        }
        order.push(c);
        Ok(())
    }

    fn is_visited(grid: &Grid, visited: &[bool], c: Coords) -> bool {
        grid.index(c).is_some_and(|i| visited[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_paths::{Algorithm, Searcher};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn walled_21x21() -> Grid {
        let mut grid = Grid::new(21, 21, Coords::new(1, 1), Coords::new(19, 19)).unwrap();
        grid.fill_walls();
        grid
    }

    #[test]
    fn rejects_bad_starts() {
        let mut grid = walled_21x21();
        let mut mazegen = MazeGen::new(rand::rng());
        assert_eq!(
            mazegen.generate(&mut grid, Coords::new(30, 1)),
            Err(MazeError::OutOfBounds(Coords::new(30, 1)))
        );
        assert_eq!(
            mazegen.generate(&mut grid, Coords::new(2, 1)),
            Err(MazeError::EvenStart(Coords::new(2, 1)))
        );
    }

    #[test]
    fn carve_count_is_spanning_tree() {
        let mut grid = walled_21x21();
        let mut mazegen = MazeGen::new(rand::rng());
        let order = mazegen.generate(&mut grid, Coords::new(1, 1)).unwrap();

        // 10x10 rooms on the odd-odd lattice, connected by rooms-1 gaps.
        let rooms = 10 * 10;
        assert_eq!(order.len(), 2 * rooms - 1);

        // Each cell is carved exactly once, starting with the start room.
        assert_eq!(order[0], Coords::new(1, 1));
        let mut seen = std::collections::HashSet::new();
        assert!(order.iter().all(|c| seen.insert(*c)));

        // Lattice corners (even-even) are never carved.
        for r in (0..21).step_by(2) {
            for c in (0..21).step_by(2) {
                assert!(grid.is_wall(Coords::new(r, c)));
            }
        }
    }

    #[test]
    fn every_room_is_reachable() {
        let mut grid = walled_21x21();
        let mut mazegen = MazeGen::new(rand::rng());
        mazegen.generate(&mut grid, Coords::new(1, 1)).unwrap();

        let mut s = Searcher::new(21, 21);
        for r in (1..21).step_by(2) {
            for c in (1..21).step_by(2) {
                let room = Coords::new(r, c);
                if room == grid.start() {
                    continue;
                }
                grid.move_finish(room).unwrap();
                let outcome = s.run(Algorithm::Bfs, &grid).unwrap();
                assert!(outcome.valid_path, "room {room} unreachable");
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let carve = |seed: u64| {
            let mut grid = walled_21x21();
            let mut mazegen = MazeGen::new(StdRng::seed_from_u64(seed));
            mazegen.generate(&mut grid, Coords::new(1, 1)).unwrap()
        };
        assert_eq!(carve(42), carve(42));
        assert_ne!(carve(42), carve(43));
    }
}
