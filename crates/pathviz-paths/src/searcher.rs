use std::fmt;

use pathviz_core::{Coords, Grid};

use crate::neighbors::Neighbors;

/// Sentinel cost meaning "never reached", standing in for +infinity.
pub const UNREACHABLE: i32 = i32::MAX;

/// The four searches the visualizer can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search: fewest cells, weights ignored.
    Bfs,
    /// Depth-first search: *a* path, not a shortest one.
    Dfs,
    /// Dijkstra: minimum total cost over unit and weighted cells.
    Dijkstra,
    /// A* with the Manhattan heuristic: same optimality as Dijkstra,
    /// usually fewer cells visited.
    AStar,
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Cells in the order each was finalized. This is the sequence the
    /// caller animates.
    pub visited: Vec<Coords>,
    /// Whether the finish was reached. [`Searcher::path`] is only
    /// meaningful when this is true.
    pub valid_path: bool,
}

/// Errors from [`Searcher::run`] and [`Searcher::path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The searcher was sized for a different grid.
    SizeMismatch {
        searcher: (i32, i32),
        grid: (i32, i32),
    },
    /// No search has been run yet.
    NoRun,
    /// The last run did not reach the finish.
    NoPath,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { searcher, grid } => write!(
                f,
                "searcher sized {}x{} but grid is {}x{}",
                searcher.0, searcher.1, grid.0, grid.1
            ),
            Self::NoRun => write!(f, "no search has been run on this searcher"),
            Self::NoPath => write!(f, "the last search found no valid path"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated path cost; BFS stores the hop count here, DFS leaves
    /// it untouched.
    pub(crate) g: i32,
    /// Heuristic estimate to the finish (A* only).
    pub(crate) h: i32,
    /// `g + h` (A* only; Dijkstra mirrors `g` here).
    pub(crate) f: i32,
    /// Predecessor as a flat cell index, `usize::MAX` for none.
    pub(crate) parent: usize,
    pub(crate) visited: bool,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            h: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            visited: false,
            generation: 0,
        }
    }
}

/// Priority-queue entry for Dijkstra / A*, ordered by `f` with the push
/// sequence number as tie-break, so cost ties resolve in insertion order
/// (which itself follows the up-down-left-right neighbor rule).
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then earliest
        // insertion, first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy)]
struct LastRun {
    finish: usize,
    valid: bool,
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Central coordinator for grid searches.
///
/// `Searcher` owns every piece of per-run scratch — costs, predecessors,
/// visited flags — in a flat array keyed by `row * cols + col`, so repeated
/// runs over the same board reuse one allocation. Stale state from earlier
/// runs is invalidated lazily by a generation counter bumped at the start
/// of every [`run`](Self::run); callers never reset anything themselves.
pub struct Searcher {
    rows: i32,
    cols: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) neighbors: Neighbors,
    last: Option<LastRun>,
}

impl Searcher {
    /// Create a searcher for `rows x cols` grids.
    pub fn new(rows: i32, cols: i32) -> Self {
        // Multiply as usize: rows * cols can exceed i32 range.
        let len = rows.max(0) as usize * cols.max(0) as usize;
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); len],
            generation: 0,
            neighbors: Neighbors::new(),
            last: None,
        }
    }

    /// Resize for a different grid, reallocating only when the new size
    /// exceeds the existing capacity; otherwise the scratch is kept and
    /// stale entries are invalidated by a generation bump.
    pub fn set_size(&mut self, rows: i32, cols: i32) {
        let new_len = rows.max(0) as usize * cols.max(0) as usize;
        self.rows = rows;
        self.cols = cols;
        self.last = None;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid dimensions this searcher is sized for, as (rows, cols).
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }

    /// Run one search over `grid`, from the grid's start to its finish.
    ///
    /// Resetting the scratch of any earlier run is this call's first
    /// action; the scratch then persists until the next `run` or
    /// [`set_size`](Self::set_size), so [`path`](Self::path) and
    /// [`cost_at`](Self::cost_at) read this run's results.
    ///
    /// Tie-breaks are fixed and reproducible: neighbors are generated
    /// up-down-left-right, the weighted frontiers resolve equal costs in
    /// insertion order, and DFS (which pushes in that order) therefore
    /// explores right-left-down-up.
    pub fn run(&mut self, algorithm: Algorithm, grid: &Grid) -> Result<SearchOutcome, SearchError> {
        if (grid.rows(), grid.cols()) != (self.rows, self.cols) {
            return Err(SearchError::SizeMismatch {
                searcher: (self.rows, self.cols),
                grid: (grid.rows(), grid.cols()),
            });
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        self.last = None;

        let outcome = match algorithm {
            Algorithm::Bfs => self.bfs(grid),
            Algorithm::Dfs => self.dfs(grid),
            Algorithm::Dijkstra => self.dijkstra(grid),
            Algorithm::AStar => self.astar(grid),
        };

        self.last = self.idx(grid.finish()).map(|finish| LastRun {
            finish,
            valid: outcome.valid_path,
        });
        Ok(outcome)
    }

    /// Reconstruct the start-to-finish path of the last run by walking the
    /// recorded predecessors backward from the finish.
    ///
    /// Fails fast instead of returning a misleading sequence: errors with
    /// [`SearchError::NoRun`] before any run and with
    /// [`SearchError::NoPath`] when the last run's `valid_path` was false.
    pub fn path(&self) -> Result<Vec<Coords>, SearchError> {
        let last = self.last.ok_or(SearchError::NoRun)?;
        if !last.valid {
            return Err(SearchError::NoPath);
        }
        let mut path = Vec::new();
        let mut ci = last.finish;
        while ci != usize::MAX {
            path.push(self.coords(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Ok(path)
    }

    /// The last run's final cost at a cell: hop count for BFS, accumulated
    /// weighted cost for Dijkstra / A*. DFS records no costs, so every cell
    /// reads as unreached after a DFS run. Returns [`UNREACHABLE`] for
    /// cells the run never reached, out-of-bounds coordinates, or before
    /// any run.
    pub fn cost_at(&self, c: Coords) -> i32 {
        match self.idx(c) {
            Some(i) if self.nodes[i].generation == self.generation && self.last.is_some() => {
                self.nodes[i].g
            }
            _ => UNREACHABLE,
        }
    }

    // -----------------------------------------------------------------------
    // Helpers for the algorithm impls
    // -----------------------------------------------------------------------

    /// Convert coordinates to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, c: Coords) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a flat index back to coordinates.
    #[inline]
    pub(crate) fn coords(&self, idx: usize) -> Coords {
        let cols = self.cols as usize;
        Coords::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Access the node at `i`, resetting it first if it still carries a
    /// previous run's state.
    #[inline]
    pub(crate) fn touch(&mut self, i: usize) -> &mut Node {
        let generation = self.generation;
        let node = &mut self.nodes[i];
        if node.generation != generation {
            *node = Node {
                generation,
                ..Node::default()
            };
        }
        node
    }

    /// Whether the cell at flat index `i` was finalized this run.
    #[inline]
    pub(crate) fn is_visited(&self, i: usize) -> bool {
        let node = &self.nodes[i];
        node.generation == self.generation && node.visited
    }
}
