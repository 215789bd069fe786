//! Grid search algorithms for pathfinding visualization.
//!
//! This crate implements the four searches the visualizer animates:
//!
//! - **Breadth-first search** — fewest-cells reachability ([`Algorithm::Bfs`])
//! - **Depth-first search** — any-path reachability ([`Algorithm::Dfs`])
//! - **Dijkstra** — weighted shortest path ([`Algorithm::Dijkstra`])
//! - **A\*** — weighted shortest path with a Manhattan heuristic
//!   ([`Algorithm::AStar`])
//!
//! All four run through [`Searcher`], which owns every piece of per-run
//! scratch (visited flags, costs, predecessors, the visitation record) in
//! flat arrays keyed by cell index, invalidated lazily with a generation
//! counter so repeated runs incur no re-zeroing. The grid itself is only
//! read — a [`Searcher`] and the board it searches can never alias.
//!
//! A run produces a [`SearchOutcome`]: the ordered visitation record (what
//! the caller animates) plus the `valid_path` found-flag. When and only
//! when `valid_path` is true, [`Searcher::path`] reconstructs the
//! start-to-finish path from the recorded predecessors.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;
mod searcher;

pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use searcher::{Algorithm, SearchError, SearchOutcome, Searcher, UNREACHABLE};
