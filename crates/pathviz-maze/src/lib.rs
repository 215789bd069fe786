//! Maze generation for the pathfinding visualizer.
//!
//! One generator: the randomized recursive backtracker ([`MazeGen`]),
//! carving a perfect maze — every room reachable, no cycles — out of a
//! fully walled grid. Rooms live on odd (row, col) coordinates with
//! single-cell wall gaps between them; the generator returns the ordered
//! carve sequence so the caller can animate the reveal.

pub mod backtracker;

pub use backtracker::{MazeError, MazeGen};
