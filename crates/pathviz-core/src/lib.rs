//! **pathviz-core** — Grid model for pathfinding visualization (core types).
//!
//! This crate provides the shared data structures the *pathviz* algorithm
//! crates operate on: the [`Coords`] cell identifier, the [`Cell`] static
//! attributes (wall / weight / start / finish), and the [`Grid`] with its
//! construction validation and painting mutators.
//!
//! Per-run search state is deliberately *not* part of a [`Cell`]; it lives
//! in `pathviz_paths::Searcher`, keyed by flat cell index, so that a grid
//! and an in-progress search can never alias each other's scratch.

pub mod cell;
pub mod coords;
pub mod grid;

pub use cell::Cell;
pub use coords::Coords;
pub use grid::{Grid, GridError, UNIT_COST, WEIGHT_COST};
