//! The [`Cell`] static attributes.

/// Static attributes of one grid cell.
///
/// A cell is never simultaneously a wall and a weight, and the start /
/// finish cells are never walls or weights; [`crate::Grid`]'s mutators
/// maintain these invariants. Per-run search scratch (visited flags,
/// distances, predecessors) is intentionally absent — it belongs to the
/// search engine, not the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The single start cell of the grid.
    pub is_start: bool,
    /// The single finish cell of the grid.
    pub is_finish: bool,
    /// Blocks traversal entirely.
    pub is_wall: bool,
    /// Traversal cost 5 instead of 1 for the weighted algorithms.
    pub is_weight: bool,
}

impl Cell {
    /// An open cell with no attributes set.
    pub const OPEN: Self = Self {
        is_start: false,
        is_finish: false,
        is_wall: false,
        is_weight: false,
    };

    /// Whether the cell can be traversed at all.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.is_wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        let c = Cell::default();
        assert_eq!(c, Cell::OPEN);
        assert!(c.is_passable());
    }
}
