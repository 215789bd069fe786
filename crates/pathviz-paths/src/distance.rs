use pathviz_core::Coords;

/// Manhattan (L1) distance between two cells.
///
/// The A* heuristic: admissible and consistent for 4-directional movement
/// with per-cell costs >= 1, which is all this crate supports.
#[inline]
pub fn manhattan(a: Coords, b: Coords) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
