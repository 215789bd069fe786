//! The [`Coords`] cell identifier.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D grid coordinate. Rows grow downward, columns grow rightward,
/// both 0-indexed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    pub row: i32,
    pub col: i32,
}

impl Coords {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate pair.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (d_row, d_col).
    #[inline]
    pub const fn shift(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The four cardinal neighbours, in **up, down, left, right** order.
    ///
    /// This order is load-bearing: it is the tie-break order for every
    /// search algorithm in `pathviz-paths` and the candidate order for the
    /// maze generator, so changing it changes visitation sequences.
    #[inline]
    pub fn neighbors_4(self) -> [Coords; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }
}

impl PartialOrd for Coords {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coords {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coords {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coords {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let c = Coords::new(5, 7);
        assert_eq!(
            c.neighbors_4(),
            [
                Coords::new(4, 7),
                Coords::new(6, 7),
                Coords::new(5, 6),
                Coords::new(5, 8),
            ]
        );
    }

    #[test]
    fn arithmetic() {
        let a = Coords::new(1, 2);
        let b = Coords::new(3, 4);
        assert_eq!(a + b, Coords::new(4, 6));
        assert_eq!(b - a, Coords::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coords::new(0, 3));
    }

    #[test]
    fn ordering_row_major() {
        assert!(Coords::new(0, 9) < Coords::new(1, 0));
        assert!(Coords::new(2, 3) < Coords::new(2, 4));
    }
}
