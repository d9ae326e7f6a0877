//! Grid Coordinates
//!
//! Integer `(col, row)` cell coordinate. Components are signed so a scan
//! can step one cell past the board edge before the bounds check rejects
//! it; board addressing only accepts the non-negative in-range window.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell coordinate on the board grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column index (0 = left edge)
    pub col: i32,
    /// Row index (0 = top edge)
    pub row: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The coordinate one cell away in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }

    /// The coordinate `distance` cells away in `direction`.
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dc, dr) = direction.delta();
        Self {
            col: self.col + dc * distance,
            row: self.row + dr * distance,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let c = Coord::new(2, 3);
        assert_eq!(c.step(Direction::Up), Coord::new(2, 2));
        assert_eq!(c.step(Direction::Down), Coord::new(2, 4));
        assert_eq!(c.step(Direction::Left), Coord::new(1, 3));
        assert_eq!(c.step(Direction::Right), Coord::new(3, 3));
    }

    #[test]
    fn test_offset() {
        let c = Coord::new(0, 0);
        assert_eq!(c.offset(Direction::Right, 5), Coord::new(5, 0));
        assert_eq!(c.offset(Direction::Down, 3), Coord::new(0, 3));
        // Stepping past the origin goes negative; bounds are the board's job
        assert_eq!(c.offset(Direction::Up, 1), Coord::new(0, -1));
    }

    #[test]
    fn test_offset_round_trip() {
        let c = Coord::new(4, 7);
        for dir in Direction::ALL {
            assert_eq!(c.offset(dir, 3).offset(dir.opposite(), 3), c);
        }
    }
}
