use std::fmt;

use crate::board::Direction;

/// The coordinates of a cell in the board grid, including the border ring around the
/// playable area.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell. Grows downwards.
    pub y: i32,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the position offset from this one by `dx` and `dy`. Coordinates wrap around at
    /// the limits of `i32`; such positions are never on the grid anyway.
    pub fn add(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Get the neighboring position in the given [`Direction`].
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.add(dx, dy)
    }

    /// Get the neighboring position opposite the given [`Direction`].
    pub fn step_back(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        self.add(-dx, -dy)
    }

    /// True if both coordinates are greater than or equal to those of `other`.
    pub fn is_greater_or_equal_to(&self, other: &Position) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// True if both coordinates are less than or equal to those of `other`.
    pub fn is_less_or_equal_to(&self, other: &Position) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// True if `x + y` is even. Diagonal lines only pass through such intersections.
    pub fn has_even_coord_sum(&self) -> bool {
        // Parity of the sum is the parity of the low bits, without overflowing.
        (self.x ^ self.y) & 1 == 0
    }
}

impl From<(i32, i32)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
