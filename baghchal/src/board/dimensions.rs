//! Size of the playable area and the layout of the grid that stores it.

use std::{borrow::Borrow, convert::TryFrom};

use crate::board::{DimensionsError, Position};

/// Dimensions of a board: an `x_size` by `y_size` playable rectangle from `(1, 1)` to
/// `(x_size, y_size)`, surrounded by exactly one ring of border cells. Coordinates `0` and
/// `size + 1` on either axis reach the border ring; anything further out is not part of
/// the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardDimensions {
    /// Width of the playable area. This cooresponds to the `x` [`Position`].
    x_size: i32,
    /// Height of the playable area. This cooresponds to the `y` [`Position`].
    y_size: i32,
}

impl BoardDimensions {
    /// Create new [`BoardDimensions`] with the specified playable width and height.
    /// Panics if either size is 0 or if the grid including the border ring is too large to
    /// address.
    pub fn new(x_size: usize, y_size: usize) -> Self {
        match Self::try_new(x_size, y_size) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`BoardDimensions`] with the specified playable width and height.
    pub fn try_new(x_size: usize, y_size: usize) -> Result<Self, DimensionsError> {
        if x_size == 0 || y_size == 0 {
            return Err(DimensionsError::Empty { x_size, y_size });
        }
        let too_large = || DimensionsError::TooLarge { x_size, y_size };
        // Positions two cells past the playable area must still be representable.
        let x = grid_axis(x_size).ok_or_else(too_large)?;
        let y = grid_axis(y_size).ok_or_else(too_large)?;
        (x as usize + 2)
            .checked_mul(y as usize + 2)
            .ok_or_else(too_large)?;
        Ok(Self {
            x_size: x,
            y_size: y,
        })
    }

    /// Width of the playable area.
    pub fn x_size(&self) -> i32 {
        self.x_size
    }

    /// Height of the playable area.
    pub fn y_size(&self) -> i32 {
        self.y_size
    }

    /// Top left corner of the playable area, always `(1, 1)`.
    pub fn top_left(&self) -> Position {
        Position::new(1, 1)
    }

    /// Bottom right corner of the playable area.
    pub fn bottom_right(&self) -> Position {
        Position::new(self.x_size, self.y_size)
    }

    /// Width of the grid including the border ring.
    pub fn grid_width(&self) -> i32 {
        self.x_size + 2
    }

    /// Height of the grid including the border ring.
    pub fn grid_height(&self) -> i32 {
        self.y_size + 2
    }

    /// Number of cells in the grid, border ring included.
    pub fn total_size(&self) -> usize {
        self.grid_width() as usize * self.grid_height() as usize
    }

    /// Check if the given [`Position`] is addressable in the grid. If so, return it,
    /// otherwise return `None`.
    #[inline]
    fn check_bounds<B: Borrow<Position>>(&self, pos: B) -> Option<B> {
        let p = pos.borrow();
        if (0..self.grid_width()).contains(&p.x) && (0..self.grid_height()).contains(&p.y) {
            Some(pos)
        } else {
            None
        }
    }

    /// Convert a position to a linear index into grid storage.
    /// Returns `None` if the position is outside the grid.
    pub fn try_linearize(&self, pos: &Position) -> Option<usize> {
        self.check_bounds(pos)
            .map(|pos| pos.y as usize * self.grid_width() as usize + pos.x as usize)
    }

    /// Convert a linear index back into a [`Position`].
    pub fn un_linearize(&self, idx: usize) -> Position {
        let width = self.grid_width() as usize;
        Position::new((idx % width) as i32, (idx / width) as i32)
    }

    /// True if the position is part of the grid, border ring included.
    pub fn is_addressable(&self, pos: &Position) -> bool {
        self.check_bounds(pos).is_some()
    }

    /// True if the position lies within the playable rectangle.
    pub fn is_on_board(&self, pos: &Position) -> bool {
        pos.is_greater_or_equal_to(&self.top_left()) && pos.is_less_or_equal_to(&self.bottom_right())
    }

    /// True if the position is in the border ring.
    pub fn is_border(&self, pos: &Position) -> bool {
        self.is_addressable(pos) && !self.is_on_board(pos)
    }

    /// Get an iterator over rows of the grid, border ring included. Each row is an
    /// iterator over the positions of that row.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Position>> {
        let width = self.grid_width();
        (0..self.grid_height()).map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Get an iterator over every addressable position, row by row.
    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        self.iter_rows().flatten()
    }
}

impl Default for BoardDimensions {
    /// The canonical 5x5 playable area.
    fn default() -> Self {
        Self {
            x_size: 5,
            y_size: 5,
        }
    }
}

/// Converts a playable size to `i32`, leaving room for the border ring and one more step
/// past it.
fn grid_axis(size: usize) -> Option<i32> {
    i32::try_from(size).ok().filter(|v| v.checked_add(3).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            BoardDimensions::try_new(0, 5),
            Err(DimensionsError::Empty {
                x_size: 0,
                y_size: 5
            })
        );
        assert!(matches!(
            BoardDimensions::try_new(usize::max_value(), 1),
            Err(DimensionsError::TooLarge { .. })
        ));
    }

    #[test]
    fn linearize_covers_border_ring() {
        let dim = BoardDimensions::new(5, 4);
        assert_eq!(dim.total_size(), 7 * 6);
        assert_eq!(dim.try_linearize(&Position::new(0, 0)), Some(0));
        assert_eq!(dim.try_linearize(&Position::new(6, 5)), Some(dim.total_size() - 1));
        assert_eq!(dim.try_linearize(&Position::new(7, 0)), None);
        assert_eq!(dim.try_linearize(&Position::new(-1, 2)), None);
        for idx in 0..dim.total_size() {
            assert_eq!(dim.try_linearize(&dim.un_linearize(idx)), Some(idx));
        }
    }

    #[test]
    fn board_and_border() {
        let dim = BoardDimensions::default();
        assert!(dim.is_on_board(&Position::new(1, 1)));
        assert!(dim.is_on_board(&Position::new(5, 5)));
        assert!(dim.is_border(&Position::new(0, 3)));
        assert!(dim.is_border(&Position::new(6, 6)));
        assert!(!dim.is_border(&Position::new(7, 3)));
        assert_eq!(dim.iter_positions().filter(|p| dim.is_border(p)).count(), 24);
    }
}
