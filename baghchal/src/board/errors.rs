//! Errors used by the `Board` and `BoardDimensions`.

use thiserror::Error;

use crate::board::Position;

/// Error returned when [`BoardDimensions`][crate::board::BoardDimensions] cannot be built
/// from the requested size.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum DimensionsError {
    /// One of the sides of the playable area was zero.
    #[error("board dimensions must be nonzero, got {x_size}x{y_size}")]
    Empty { x_size: usize, y_size: usize },
    /// The grid including its border ring cannot be addressed.
    #[error("board dimensions too large: {x_size}x{y_size}")]
    TooLarge { x_size: usize, y_size: usize },
}

/// Error returned when writing to a position outside the allocated grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("position {pos} is outside the board grid")]
pub struct OutOfBounds {
    /// The position that was written to.
    pos: Position,
}

impl OutOfBounds {
    /// Construct an [`OutOfBounds`] error for the given position.
    pub(super) fn new(pos: Position) -> Self {
        Self { pos }
    }

    /// Get the position that was out of bounds.
    pub fn pos(&self) -> Position {
        self.pos
    }
}
