//! Storage for the cells of the board, border ring included.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{BoardDimensions, Piece, Position};

/// Grid storage owned by a [`Board`][crate::board::Board]. Every cell holds at most one
/// piece. Cloning the grid deep-copies the cells.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: BoardDimensions,
    /// Cells that make up this board, `None` where the cell is vacant.
    cells: Box<[Option<Piece>]>,
}

impl Grid {
    pub(super) fn new(dim: BoardDimensions) -> Self {
        let cells = vec![None; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Position`].
    pub(super) fn get<B: Borrow<Position>>(&self, pos: B) -> Option<&Option<Piece>> {
        self.dim
            .try_linearize(pos.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Position`].
    pub(super) fn get_mut<B: Borrow<Position>>(
        &mut self,
        pos: B,
    ) -> Option<&mut Option<Piece>> {
        self.dim
            .try_linearize(pos.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Vacate every cell.
    pub(super) fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }
}

impl<B: Borrow<Position>> Index<B> for Grid {
    type Output = Option<Piece>;

    fn index(&self, pos: B) -> &Self::Output {
        self.get(pos).expect("position out of bounds")
    }
}

impl<B: Borrow<Position>> IndexMut<B> for Grid {
    fn index_mut(&mut self, pos: B) -> &mut Self::Output {
        self.get_mut(pos).expect("position out of bounds")
    }
}
