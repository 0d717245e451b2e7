//! Implements the initial placement of pieces.

use crate::board::{Board, OutOfBounds, Piece, Position};

/// Places the pieces for the start of a game: one predator on each corner of the playable
/// area and one prey on every border cell alongside the playable area. The corner cells of
/// the border ring stay empty.
#[derive(Debug, Default, Copy, Clone)]
pub struct BoardSetup;

impl BoardSetup {
    pub fn new() -> Self {
        BoardSetup
    }

    /// Place the starting pieces on `board`. Cells that don't receive a piece are left as
    /// they are, so this is normally run on an empty board.
    pub fn setup(&self, board: &mut Board) -> Result<(), OutOfBounds> {
        let p1 = board.top_left();
        let p2 = board.bottom_right();

        let corners = board.positions().corners().to_vec();
        for corner in corners {
            board.set(corner, Piece::Predator)?;
        }

        for x in p1.x..=p2.x {
            board.set(Position::new(x, p1.y - 1), Piece::Prey)?;
            board.set(Position::new(x, p2.y + 1), Piece::Prey)?;
        }
        for y in p1.y..=p2.y {
            board.set(Position::new(p1.x - 1, y), Piece::Prey)?;
            board.set(Position::new(p2.x + 1, y), Piece::Prey)?;
        }
        Ok(())
    }
}
