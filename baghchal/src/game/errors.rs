use thiserror::Error;

use crate::board::{Move, Piece};

/// Reason why a side could not move.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMoveReason {
    /// The game is already over.
    #[error("the game is already over")]
    AlreadyOver,

    /// The side tried to move when it was not its turn.
    #[error("side attempted to move out of turn")]
    OutOfTurn,

    /// The move is not legal for the piece at its start.
    #[error("the move is not legal")]
    IllegalMove,
}

/// Error returned when a move or pass is rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{side} could not move: {reason}")]
pub struct MoveError {
    /// Why the move was rejected.
    reason: CannotMoveReason,

    /// Side that tried to move.
    side: Piece,

    /// The rejected move, if this wasn't a pass.
    mv: Option<Move>,
}

impl MoveError {
    pub(super) fn new(reason: CannotMoveReason, side: Piece, mv: Option<Move>) -> Self {
        Self { reason, side, mv }
    }

    /// Get the reason the move was rejected.
    pub fn reason(&self) -> CannotMoveReason {
        self.reason
    }

    /// Get the side that tried to move.
    pub fn side(&self) -> Piece {
        self.side
    }

    /// Get the rejected move. `None` for a rejected pass.
    pub fn mv(&self) -> Option<&Move> {
        self.mv.as_ref()
    }

    /// Extract the rejected move.
    pub fn into_move(self) -> Option<Move> {
        self.mv
    }
}
