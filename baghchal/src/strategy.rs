//! Players that choose moves for one side of the game.
//!
//! [`PreyStrategy`] is the heuristic computer opponent for the prey side.
//! [`PredatorStrategy`] is a simpler computer opponent for the predator side. Both take an
//! injectable random number generator used to break ties, so games can be replayed from a
//! seed.

use crate::board::{Board, Move};

pub use self::{predator::PredatorStrategy, prey::PreyStrategy};

mod predator;
mod prey;

/// Something that can choose moves for one side.
pub trait Player {
    /// Choose the next move on `board`. Returns `None` if there is no move to make this
    /// turn, which is a pass rather than an error.
    fn play(&mut self, board: &Board) -> Option<Move>;

    /// Whether this player is driven by the computer rather than a person.
    fn is_computer(&self) -> bool;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn play(&mut self, board: &Board) -> Option<Move> {
        (**self).play(board)
    }

    fn is_computer(&self) -> bool {
        (**self).is_computer()
    }
}
