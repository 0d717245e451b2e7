use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    board::{Board, Move, Piece},
    strategy::Player,
};

/// Computer player for the predator side. Captures whenever it can, otherwise makes a
/// random step. Both choices are uniform among the candidates.
#[derive(Debug, Clone)]
pub struct PredatorStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> PredatorStrategy<R> {
    /// Create a strategy that breaks ties using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl PredatorStrategy<StdRng> {
    /// Create a strategy with a reproducible tie-breaking sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for PredatorStrategy<StdRng> {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Player for PredatorStrategy<R> {
    fn play(&mut self, board: &Board) -> Option<Move> {
        let jumps = board.possible_jumps(Piece::Predator, Piece::Prey);
        if let Some(&mv) = jumps.choose(&mut self.rng) {
            debug!("predator captures with {}", mv);
            return Some(mv);
        }
        let steps = board.possible_steps(Piece::Predator);
        let mv = steps.choose(&mut self.rng).copied();
        debug!("predator steps with {:?} ({} candidates)", mv, steps.len());
        mv
    }

    fn is_computer(&self) -> bool {
        true
    }
}
