use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    board::{Board, Cell, Direction, Move, Piece, Position},
    strategy::Player,
};

/// Heuristic computer player for the prey side.
///
/// Each turn the first rule that produces a candidate wins, and ties within a rule are
/// broken uniformly at random:
///
/// 1. Occupy the landing cell of any capture the predators could make right now.
/// 2. While prey remain on the border, bring one onto a cell where it cannot be jumped.
/// 3. Otherwise onto a cell where no capture line is one predator move from completion.
/// 4. Otherwise onto any empty cell.
///
/// Once every prey has entered the board only rule 1 applies, so the strategy passes when
/// there is nothing to defend.
#[derive(Debug, Clone)]
pub struct PreyStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> PreyStrategy<R> {
    /// Create a strategy that breaks ties using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl PreyStrategy<StdRng> {
    /// Create a strategy with a reproducible tie-breaking sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for PreyStrategy<StdRng> {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Player for PreyStrategy<R> {
    fn play(&mut self, board: &Board) -> Option<Move> {
        let defensive = defensive_moves(board);
        if let Some(&mv) = defensive.choose(&mut self.rng) {
            debug!(
                "prey defends with {} ({} candidates)",
                mv,
                defensive.len()
            );
            return Some(mv);
        }

        let border: Vec<_> = board.border_positions(Piece::Prey).collect();
        let &from = border.choose(&mut self.rng)?;
        for &placement in Placement::ALL.iter() {
            let targets = placement.targets(board, from);
            trace!("{:?} placements: {}", placement, targets.len());
            if let Some(&to) = targets.choose(&mut self.rng) {
                debug!("prey enters at {} ({:?})", to, placement);
                return Some(Move::new(from, to));
            }
        }
        None
    }

    fn is_computer(&self) -> bool {
        true
    }
}

/// Moves that put a prey on the landing cell of a capture the predators could make now.
/// Each move appears once even if it blocks several captures.
pub(crate) fn defensive_moves(board: &Board) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::new();
    for jump in board.possible_jumps(Piece::Predator, Piece::Prey) {
        for from in board.pieces(Piece::Prey) {
            let mv = Move::new(from, jump.p2());
            if board.is_valid(&mv, Piece::Prey) && !moves.contains(&mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// How picky the prey is about where it enters the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Placement {
    /// No line through the cell could ever be used to jump it.
    Safe,
    /// No line through the cell has a predator on one side and an empty cell on the other.
    Livable,
    /// Any empty cell.
    Anywhere,
}

impl Placement {
    const ALL: [Placement; 3] = [Placement::Safe, Placement::Livable, Placement::Anywhere];

    /// Empty board cells the prey at `from` may legally enter and which no line through
    /// rejects.
    fn targets(self, board: &Board, from: Position) -> Vec<Position> {
        board
            .empty_board_positions()
            .filter(|&to| board.is_valid(&Move::new(from, to), Piece::Prey))
            .filter(|&to| {
                Direction::ALL
                    .iter()
                    .all(|&dir| !self.rejects(board, to, to.step(dir), to.step_back(dir)))
            })
            .collect()
    }

    /// Whether the line from `fore` through `pos` to `back` makes `pos` unacceptable.
    fn rejects(self, board: &Board, pos: Position, fore: Position, back: Position) -> bool {
        let on_line = board.is_step_along_line(&Move::new(pos, fore))
            && board.positions().is_board(&back);
        let (f, b) = (board.get(fore), board.get(back));
        match self {
            Placement::Safe => {
                on_line && f.is_empty_or(Piece::Predator) && b.is_empty_or(Piece::Predator)
            }
            Placement::Livable => {
                on_line
                    && matches!(
                        (f, b),
                        (Cell::Occupied(Piece::Predator), Cell::Empty)
                            | (Cell::Empty, Cell::Occupied(Piece::Predator))
                    )
            }
            Placement::Anywhere => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardDimensions;

    fn board_with(pieces: &[((i32, i32), Piece)]) -> Board {
        let mut board = Board::new(BoardDimensions::default());
        for &(pos, piece) in pieces {
            board.set(pos.into(), piece).unwrap();
        }
        board
    }

    #[test]
    fn safe_rejects_open_lines() {
        // Predator at (1,1) and an empty (3,3): (2,2) sits on a capture line.
        let board = board_with(&[((1, 1), Piece::Predator)]);
        let p = Position::new(2, 2);
        let dir = Direction::SouthEast;
        assert!(Placement::Safe.rejects(&board, p, p.step(dir), p.step_back(dir)));
        // The same line is also one predator move from completion.
        assert!(Placement::Livable.rejects(&board, p, p.step(dir), p.step_back(dir)));
        assert!(!Placement::Anywhere.rejects(&board, p, p.step(dir), p.step_back(dir)));
    }

    #[test]
    fn livable_tolerates_both_empty() {
        let board = board_with(&[]);
        let p = Position::new(3, 3);
        let dir = Direction::East;
        assert!(Placement::Safe.rejects(&board, p, p.step(dir), p.step_back(dir)));
        assert!(!Placement::Livable.rejects(&board, p, p.step(dir), p.step_back(dir)));
    }

    #[test]
    fn edges_cannot_be_jumped_across() {
        // On the edge, the line toward the border has no board cell behind.
        let board = board_with(&[]);
        let p = Position::new(1, 3);
        let dir = Direction::West;
        assert!(!Placement::Safe.rejects(&board, p, p.step(dir), p.step_back(dir)));
    }

    #[test]
    fn odd_cells_have_no_diagonal_lines() {
        let board = board_with(&[((1, 1), Piece::Predator)]);
        let p = Position::new(2, 3);
        let dir = Direction::NorthWest;
        assert!(!Placement::Safe.rejects(&board, p, p.step(dir), p.step_back(dir)));
    }

    #[test]
    fn defensive_moves_are_deduplicated() {
        // Two predators can both land on (3,3); one border prey can block both.
        let board = board_with(&[
            ((1, 1), Piece::Predator),
            ((2, 2), Piece::Prey),
            ((3, 5), Piece::Predator),
            ((3, 4), Piece::Prey),
            ((0, 2), Piece::Prey),
        ]);
        assert_eq!(
            defensive_moves(&board),
            vec![Move::new((0, 2), (3, 3))]
        );
    }
}
