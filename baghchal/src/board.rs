//! Types that make up the game board.

use std::{fmt, rc::Rc};

use enumflags2::BitFlags;
use log::{trace, warn};

use self::grid::Grid;
pub use self::{
    dimensions::BoardDimensions,
    direction::Direction,
    errors::{DimensionsError, OutOfBounds},
    listener::{Event, EventLog, Listener, LogListener, NoListener},
    moves::Move,
    piece::{Cell, Piece},
    position::Position,
    positions::PositionClassifier,
    setup::BoardSetup,
};

mod dimensions;
mod direction;
mod errors;
mod grid;
mod listener;
mod moves;
mod piece;
mod position;
mod positions;
pub mod setup;

/// The game board: the playable area plus the ring of border cells around it where prey
/// wait to enter the game.
///
/// The board enforces which moves are legal but does not apply that check when mutated
/// directly; callers validate with [`Board::is_valid`] before calling
/// [`Board::move_piece`].
pub struct Board {
    /// Cells of the board, border ring included.
    grid: Grid,

    /// Classification of the grid positions. Shared with snapshots, never mutated.
    positions: Rc<PositionClassifier>,

    /// Receives events for every mutation.
    listener: Box<dyn Listener>,
}

impl Board {
    /// Create an empty board with the given [`BoardDimensions`] and no listener.
    pub fn new(dim: BoardDimensions) -> Self {
        Self::with_listener(dim, NoListener)
    }

    /// Create an empty board that reports its events to `listener`.
    pub fn with_listener<L: Listener + 'static>(dim: BoardDimensions, listener: L) -> Self {
        Self {
            grid: Grid::new(dim),
            positions: Rc::new(PositionClassifier::from_dimensions(&dim)),
            listener: Box::new(listener),
        }
    }

    /// Replace the listener receiving this board's events.
    pub fn set_listener<L: Listener + 'static>(&mut self, listener: L) {
        self.listener = Box::new(listener);
    }

    /// Get the [`BoardDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &BoardDimensions {
        &self.grid.dim
    }

    /// Get the classification of this board's positions.
    pub fn positions(&self) -> &PositionClassifier {
        &self.positions
    }

    pub fn top_left(&self) -> Position {
        self.grid.dim.top_left()
    }

    pub fn bottom_right(&self) -> Position {
        self.grid.dim.bottom_right()
    }

    /// Get the contents of the cell at `pos`. Positions outside the grid are
    /// [`Cell::Invalid`], never [`Cell::Empty`].
    pub fn get(&self, pos: Position) -> Cell {
        self.grid.get(pos).map_or(Cell::Invalid, |&content| content.into())
    }

    /// Put a piece on the cell at `pos`, replacing whatever was there. Does not check
    /// whether this is a legal move.
    pub fn set(&mut self, pos: Position, piece: Piece) -> Result<(), OutOfBounds> {
        match self.grid.get_mut(pos) {
            Some(cell) => {
                *cell = Some(piece);
                Ok(())
            }
            None => Err(OutOfBounds::new(pos)),
        }
    }

    /// Vacate the cell at `pos`, returning the piece that was there.
    pub fn clear(&mut self, pos: Position) -> Option<Piece> {
        self.grid.get_mut(pos).and_then(Option::take)
    }

    /// Move the piece at the start of the move to its end, returning the moved piece. The
    /// move must already have been validated. Returns `None` and leaves the board unchanged
    /// if there is no piece to move or the destination is outside the grid.
    pub fn move_piece(&mut self, mv: &Move) -> Option<Piece> {
        let piece = self.get(mv.p1()).piece()?;
        *self.grid.get_mut(mv.p2())? = Some(piece);
        self.grid[mv.p1()] = None;
        Some(piece)
    }

    /// Finish a move that was applied with [`Board::move_piece`]: remove the piece that was
    /// jumped over, if any, and notify the listener. Returns the captured piece.
    ///
    /// Only moves within the playable area capture; a prey entering from the border ring
    /// two cells deep does not.
    pub fn process_move(&mut self, mv: &Move) -> Option<Piece> {
        let piece = match self.get(mv.p2()).piece() {
            Some(piece) => piece,
            None => {
                warn!("processing move {} with no piece at its destination", mv);
                return None;
            }
        };
        match mv.middle() {
            Some(middle) if self.positions.is_board_move(mv) => {
                let captured = self.clear(middle);
                self.listener.after_jump(piece);
                captured
            }
            _ => {
                self.listener.after_step(piece);
                None
            }
        }
    }

    /// Lift `expected` off the cell at `pos`. Returns `pos` if the piece was there,
    /// otherwise leaves the board untouched and returns `None`.
    pub fn pick(&mut self, pos: Position, expected: Piece) -> Option<Position> {
        if self.get(pos).holds(expected) {
            self.clear(pos);
            self.listener.after_picked(expected);
            Some(pos)
        } else {
            None
        }
    }

    /// Vacate every cell, border ring included.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.listener.after_reset();
    }

    /// Take an independent copy of the cells of this board. The snapshot shares no mutable
    /// state with this board and drops the listener, so simulated moves on it are never
    /// reported.
    pub fn snapshot(&self) -> Board {
        Board {
            grid: self.grid.clone(),
            positions: Rc::clone(&self.positions),
            listener: Box::new(NoListener),
        }
    }

    /// True if the move is a single step along one of the board's lines. Lines run
    /// horizontally and vertically through every intersection, but diagonals only leave
    /// intersections whose coordinates have an even sum.
    pub fn is_step_along_line(&self, mv: &Move) -> bool {
        let dim = &self.grid.dim;
        dim.is_on_board(&mv.p1())
            && dim.is_on_board(&mv.p2())
            && mv.is_step()
            && (mv.p1().has_even_coord_sum() || mv.is_one_dimensional())
    }

    /// True if the move covers two consecutive steps along the same line.
    pub fn is_jump_along_line(&self, mv: &Move) -> bool {
        match mv.middle() {
            Some(middle) => {
                self.is_step_along_line(&Move::new(mv.p1(), middle))
                    && self.is_step_along_line(&Move::new(middle, mv.p2()))
            }
            None => false,
        }
    }

    /// The set of directions in which a line leaves `pos`.
    pub fn lines_from(&self, pos: Position) -> BitFlags<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| self.is_step_along_line(&Move::new(pos, pos.step(dir))))
            .fold(BitFlags::empty(), |lines, dir| lines | dir)
    }

    /// True if every cell of the border ring is vacant.
    pub fn is_border_empty(&self) -> bool {
        self.positions
            .border()
            .iter()
            .all(|pos| self.grid[pos].is_none())
    }

    /// Check whether `piece` may make the given move.
    ///
    /// Prey may only enter from the border while any prey remains there, and may only
    /// step along lines once the border is empty. Predators step along lines, or jump along
    /// a line over a prey.
    pub fn is_valid(&self, mv: &Move, piece: Piece) -> bool {
        if !self.dimensions().is_addressable(&mv.p1()) {
            return false;
        }
        if mv.is_stationary() || !self.get(mv.p2()).is_empty() {
            return false;
        }
        match piece {
            Piece::Prey => {
                self.positions.is_border_to_board(mv)
                    || (self.is_border_empty() && self.is_step_along_line(mv))
            }
            Piece::Predator => {
                self.is_step_along_line(mv)
                    || (self.is_jump_along_line(mv)
                        && mv
                            .middle()
                            .map_or(false, |middle| self.get(middle).holds(Piece::Prey)))
            }
        }
    }

    /// Steps along lines from every board cell holding `moving` to a neighbor whose
    /// contents satisfy `required`.
    fn steps_where<'a, F>(&'a self, moving: Piece, required: F) -> impl 'a + Iterator<Item = Move>
    where
        F: 'a + Fn(Cell) -> bool,
    {
        self.positions
            .board()
            .iter()
            .copied()
            .filter(move |&pos| self.get(pos).holds(moving))
            .flat_map(move |pos| {
                Direction::iter_set(self.lines_from(pos)).map(move |dir| Move::new(pos, pos.step(dir)))
            })
            .filter(move |step| required(self.get(step.p2())))
    }

    /// Every step along a line that a `moving` piece on the board could make to an empty
    /// cell. Ignores the border phase rule for prey.
    pub fn possible_steps(&self, moving: Piece) -> Vec<Move> {
        self.steps_where(moving, Cell::is_empty).collect()
    }

    /// Every jump a `moving` piece could make over a `jumped` piece onto an empty cell.
    pub fn possible_jumps(&self, moving: Piece, jumped: Piece) -> Vec<Move> {
        let jumps: Vec<_> = self
            .steps_where(moving, move |cell| cell.holds(jumped))
            .filter_map(|step| {
                let next = step.repeat();
                if self.is_step_along_line(&next) && self.get(next.p2()).is_empty() {
                    Some(Move::new(step.p1(), next.p2()))
                } else {
                    None
                }
            })
            .collect();
        trace!("{} possible {} jumps over {}", jumps.len(), moving, jumped);
        jumps
    }

    /// Every move [`Board::is_valid`] accepts for `piece` from a cell holding that piece.
    pub fn legal_moves(&self, piece: Piece) -> Vec<Move> {
        match piece {
            Piece::Predator => {
                let mut moves = self.possible_steps(Piece::Predator);
                moves.extend(self.possible_jumps(Piece::Predator, Piece::Prey));
                moves
            }
            Piece::Prey if self.is_border_empty() => self.possible_steps(Piece::Prey),
            Piece::Prey => {
                let targets: Vec<_> = self.empty_board_positions().collect();
                self.border_positions(Piece::Prey)
                    .flat_map(|from| targets.iter().map(move |&to| Move::new(from, to)))
                    .collect()
            }
        }
    }

    /// Positions anywhere in the grid holding `piece`.
    pub fn pieces(&self, piece: Piece) -> impl '_ + Iterator<Item = Position> {
        self.positions
            .all()
            .iter()
            .copied()
            .filter(move |&pos| self.get(pos).holds(piece))
    }

    /// Positions of the border ring holding `piece`.
    pub fn border_positions(&self, piece: Piece) -> impl '_ + Iterator<Item = Position> {
        self.positions
            .border()
            .iter()
            .copied()
            .filter(move |&pos| self.get(pos).holds(piece))
    }

    /// Vacant positions inside the playable area.
    pub fn empty_board_positions(&self) -> impl '_ + Iterator<Item = Position> {
        self.positions
            .board()
            .iter()
            .copied()
            .filter(move |&pos| self.get(pos).is_empty())
    }

    /// Number of `piece` anywhere in the grid.
    pub fn count(&self, piece: Piece) -> usize {
        self.pieces(piece).count()
    }

    /// Get an iterator over the rows of the grid, border ring included. Each row is an
    /// iterator over the positions and contents of that row.
    pub fn iter_rows(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Position, Cell)>> {
        self.grid
            .dim
            .iter_rows()
            .map(move |row| row.map(move |pos| (pos, self.get(pos))))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .finish()
    }
}
