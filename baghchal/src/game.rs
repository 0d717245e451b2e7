//! Implementation of the game as a whole: turn order, captures and the end of the game.
//!
//! [`Game`] is the reusable core of a game loop. It owns the live [`Board`], checks every
//! move before applying it, and decides when the game is over. Front ends ask a
//! [`Player`] for each move through [`Game::play_turn`], or feed moves in directly with
//! [`Game::apply`].

use log::debug;

use crate::{
    board::{Board, BoardDimensions, BoardSetup, Listener, Move, NoListener, Piece},
    strategy::Player,
};

pub use self::errors::{CannotMoveReason, MoveError};

mod errors;

/// Settings for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Size of the playable area.
    pub dimensions: BoardDimensions,
    /// Number of captured prey at which the predators win.
    pub capture_limit: usize,
    /// Number of turns, passes included, after which the game is drawn.
    pub turn_limit: usize,
}

impl Default for GameConfig {
    /// The standard game: a 5x5 board, predators win after five captures.
    fn default() -> Self {
        Self {
            dimensions: BoardDimensions::default(),
            capture_limit: 5,
            turn_limit: 200,
        }
    }
}

/// Whether the game is still going.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Status {
    InProgress,
    /// The given side won.
    Won(Piece),
    /// The turn limit was reached.
    Drawn,
}

/// What happened during a turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnOutcome {
    /// The side made a move, capturing the given piece if any.
    Moved { mv: Move, captured: Option<Piece> },
    /// The side had no move to make.
    Passed,
}

/// A game in progress. Prey move first.
pub struct Game {
    board: Board,
    config: GameConfig,

    /// Side whose turn it is.
    current: Piece,

    /// Number of prey captured so far.
    captured: usize,

    /// Number of turns played so far, passes included.
    turns: usize,

    status: Status,
}

impl Game {
    /// Start a game with the given settings.
    pub fn new(config: GameConfig) -> Self {
        Self::with_listener(config, NoListener)
    }

    /// Start a game whose board reports its events to `listener`.
    pub fn with_listener<L: Listener + 'static>(config: GameConfig, listener: L) -> Self {
        let mut board = Board::with_listener(config.dimensions, listener);
        // Setup only writes to the corners and the border ring, which exist for every
        // valid set of dimensions.
        BoardSetup::new()
            .setup(&mut board)
            .expect("setup writes only to corners and the border ring");
        let mut game = Self {
            board,
            config,
            current: Piece::Prey,
            captured: 0,
            turns: 0,
            status: Status::InProgress,
        };
        game.update_status();
        game
    }

    /// The live board. Strategies read it; only the game mutates it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the side whose turn it currently is.
    pub fn current(&self) -> Piece {
        self.current
    }

    /// Number of prey captured so far.
    pub fn captured(&self) -> usize {
        self.captured
    }

    /// Number of turns played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Get the winner, if the game was won.
    pub fn winner(&self) -> Option<Piece> {
        match self.status {
            Status::Won(side) => Some(side),
            Status::InProgress | Status::Drawn => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Every legal move for `side` on the current board.
    pub fn legal_moves(&self, side: Piece) -> Vec<Move> {
        self.board.legal_moves(side)
    }

    /// Check that `side` may act now.
    fn check_turn(&self, side: Piece, mv: Option<Move>) -> Result<(), MoveError> {
        if self.is_over() {
            Err(MoveError::new(CannotMoveReason::AlreadyOver, side, mv))
        } else if side != self.current {
            Err(MoveError::new(CannotMoveReason::OutOfTurn, side, mv))
        } else {
            Ok(())
        }
    }

    /// Make a move for `side`. The move must start on one of that side's pieces and be
    /// legal for it. Returns the captured piece, if any.
    pub fn apply(&mut self, side: Piece, mv: Move) -> Result<Option<Piece>, MoveError> {
        self.check_turn(side, Some(mv))?;
        if !self.board.get(mv.p1()).holds(side) || !self.board.is_valid(&mv, side) {
            return Err(MoveError::new(CannotMoveReason::IllegalMove, side, Some(mv)));
        }
        self.board.move_piece(&mv);
        let captured = self.board.process_move(&mv);
        if captured == Some(Piece::Prey) {
            self.captured += 1;
        }
        debug!("{} played {}, captured {:?}", side, mv, captured);
        self.end_turn();
        Ok(captured)
    }

    /// Skip the turn of `side`, used when it has no move to make.
    pub fn pass(&mut self, side: Piece) -> Result<(), MoveError> {
        self.check_turn(side, None)?;
        debug!("{} passed", side);
        self.end_turn();
        Ok(())
    }

    /// Ask `player` for a move for the side whose turn it is and apply it. A player that
    /// returns no move passes.
    pub fn play_turn<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
    ) -> Result<TurnOutcome, MoveError> {
        let side = self.current;
        match player.play(&self.board) {
            Some(mv) => self
                .apply(side, mv)
                .map(|captured| TurnOutcome::Moved { mv, captured }),
            None => self.pass(side).map(|()| TurnOutcome::Passed),
        }
    }

    fn end_turn(&mut self) {
        self.turns += 1;
        self.current = self.current.opponent();
        self.update_status();
    }

    fn update_status(&mut self) {
        self.status = if self.captured >= self.config.capture_limit
            || self.board.count(Piece::Prey) == 0
        {
            Status::Won(Piece::Predator)
        } else if self.current == Piece::Predator
            && self.board.legal_moves(Piece::Predator).is_empty()
        {
            Status::Won(Piece::Prey)
        } else if self.turns >= self.config.turn_limit {
            Status::Drawn
        } else {
            Status::InProgress
        };
    }
}
