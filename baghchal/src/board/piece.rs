use std::fmt;

/// The two kinds of pieces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Piece {
    /// Captures prey by jumping over them. Starts on the corners of the board.
    Predator,
    /// Starts on the border ring and has to enter the board before moving freely.
    Prey,
}

impl Piece {
    /// Both pieces, prey first since the prey side opens the game.
    pub const ALL: [Piece; 2] = [Piece::Prey, Piece::Predator];

    /// Get the piece playing against this one.
    pub fn opponent(self) -> Self {
        match self {
            Piece::Predator => Piece::Prey,
            Piece::Prey => Piece::Predator,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Piece::Predator => "predator",
            Piece::Prey => "prey",
        })
    }
}

/// Contents of a grid coordinate as seen by [`Board::get`][crate::board::Board::get].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// A real cell with nothing on it.
    Empty,
    /// A real cell holding a piece.
    Occupied(Piece),
    /// The coordinate is outside the allocated grid. Never treated as vacant.
    Invalid,
}

impl Cell {
    /// True only for an addressable, vacant cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The piece in the cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty | Cell::Invalid => None,
        }
    }

    /// True if the cell holds the given piece.
    pub fn holds(self, piece: Piece) -> bool {
        self == Cell::Occupied(piece)
    }

    /// True if the cell is vacant or holds the given piece.
    pub fn is_empty_or(self, piece: Piece) -> bool {
        self.is_empty() || self.holds(piece)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(content: Option<Piece>) -> Self {
        content.map_or(Cell::Empty, Cell::Occupied)
    }
}
