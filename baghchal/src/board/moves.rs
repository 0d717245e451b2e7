use std::fmt;

use crate::board::{Direction, Position};

/// A move of a piece from `p1` to `p2`. Moves only describe geometry; whether a move is
/// legal is up to the [`Board`][crate::board::Board].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    p1: Position,
    p2: Position,
}

impl Move {
    /// Construct a move from `p1` to `p2`.
    pub fn new<A: Into<Position>, B: Into<Position>>(p1: A, p2: B) -> Self {
        Self {
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Where the move starts.
    pub fn p1(&self) -> Position {
        self.p1
    }

    /// Where the move ends.
    pub fn p2(&self) -> Position {
        self.p2
    }

    // Widened so that moves between far apart coordinates can't overflow.
    fn dx(&self) -> i64 {
        i64::from(self.p2.x) - i64::from(self.p1.x)
    }

    fn dy(&self) -> i64 {
        i64::from(self.p2.y) - i64::from(self.p1.y)
    }

    /// True if the move starts and ends in the same place.
    pub fn is_stationary(&self) -> bool {
        self.p1 == self.p2
    }

    /// True if the move goes to one of the eight neighbors of `p1`.
    pub fn is_step(&self) -> bool {
        self.dx().abs().max(self.dy().abs()) == 1
    }

    /// True if the move covers exactly two cells along a straight or diagonal line.
    pub fn is_jump(&self) -> bool {
        let straight = |d: i64| d == 0 || d.abs() == 2;
        !self.is_stationary() && straight(self.dx()) && straight(self.dy())
    }

    /// The cell jumped over. Only defined for jumps.
    pub fn middle(&self) -> Option<Position> {
        if self.is_jump() {
            Some(self.p1.add((self.dx() / 2) as i32, (self.dy() / 2) as i32))
        } else {
            None
        }
    }

    /// True if the endpoints share exactly one coordinate, i.e. the move is purely
    /// horizontal or vertical.
    pub fn is_one_dimensional(&self) -> bool {
        (self.p1.x == self.p2.x) != (self.p1.y == self.p2.y)
    }

    /// The move continuing in the same direction by the same distance from `p2`. Wraps
    /// around at the limits of `i32` like [`Position::add`].
    pub fn repeat(&self) -> Move {
        Move::new(self.p2, self.p2.add(self.dx() as i32, self.dy() as i32))
    }

    /// The direction of this move if it is a step.
    pub fn direction(&self) -> Option<Direction> {
        if self.is_step() {
            Direction::from_offset(self.dx() as i32, self.dy() as i32)
        } else {
            None
        }
    }
}

impl From<(Position, Position)> for Move {
    fn from((p1, p2): (Position, Position)) -> Self {
        Move::new(p1, p2)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.p1, self.p2)
    }
}
