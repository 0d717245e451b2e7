//! Partition of the grid into playable board, border ring and board corners.

use std::collections::HashSet;

use crate::board::{BoardDimensions, Move, Position};

/// Classifies grid positions into the board, its corners and the border ring, based on the
/// bounds of the playable area. Built once per board size and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PositionClassifier {
    top_left: Position,
    bottom_right: Position,

    /// Every position added, in insertion order.
    all: Vec<Position>,
    board: Vec<Position>,
    border: Vec<Position>,
    corners: Vec<Position>,

    /// Membership sets backing the `is_*` queries.
    board_set: HashSet<Position>,
    border_set: HashSet<Position>,
}

impl PositionClassifier {
    /// Create an empty classifier for a playable area spanning `top_left` to
    /// `bottom_right`.
    pub fn new(top_left: Position, bottom_right: Position) -> Self {
        Self {
            top_left,
            bottom_right,
            all: Vec::new(),
            board: Vec::new(),
            border: Vec::new(),
            corners: Vec::new(),
            board_set: HashSet::new(),
            border_set: HashSet::new(),
        }
    }

    /// Create a classifier populated with every addressable position of the given
    /// dimensions, border ring included.
    pub fn from_dimensions(dim: &BoardDimensions) -> Self {
        let mut positions = Self::new(dim.top_left(), dim.bottom_right());
        for pos in dim.iter_positions() {
            positions.add(pos);
        }
        positions
    }

    /// Classify and store a position. Adding a position twice has no effect.
    pub fn add(&mut self, pos: Position) {
        if self.board_set.contains(&pos) || self.border_set.contains(&pos) {
            return;
        }
        self.all.push(pos);
        if pos.is_greater_or_equal_to(&self.top_left) && pos.is_less_or_equal_to(&self.bottom_right)
        {
            self.board.push(pos);
            self.board_set.insert(pos);
            if (pos.x == self.top_left.x || pos.x == self.bottom_right.x)
                && (pos.y == self.top_left.y || pos.y == self.bottom_right.y)
            {
                self.corners.push(pos);
            }
        } else {
            self.border.push(pos);
            self.border_set.insert(pos);
        }
    }

    /// Every classified position, in the order added.
    pub fn all(&self) -> &[Position] {
        &self.all
    }

    /// Positions inside the playable area.
    pub fn board(&self) -> &[Position] {
        &self.board
    }

    /// Positions in the border ring.
    // TODO: order the border so that filling it piece by piece looks symmetric.
    pub fn border(&self) -> &[Position] {
        &self.border
    }

    /// The corners of the playable area.
    pub fn corners(&self) -> &[Position] {
        &self.corners
    }

    pub fn is_board(&self, pos: &Position) -> bool {
        self.board_set.contains(pos)
    }

    pub fn is_border(&self, pos: &Position) -> bool {
        self.border_set.contains(pos)
    }

    /// True if the move starts on the border ring and ends somewhere that isn't.
    pub fn is_border_to_board(&self, mv: &Move) -> bool {
        self.is_border(&mv.p1()) && !self.is_border(&mv.p2())
    }

    /// True if both ends of the move are inside the playable area.
    pub fn is_board_move(&self, mv: &Move) -> bool {
        self.is_board(&mv.p1()) && self.is_board(&mv.p2())
    }

    /// Number of positions inside the playable area.
    pub fn board_size(&self) -> usize {
        self.board.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_five_by_five() {
        let positions = PositionClassifier::from_dimensions(&BoardDimensions::default());
        assert_eq!(positions.all().len(), 49);
        assert_eq!(positions.board_size(), 25);
        assert_eq!(positions.border().len(), 24);

        let mut corners = positions.corners().to_vec();
        corners.sort_by_key(|p| (p.x, p.y));
        assert_eq!(
            corners,
            vec![
                Position::new(1, 1),
                Position::new(1, 5),
                Position::new(5, 1),
                Position::new(5, 5)
            ]
        );
    }

    #[test]
    fn membership() {
        let positions = PositionClassifier::from_dimensions(&BoardDimensions::new(3, 4));
        assert!(positions.is_board(&Position::new(3, 4)));
        assert!(!positions.is_board(&Position::new(4, 4)));
        assert!(positions.is_border(&Position::new(4, 4)));
        assert!(positions.is_border(&Position::new(0, 0)));
        // Out of range positions are neither.
        assert!(!positions.is_border(&Position::new(5, 0)));
        assert!(!positions.is_board(&Position::new(-1, 2)));
    }

    #[test]
    fn move_classification() {
        let positions = PositionClassifier::from_dimensions(&BoardDimensions::default());
        assert!(positions.is_border_to_board(&Move::new((0, 3), (4, 4))));
        assert!(!positions.is_border_to_board(&Move::new((0, 3), (0, 4))));
        assert!(!positions.is_border_to_board(&Move::new((1, 3), (2, 3))));
        assert!(positions.is_board_move(&Move::new((1, 3), (2, 3))));
        assert!(!positions.is_board_move(&Move::new((0, 3), (1, 3))));
    }

    #[test]
    fn add_is_idempotent() {
        let mut positions = PositionClassifier::new(Position::new(1, 1), Position::new(2, 2));
        positions.add(Position::new(1, 1));
        positions.add(Position::new(1, 1));
        positions.add(Position::new(0, 1));
        assert_eq!(positions.all().len(), 2);
        assert_eq!(positions.corners().len(), 1);
        assert_eq!(positions.border(), &[Position::new(0, 1)]);
    }
}
