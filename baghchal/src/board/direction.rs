//! The eight compass directions a line can leave an intersection in.

use enumflags2::BitFlags;

/// A unit direction on the grid. `y` grows downwards, so [`Direction::North`] is
/// `(0, -1)`.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0b0000_0001,
    NorthEast = 0b0000_0010,
    East = 0b0000_0100,
    SouthEast = 0b0000_1000,
    South = 0b0001_0000,
    SouthWest = 0b0010_0000,
    West = 0b0100_0000,
    NorthWest = 0b1000_0000,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(dx, dy)` unit vector of this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Find the direction with the given unit vector. Returns `None` for the zero vector
    /// and for anything that isn't a unit step.
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.offset() == (dx, dy))
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// Whether this direction changes both coordinates.
    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0 && dy != 0
    }

    /// Iterate the directions contained in a set of flags, clockwise from north.
    pub fn iter_set(set: BitFlags<Direction>) -> impl Iterator<Item = Direction> {
        (0..Self::ALL.len())
            .map(|i| Self::ALL[i])
            .filter(move |&dir| set.contains(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_round_trip_and_exclude_zero() {
        for d in Direction::ALL.iter().copied() {
            let (dx, dy) = d.offset();
            assert_eq!(Direction::from_offset(dx, dy), Some(d));
            assert_eq!(d.opposite().offset(), (-dx, -dy));
        }
        assert_eq!(Direction::from_offset(0, 0), None);
        assert_eq!(Direction::from_offset(2, 0), None);
    }

    #[test]
    fn iterate_flag_set() {
        let set = BitFlags::<Direction>::empty() | Direction::West | Direction::North;
        let dirs: Vec<_> = Direction::iter_set(set).collect();
        assert_eq!(dirs, vec![Direction::North, Direction::West]);
        assert_eq!(
            Direction::ALL.iter().filter(|d| d.is_diagonal()).count(),
            4
        );
    }
}
