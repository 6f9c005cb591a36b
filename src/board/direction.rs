use std::fmt;

/// The forward axis of a piece. Pawn pushes, the promotion edge, and the castling
/// axis are all derived from it, so a team's "forward" is not tied to a fixed
/// screen orientation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// (row, col) step of one square forward. Row 0 is the top edge.
    pub fn forward(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The two steps perpendicular to `forward`: pawn capture sides, the en
    /// passant neighbours, and the castling axis.
    pub fn lateral(&self) -> [(i32, i32); 2] {
        match self {
            Direction::North | Direction::South => [(0, -1), (0, 1)],
            Direction::East | Direction::West => [(-1, 0), (1, 0)],
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Number of squares along this axis on a `rows` x `cols` board.
    pub fn extent(&self, rows: usize, cols: usize) -> usize {
        if self.is_vertical() {
            rows
        } else {
            cols
        }
    }

    /// How many squares a piece at `(row, col)` has advanced from its own back
    /// edge.
    pub fn advancement(&self, row: i32, col: i32, rows: usize, cols: usize) -> i32 {
        match self {
            Direction::North => rows as i32 - 1 - row,
            Direction::South => row,
            Direction::East => col,
            Direction::West => cols as i32 - 1 - col,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}
