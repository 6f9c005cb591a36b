use std::fmt;

/// A (row, col) coordinate with row 0 at the top of the board. Squares carry no
/// bounds of their own; whether a square lies on a board is a `Board` question,
/// so offsets are free to step off the edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: i32,
    col: i32,
}

impl Square {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn offset(&self, delta: (i32, i32)) -> Self {
        Self::new(self.row + delta.0, self.col + delta.1)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
