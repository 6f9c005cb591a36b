use std::fmt;

use super::{
    direction::Direction, error::BoardError, piece::PieceRecord, piece::PieceType,
    square::Square, team::Team, Board,
};

impl Board {
    /// Builds a position from a text diagram read top row first. Uppercase letters
    /// are team one pieces facing north, lowercase letters are team two pieces
    /// facing south, `.` is an empty square. Whitespace is ignored. Every piece
    /// starts with `has_moved` unset.
    pub fn from_diagram(rows: usize, cols: usize, diagram: &str) -> Result<Self, BoardError> {
        let glyphs: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        let mut board = Board::new(rows, cols)?;
        if glyphs.len() != rows * cols {
            return Err(BoardError::DiagramSizeMismatch {
                expected: rows * cols,
                found: glyphs.len(),
            });
        }

        for (i, &glyph) in glyphs.iter().enumerate() {
            if glyph == '.' {
                continue;
            }
            let (piece_type, team) =
                PieceType::from_glyph(glyph).ok_or(BoardError::UnknownDiagramGlyph { glyph })?;
            let direction = match team {
                Team::One => Direction::North,
                Team::Two => Direction::South,
            };
            let square = Square::new((i / cols) as i32, (i % cols) as i32);
            board.put(square, PieceRecord::new(piece_type, team, direction))?;
        }

        Ok(board)
    }
}

/// The alternate form (`{:#}`) draws pieces with unicode chess symbols.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols() {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..self.rows() as i32 {
            write!(f, "{:>3}", row)?;
            for col in 0..self.cols() as i32 {
                let glyph = match self.piece_at(Square::new(row, col)) {
                    Some(piece) if f.alternate() => piece.unicode_glyph(),
                    Some(piece) => piece.glyph(),
                    None => '.',
                };
                write!(f, "{:>3}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds an 8x8 board from a diagram, for tests.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let diagram = stringify!($($piece)*);
        $crate::board::Board::from_diagram(8, 8, diagram)
            .expect("invalid chess position diagram")
    }};
}
