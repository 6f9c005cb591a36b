use thiserror::Error;

use super::square::Square;

/// Setup errors. Queries against the board never fail; these only come from
/// building a position.
#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Board dimensions must be between 1 and i32::MAX, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("The standard layout needs at least 4 rows and 8 columns, got {rows}x{cols}")]
    BoardTooSmallForStandardLayout { rows: usize, cols: usize },
    #[error("Square {square} is not on the board")]
    SquareOutOfBounds { square: Square },
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupied { square: Square },
    #[error("Unknown piece character {glyph:?} in board diagram")]
    UnknownDiagramGlyph { glyph: char },
    #[error("Board diagram has {found} squares, expected {expected}")]
    DiagramSizeMismatch { expected: usize, found: usize },
}
