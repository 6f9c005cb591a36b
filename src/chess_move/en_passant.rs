use core::fmt;

use crate::board::{
    piece::{PieceRecord, PieceType},
    square::Square,
    Board,
};

use super::standard::{relocate, restore};

/// A pawn capturing a pawn that just double-stepped past it. The captured pawn
/// is not on the destination square, so the capture square is stored separately.
/// When the destination is the capturing pawn's far edge the move also promotes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EnPassantChessMove {
    from_square: Square,
    to_square: Square,
    capture_square: Square,
    moved: PieceRecord,
    captured: PieceRecord,
    promote_to: Option<PieceType>,
}

impl EnPassantChessMove {
    pub fn new(
        from_square: Square,
        to_square: Square,
        capture_square: Square,
        moved: PieceRecord,
        captured: PieceRecord,
    ) -> Self {
        Self {
            from_square,
            to_square,
            capture_square,
            moved,
            captured,
            promote_to: None,
        }
    }

    pub fn promoting(self, promote_to: PieceType) -> Self {
        Self {
            promote_to: Some(promote_to),
            ..self
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn capture_square(&self) -> Square {
        self.capture_square
    }

    pub fn moved(&self) -> PieceRecord {
        self.moved
    }

    pub fn captured(&self) -> PieceRecord {
        self.captured
    }

    pub fn promote_to(&self) -> Option<PieceType> {
        self.promote_to
    }

    pub fn apply(&self, board: &mut Board) {
        let placed = match self.promote_to {
            Some(piece_type) => self.moved.moved().promoted(piece_type),
            None => self.moved.moved(),
        };
        relocate(
            board,
            self.from_square,
            self.to_square,
            self.capture_square,
            placed,
        );
    }

    pub fn undo(&self, board: &mut Board) {
        restore(
            board,
            self.from_square,
            self.to_square,
            self.capture_square,
            self.moved,
            Some(self.captured),
        );
    }
}

impl fmt::Display for EnPassantChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "en passant {} {} -> {} (captures {} on {})",
            self.moved, self.from_square, self.to_square, self.captured, self.capture_square
        )?;
        if let Some(piece_type) = self.promote_to {
            write!(f, " promoting to {}", piece_type)?;
        }
        Ok(())
    }
}
