use core::fmt;

use crate::board::{
    piece::{PieceRecord, PieceType},
    square::Square,
    Board,
};

use super::standard::{relocate, restore};

/// Represents a pawn promotion chess move. The board logic is a standard pawn
/// move, except the piece placed on the destination has the promoted type. Undo
/// puts back the pawn snapshot stored in the move, never what is on the board.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PawnPromotionChessMove {
    from_square: Square,
    to_square: Square,
    moved: PieceRecord,
    captured: Option<PieceRecord>,
    promote_to: PieceType,
}

impl PawnPromotionChessMove {
    pub fn new(
        from_square: Square,
        to_square: Square,
        moved: PieceRecord,
        captured: Option<PieceRecord>,
        promote_to: PieceType,
    ) -> Self {
        Self {
            from_square,
            to_square,
            moved,
            captured,
            promote_to,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn moved(&self) -> PieceRecord {
        self.moved
    }

    pub fn captured(&self) -> Option<PieceRecord> {
        self.captured
    }

    pub fn promote_to(&self) -> PieceType {
        self.promote_to
    }

    pub fn apply(&self, board: &mut Board) {
        let promoted = self.moved.moved().promoted(self.promote_to);
        relocate(
            board,
            self.from_square,
            self.to_square,
            self.to_square,
            promoted,
        );
    }

    pub fn undo(&self, board: &mut Board) {
        restore(
            board,
            self.from_square,
            self.to_square,
            self.to_square,
            self.moved,
            self.captured,
        );
    }
}

impl fmt::Display for PawnPromotionChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture_msg = match self.captured {
            Some(piece) => format!(" (captures {})", piece),
            None => "".to_string(),
        };
        write!(
            f,
            "promote {} {} -> {} to {}{}",
            self.moved, self.from_square, self.to_square, self.promote_to, capture_msg
        )
    }
}
