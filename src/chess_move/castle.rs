use core::fmt;

use crate::board::{piece::PieceRecord, square::Square, Board};

/// Represents a castle move: the king moves two squares toward an unmoved rook
/// and the rook lands on the square the king passed over. Both pieces must be
/// unmoved for the move to be generated, so undo restores them unmoved.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CastleChessMove {
    /// The square the king is moving from
    from_square: Square,

    /// The square the king is moving to
    to_square: Square,

    king: PieceRecord,
    rook_from_square: Square,
    rook_to_square: Square,
    rook: PieceRecord,
}

impl CastleChessMove {
    pub fn new(
        from_square: Square,
        to_square: Square,
        king: PieceRecord,
        rook_from_square: Square,
        rook_to_square: Square,
        rook: PieceRecord,
    ) -> Self {
        Self {
            from_square,
            to_square,
            king,
            rook_from_square,
            rook_to_square,
            rook,
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn king(&self) -> PieceRecord {
        self.king
    }

    pub fn rook(&self) -> PieceRecord {
        self.rook
    }

    pub fn rook_from_square(&self) -> Square {
        self.rook_from_square
    }

    pub fn rook_to_square(&self) -> Square {
        self.rook_to_square
    }

    pub fn apply(&self, board: &mut Board) {
        board.set(self.from_square, None);
        board.set(self.rook_from_square, None);
        board.set(self.to_square, Some(self.king.moved()));
        board.set(self.rook_to_square, Some(self.rook.moved()));
    }

    pub fn undo(&self, board: &mut Board) {
        board.set(self.to_square, None);
        board.set(self.rook_to_square, None);
        board.set(self.from_square, Some(self.king.unmoved()));
        board.set(self.rook_from_square, Some(self.rook.unmoved()));
    }
}

impl fmt::Display for CastleChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "castle {} {} -> {} with {} {} -> {}",
            self.king,
            self.from_square,
            self.to_square,
            self.rook,
            self.rook_from_square,
            self.rook_to_square
        )
    }
}
