use core::fmt;

use crate::board::{piece::PieceRecord, square::Square, Board};

/// A plain relocation of one piece, possibly capturing whatever stood on the
/// destination.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct StandardChessMove {
    from_square: Square,
    to_square: Square,
    moved: PieceRecord,
    captured: Option<PieceRecord>,
}

impl StandardChessMove {
    pub fn new(
        from_square: Square,
        to_square: Square,
        moved: PieceRecord,
        captured: Option<PieceRecord>,
    ) -> Self {
        Self {
            from_square,
            to_square,
            moved,
            captured,
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

    pub fn apply(&self, board: &mut Board) {
        relocate(
            board,
            self.from_square,
            self.to_square,
            self.to_square,
            self.moved.moved(),
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

/// Shared by every move variant: clear the capture square, place `placed` on the
/// destination, clear the origin.
pub(crate) fn relocate(
    board: &mut Board,
    from_square: Square,
    to_square: Square,
    capture_square: Square,
    placed: PieceRecord,
) {
    board.set(capture_square, None);
    board.set(to_square, Some(placed));
    board.set(from_square, None);
}

/// The exact inverse of `relocate`, driven entirely by the snapshots stored in
/// the move rather than by what is currently on the board.
pub(crate) fn restore(
    board: &mut Board,
    from_square: Square,
    to_square: Square,
    capture_square: Square,
    moved: PieceRecord,
    captured: Option<PieceRecord>,
) {
    board.set(to_square, None);
    board.set(capture_square, captured);
    board.set(from_square, Some(moved));
}

impl fmt::Display for StandardChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture_msg = match self.captured {
            Some(piece) => format!(" (captures {})", piece),
            None => "".to_string(),
        };
        write!(
            f,
            "move {} {} -> {}{}",
            self.moved, self.from_square, self.to_square, capture_msg
        )
    }
}
