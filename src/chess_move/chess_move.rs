use core::fmt;

use crate::board::{
    piece::{PieceRecord, PieceType},
    square::Square,
    Board,
};

use super::castle::CastleChessMove;
use super::en_passant::EnPassantChessMove;
use super::pawn_promotion::PawnPromotionChessMove;
use super::standard::StandardChessMove;

/// A self-contained, reversible move. Each variant stores the pre-move records
/// of every piece it touches, so `undo` never needs to read the board to restore
/// it. Two moves are equal when every field matches.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ChessMove {
    Standard(StandardChessMove),
    PawnPromotion(PawnPromotionChessMove),
    EnPassant(EnPassantChessMove),
    Castle(CastleChessMove),
}

macro_rules! delegate_to_variants {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        match $self {
            ChessMove::Standard(m) => m.$method($($arg),*),
            ChessMove::PawnPromotion(m) => m.$method($($arg),*),
            ChessMove::EnPassant(m) => m.$method($($arg),*),
            ChessMove::Castle(m) => m.$method($($arg),*),
        }
    };
}

impl ChessMove {
    pub fn from_square(&self) -> Square {
        delegate_to_variants!(self, from_square)
    }

    pub fn to_square(&self) -> Square {
        delegate_to_variants!(self, to_square)
    }

    /// The square whose occupant is removed by this move. Equal to the
    /// destination for everything except en passant.
    pub fn capture_square(&self) -> Square {
        match self {
            ChessMove::EnPassant(m) => m.capture_square(),
            _ => self.to_square(),
        }
    }

    /// The pre-move record of the piece that moves (the king, for castling).
    pub fn moved_piece(&self) -> PieceRecord {
        match self {
            ChessMove::Standard(m) => m.moved(),
            ChessMove::PawnPromotion(m) => m.moved(),
            ChessMove::EnPassant(m) => m.moved(),
            ChessMove::Castle(m) => m.king(),
        }
    }

    pub fn captured_piece(&self) -> Option<PieceRecord> {
        match self {
            ChessMove::Standard(m) => m.captured(),
            ChessMove::PawnPromotion(m) => m.captured(),
            ChessMove::EnPassant(m) => Some(m.captured()),
            ChessMove::Castle(_) => None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn promotion(&self) -> Option<PieceType> {
        match self {
            ChessMove::PawnPromotion(m) => Some(m.promote_to()),
            ChessMove::EnPassant(m) => m.promote_to(),
            _ => None,
        }
    }

    /// A pawn advancing two squares, the only move that opens en passant for
    /// the opponent's immediate reply.
    pub fn is_double_pawn_step(&self) -> bool {
        match self {
            ChessMove::Standard(m) if m.moved().is(PieceType::Pawn) => {
                let (dr, dc) = m.moved().direction().forward();
                m.from_square().offset((2 * dr, 2 * dc)) == m.to_square()
            }
            _ => false,
        }
    }

    pub fn apply(&self, board: &mut Board) {
        delegate_to_variants!(self, apply, board)
    }

    pub fn undo(&self, board: &mut Board) {
        delegate_to_variants!(self, undo, board)
    }
}

impl From<StandardChessMove> for ChessMove {
    fn from(chess_move: StandardChessMove) -> Self {
        ChessMove::Standard(chess_move)
    }
}

impl From<PawnPromotionChessMove> for ChessMove {
    fn from(chess_move: PawnPromotionChessMove) -> Self {
        ChessMove::PawnPromotion(chess_move)
    }
}

impl From<EnPassantChessMove> for ChessMove {
    fn from(chess_move: EnPassantChessMove) -> Self {
        ChessMove::EnPassant(chess_move)
    }
}

impl From<CastleChessMove> for ChessMove {
    fn from(chess_move: CastleChessMove) -> Self {
        ChessMove::Castle(chess_move)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessMove::Standard(m) => fmt::Display::fmt(m, f),
            ChessMove::PawnPromotion(m) => fmt::Display::fmt(m, f),
            ChessMove::EnPassant(m) => fmt::Display::fmt(m, f),
            ChessMove::Castle(m) => fmt::Display::fmt(m, f),
        }
    }
}
