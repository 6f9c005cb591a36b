//! Common types re-exported for convenience.

pub use crate::board::{Board, Direction, PieceRecord, PieceType, Square, Team};
pub use crate::chess_move::{
    CastleChessMove, ChessMove, ChessMoveList, EnPassantChessMove, PawnPromotionChessMove,
    StandardChessMove,
};
pub use crate::player::{create_player, Difficulty, Player};
pub use crate::searcher::{SearchConfig, SearchEngine};
