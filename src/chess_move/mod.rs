pub mod castle;
pub mod chess_move;
pub mod en_passant;
pub mod pawn_promotion;
pub mod standard;

use smallvec::SmallVec;

pub use castle::CastleChessMove;
pub use chess_move::ChessMove;
pub use en_passant::EnPassantChessMove;
pub use pawn_promotion::PawnPromotionChessMove;
pub use standard::StandardChessMove;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;
