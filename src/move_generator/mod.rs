//! The piece rule set: one pure function per piece type that produces the
//! pseudo-legal candidate moves of the piece on a square. Candidates may leave
//! the mover's own king in check; `Board::generate_legal_moves` filters those.
//!
//! In `attacking_only` mode a rule produces only moves that can capture: pawn
//! pushes and castling are skipped, and pawn diagonals are produced even when
//! the target square is empty.

mod king;
mod offsets;
mod pawn;
mod pieces;

use crate::board::{piece::PieceRecord, piece::PieceType, square::Square, Board};
use crate::chess_move::{ChessMoveList, StandardChessMove};

pub use offsets::{Offset, ALL_DIRECTIONS, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};

type MoveRule = fn(&Board, Square, PieceRecord, bool, &mut ChessMoveList);

pub fn rule_for(piece_type: PieceType) -> MoveRule {
    match piece_type {
        PieceType::King => king::king_moves,
        PieceType::Queen => pieces::queen_moves,
        PieceType::Rook => pieces::rook_moves,
        PieceType::Bishop => pieces::bishop_moves,
        PieceType::Knight => pieces::knight_moves,
        PieceType::Pawn => pawn::pawn_moves,
    }
}

/// Candidate moves for whatever piece stands on `from`. An empty or off-board
/// square has no candidates.
pub fn candidate_moves(board: &Board, from: Square, attacking_only: bool) -> ChessMoveList {
    let mut moves = ChessMoveList::new();
    if let Some(piece) = board.piece_at(from) {
        rule_for(piece.piece_type())(board, from, piece, attacking_only, &mut moves);
    }
    moves
}

/// Adds a single step to `to` if it is empty or holds an enemy piece. Returns
/// true if the square was empty, i.e. a sliding piece may keep going.
fn push_step(
    board: &Board,
    from: Square,
    to: Square,
    piece: PieceRecord,
    moves: &mut ChessMoveList,
) -> bool {
    if !board.is_on_board(to) {
        return false;
    }
    match board.piece_at(to) {
        None => {
            moves.push(StandardChessMove::new(from, to, piece, None).into());
            true
        }
        Some(target) => {
            if target.team() != piece.team() {
                moves.push(StandardChessMove::new(from, to, piece, Some(target)).into());
            }
            false
        }
    }
}

#[cfg(test)]
mod tests;
