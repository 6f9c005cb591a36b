use crate::board::{piece::PieceRecord, piece::PieceType, square::Square, Board};
use crate::chess_move::{CastleChessMove, ChessMoveList};

use super::{pieces::leap, ALL_DIRECTIONS};

/// The king needs at least this many squares between itself and the rook's
/// square (counting the rook's) to castle: two to travel, one for the rook.
const MIN_CASTLE_DISTANCE: i32 = 3;

pub(super) fn king_moves(
    board: &Board,
    from: Square,
    king: PieceRecord,
    attacking_only: bool,
    moves: &mut ChessMoveList,
) {
    leap(board, from, king, &ALL_DIRECTIONS, moves);
    if !attacking_only {
        castle_moves(board, from, king, moves);
    }
}

/// Castling runs along the king's lateral axis: horizontal for a north/south
/// facing king, vertical for an east/west facing one. The first piece found in
/// each lateral direction must be an unmoved rook of the same team, and the
/// king's origin, pass-through, and destination squares must not be attacked.
fn castle_moves(board: &Board, from: Square, king: PieceRecord, moves: &mut ChessMoveList) {
    let team = king.team();
    if king.has_moved() || board.is_attacked(from, team) {
        return;
    }

    for &lateral in &king.direction().lateral() {
        let mut rook_from = from.offset(lateral);
        let mut distance = 1;
        while board.is_empty(rook_from) {
            rook_from = rook_from.offset(lateral);
            distance += 1;
        }

        let rook = match board.piece_at(rook_from) {
            Some(piece) if piece.is(PieceType::Rook) && piece.team() == team && !piece.has_moved() => {
                piece
            }
            _ => continue,
        };
        if distance < MIN_CASTLE_DISTANCE {
            continue;
        }

        let pass_through = from.offset(lateral);
        let to = pass_through.offset(lateral);
        if board.is_attacked(pass_through, team) || board.is_attacked(to, team) {
            continue;
        }

        moves.push(CastleChessMove::new(from, to, king, rook_from, pass_through, rook).into());
    }
}
