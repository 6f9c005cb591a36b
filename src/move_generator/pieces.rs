use crate::board::{piece::PieceRecord, square::Square, Board};
use crate::chess_move::ChessMoveList;

use super::{push_step, Offset, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};

/// Walks each ray until the edge or the first occupied square, capturing that
/// occupant if it is an enemy. Sliders never jump.
fn slide(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    rays: &[Offset],
    moves: &mut ChessMoveList,
) {
    for &ray in rays {
        let mut to = from.offset(ray);
        while push_step(board, from, to, piece, moves) {
            to = to.offset(ray);
        }
    }
}

/// Single steps to each offset.
pub(super) fn leap(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    offsets: &[Offset],
    moves: &mut ChessMoveList,
) {
    for &offset in offsets {
        push_step(board, from, from.offset(offset), piece, moves);
    }
}

pub(super) fn bishop_moves(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    _attacking_only: bool,
    moves: &mut ChessMoveList,
) {
    slide(board, from, piece, &DIAGONAL, moves);
}

pub(super) fn rook_moves(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    _attacking_only: bool,
    moves: &mut ChessMoveList,
) {
    slide(board, from, piece, &ORTHOGONAL, moves);
}

pub(super) fn queen_moves(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    _attacking_only: bool,
    moves: &mut ChessMoveList,
) {
    slide(board, from, piece, &ORTHOGONAL, moves);
    slide(board, from, piece, &DIAGONAL, moves);
}

pub(super) fn knight_moves(
    board: &Board,
    from: Square,
    piece: PieceRecord,
    _attacking_only: bool,
    moves: &mut ChessMoveList,
) {
    leap(board, from, piece, &KNIGHT_OFFSETS, moves);
}
