use crate::board::{
    piece::{PieceRecord, PROMOTION_TYPES},
    square::Square,
    Board,
};
use crate::chess_move::{
    ChessMoveList, EnPassantChessMove, PawnPromotionChessMove, StandardChessMove,
};

pub(super) fn pawn_moves(
    board: &Board,
    from: Square,
    pawn: PieceRecord,
    attacking_only: bool,
    moves: &mut ChessMoveList,
) {
    let forward = pawn.direction().forward();

    if !attacking_only {
        let single = from.offset(forward);
        if board.is_empty(single) {
            push_pawn_move(board, from, single, pawn, None, moves);

            let double = single.offset(forward);
            if !pawn.has_moved() && board.is_empty(double) {
                push_pawn_move(board, from, double, pawn, None, moves);
            }
        }
    }

    for &lateral in &pawn.direction().lateral() {
        let to = from.offset(forward).offset(lateral);
        if !board.is_on_board(to) {
            continue;
        }
        match board.piece_at(to) {
            Some(target) if target.team() != pawn.team() => {
                push_pawn_move(board, from, to, pawn, Some(target), moves)
            }
            None if attacking_only => push_pawn_move(board, from, to, pawn, None, moves),
            _ => {}
        }
    }

    en_passant_moves(board, from, pawn, moves);
}

/// A pawn move onto the far edge (the edge it faces) is replaced by the four
/// promotions; it is never generated as a plain move.
fn push_pawn_move(
    board: &Board,
    from: Square,
    to: Square,
    pawn: PieceRecord,
    captured: Option<PieceRecord>,
    moves: &mut ChessMoveList,
) {
    let reaches_far_edge = !board.is_on_board(to.offset(pawn.direction().forward()));
    if reaches_far_edge {
        for &promote_to in &PROMOTION_TYPES {
            moves.push(PawnPromotionChessMove::new(from, to, pawn, captured, promote_to).into());
        }
    } else {
        moves.push(StandardChessMove::new(from, to, pawn, captured).into());
    }
}

/// Available only as the immediate reply to an enemy double step that landed on
/// a lateral neighbour of this pawn. Like any other pawn move, one that lands on
/// the far edge is generated as the four promotions.
fn en_passant_moves(board: &Board, from: Square, pawn: PieceRecord, moves: &mut ChessMoveList) {
    let last_move = match board.last_move() {
        Some(last_move) if last_move.is_double_pawn_step() => last_move,
        _ => return,
    };
    if last_move.moved_piece().team() == pawn.team() {
        return;
    }

    let victim_square = last_move.to_square();
    let victim = match board.piece_at(victim_square) {
        Some(victim) => victim,
        None => return,
    };
    let forward = pawn.direction().forward();

    for &lateral in &pawn.direction().lateral() {
        if from.offset(lateral) != victim_square {
            continue;
        }
        let to = victim_square.offset(forward);
        if !board.is_empty(to) {
            continue;
        }
        let en_passant = EnPassantChessMove::new(from, to, victim_square, pawn, victim);
        if board.is_on_board(to.offset(forward)) {
            moves.push(en_passant.into());
        } else {
            for &promote_to in &PROMOTION_TYPES {
                moves.push(en_passant.promoting(promote_to).into());
            }
        }
    }
}
