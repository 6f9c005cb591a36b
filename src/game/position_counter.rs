//! Perft-style counting of the positions reachable in an exact number of plies.

use rayon::prelude::*;

use crate::board::{team::Team, Board};

/// Counts the leaf positions reachable from `board` in exactly `depth` plies of
/// legal moves, `team` moving first. Root moves are counted in parallel, each
/// on its own clone of the board.
pub fn count_positions(board: &Board, team: Team, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let mut root = board.clone();
    let candidates = root.generate_legal_moves(team);
    candidates
        .par_iter()
        .map(|chess_move| {
            let mut local_board = board.clone();
            local_board.make_move(chess_move.clone());
            count_positions_inner(&mut local_board, team.opposite(), depth - 1)
        })
        .sum()
}

fn count_positions_inner(board: &mut Board, team: Team, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let candidates = board.generate_legal_moves(team);
    if depth == 1 {
        return candidates.len();
    }

    candidates
        .iter()
        .map(|chess_move| {
            board.with_move_applied(chess_move, |board| {
                count_positions_inner(board, team.opposite(), depth - 1)
            })
        })
        .sum()
}
