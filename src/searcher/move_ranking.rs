//! Move ranking for the alpha-beta search. Captures of valuable pieces are
//! searched first; moves of equal rank are shuffled, so the engine varies its
//! choice among equally good options.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chess_move::{ChessMove, ChessMoveList};

/// The value of the piece on the move's capture square, or 0.
pub fn capture_value(chess_move: &ChessMove) -> i32 {
    chess_move
        .captured_piece()
        .map_or(0, |piece| piece.value())
}

/// Stable-sorts moves by descending capture value, then uniformly shuffles each
/// group of equal value in place. With `rank_captures` off every move scores 0
/// and the whole list is one shuffled group.
pub fn rank_moves<R: Rng + ?Sized>(
    moves: ChessMoveList,
    rank_captures: bool,
    rng: &mut R,
) -> ChessMoveList {
    let mut scored: Vec<(i32, ChessMove)> = moves
        .into_iter()
        .map(|chess_move| {
            let score = if rank_captures {
                capture_value(&chess_move)
            } else {
                0
            };
            (score, chess_move)
        })
        .collect();
    scored.sort_by(|(score_a, _), (score_b, _)| score_b.cmp(score_a));

    let mut start = 0;
    while start < scored.len() {
        let group_score = scored[start].0;
        let group_len = scored[start..]
            .iter()
            .take_while(|(score, _)| *score == group_score)
            .count();
        scored[start..start + group_len].shuffle(rng);
        start += group_len;
    }

    scored.into_iter().map(|(_, chess_move)| chess_move).collect()
}
