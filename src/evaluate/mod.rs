//! Static evaluation. Scores are always from team one's perspective: positive
//! favours team one, negative favours team two.

use crate::board::{piece::PieceRecord, square::Square, team::Team, Board};

/// Added or subtracted when the evaluated team is checkmated. Larger than any
/// material swing on a standard board.
pub const MATE_SCORE: i32 = 1000;

const MATERIAL_WEIGHT: i32 = 10;

/// Advancement stops paying once a piece is this many squares short of the board
/// extent, so unsupported pushes are not rewarded.
const ADVANCEMENT_CAP_MARGIN: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    Checkmate { loser: Team },
    Stalemate,
}

/// Returns the game ending state if `team`, to move, has no legal moves.
pub fn game_ending(board: &mut Board, team: Team) -> Option<GameEnding> {
    if !board.generate_legal_moves(team).is_empty() {
        return None;
    }
    if board.is_in_check(team) {
        Some(GameEnding::Checkmate { loser: team })
    } else {
        Some(GameEnding::Stalemate)
    }
}

/// Material plus positional bonus plus the mate adjustment when `team` is
/// checkmated.
pub fn score(board: &mut Board, team: Team) -> i32 {
    let mut score = board_score(board);
    if board.is_in_checkmate(team) {
        score += checkmate_adjustment(team);
    }
    score
}

/// The mate bonus or penalty for `loser` being checkmated.
pub fn checkmate_adjustment(loser: Team) -> i32 {
    if loser.maximize_score() {
        -MATE_SCORE
    } else {
        MATE_SCORE
    }
}

/// Material and positional score of every piece on the board, ignoring
/// checkmate.
pub fn board_score(board: &Board) -> i32 {
    Team::ALL
        .iter()
        .map(|&team| {
            let total: i32 = board
                .pieces(team)
                .map(|(square, piece)| piece_score(board, square, piece))
                .sum();
            if team.maximize_score() {
                total
            } else {
                -total
            }
        })
        .sum()
}

fn piece_score(board: &Board, square: Square, piece: PieceRecord) -> i32 {
    piece.value() * MATERIAL_WEIGHT + advancement_bonus(board, square, piece)
}

/// How far the piece has advanced toward the edge it faces, capped at the
/// board's extent along that axis minus `ADVANCEMENT_CAP_MARGIN`.
fn advancement_bonus(board: &Board, square: Square, piece: PieceRecord) -> i32 {
    let direction = piece.direction();
    let (rows, cols) = (board.rows(), board.cols());
    let advancement = direction.advancement(square.row(), square.col(), rows, cols);
    let cap = (direction.extent(rows, cols) as i32 - ADVANCEMENT_CAP_MARGIN).max(0);
    advancement.min(cap).max(0)
}
