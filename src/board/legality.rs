//! Attack, check and legality queries. Every legality decision is made the
//! straightforward way: apply the candidate, look at the resulting position, and
//! undo it.

use crate::chess_move::{ChessMove, ChessMoveList};
use crate::move_generator;

use super::{piece::PieceType, square::Square, team::Team, Board};

impl Board {
    /// Pseudo-legal moves for every piece of `team`, in row-major square order.
    /// With `attacking_only`, only moves that can capture are produced.
    pub fn generate_pseudo_legal_moves(&self, team: Team, attacking_only: bool) -> ChessMoveList {
        let mut moves = ChessMoveList::new();
        for (square, _) in self.pieces(team) {
            moves.extend(move_generator::candidate_moves(self, square, attacking_only));
        }
        moves
    }

    /// True if any attacking move of the team opposing `defending_team` has
    /// `square` as its capture square.
    pub fn is_attacked(&self, square: Square, defending_team: Team) -> bool {
        if !self.is_on_board(square) {
            return false;
        }
        self.pieces(defending_team.opposite()).any(|(from, _)| {
            move_generator::candidate_moves(self, from, true)
                .iter()
                .any(|chess_move| chess_move.capture_square() == square)
        })
    }

    /// A team without a king is never in check.
    pub fn is_in_check(&self, team: Team) -> bool {
        match self.king_square(team) {
            Some(king) => self.is_attacked(king, team),
            None => false,
        }
    }

    pub fn generate_legal_moves(&mut self, team: Team) -> ChessMoveList {
        let candidates = self.generate_pseudo_legal_moves(team, false);
        self.retain_legal(candidates, team)
    }

    pub fn legal_moves_from(&mut self, square: Square) -> ChessMoveList {
        let team = match self.piece_at(square) {
            Some(piece) => piece.team(),
            None => return ChessMoveList::new(),
        };
        let candidates = move_generator::candidate_moves(self, square, false);
        self.retain_legal(candidates, team)
    }

    fn retain_legal(&mut self, candidates: ChessMoveList, team: Team) -> ChessMoveList {
        candidates
            .into_iter()
            .filter(|chess_move| {
                !self.with_move_applied(chess_move, |board| board.is_in_check(team))
            })
            .collect()
    }

    /// Legal moves whose capture square holds an opposing piece.
    pub fn generate_capturing_moves(&mut self, team: Team) -> ChessMoveList {
        self.generate_legal_moves(team)
            .into_iter()
            .filter(ChessMove::is_capture)
            .collect()
    }

    /// Legal moves after which the opponent is in check.
    pub fn generate_check_applying_moves(&mut self, team: Team) -> ChessMoveList {
        let moves = self.generate_legal_moves(team);
        self.filter_applied(moves, |board| board.is_in_check(team.opposite()))
    }

    /// Legal moves after which the opponent has no legal capturing reply at all,
    /// against any piece.
    pub fn generate_capture_avoiding_moves(&mut self, team: Team) -> ChessMoveList {
        let moves = self.generate_legal_moves(team);
        self.filter_applied(moves, |board| {
            board.generate_capturing_moves(team.opposite()).is_empty()
        })
    }

    /// Keeps the moves for which `predicate` holds on the position after the move.
    pub fn filter_applied<F>(&mut self, moves: ChessMoveList, mut predicate: F) -> ChessMoveList
    where
        F: FnMut(&mut Board) -> bool,
    {
        moves
            .into_iter()
            .filter(|chess_move| self.with_move_applied(chess_move, &mut predicate))
            .collect()
    }

    pub fn is_in_checkmate(&mut self, team: Team) -> bool {
        self.is_in_check(team) && self.generate_legal_moves(team).is_empty()
    }

    pub fn is_in_stalemate(&mut self, team: Team) -> bool {
        !self.is_in_check(team) && self.generate_legal_moves(team).is_empty()
    }

    /// Validates an externally supplied move. Returns the matching legal move, or
    /// `None` if no legal move from `from` to `to` has the requested promotion.
    pub fn create_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Option<ChessMove> {
        self.legal_moves_from(from)
            .into_iter()
            .find(|chess_move| chess_move.to_square() == to && chess_move.promotion() == promotion)
    }
}
