//! Depth-limited, fail-soft alpha-beta minimax over a `Board`.
//!
//! The engine keeps no state between searches besides statistics. Scores are
//! from team one's perspective, so team one maximizes and team two minimizes
//! all the way down the recursion.

pub mod move_ranking;


use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::board::{team::Team, Board};
use crate::chess_move::ChessMove;
use crate::evaluate;

use self::move_ranking::rank_moves;

pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search.
    pub depth: u8,
    /// Search captures of valuable pieces first. When off, all moves rank
    /// equally and are searched in shuffled order.
    pub rank_captures: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            rank_captures: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
}

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

pub struct SearchEngine {
    config: SearchConfig,
    stats: SearchStats,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchConfig {
            depth,
            ..SearchConfig::default()
        })
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Statistics of the most recent `best_move` call.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Searches the configured depth with a full window and returns the chosen
    /// move with its score.
    pub fn best_move<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        team: Team,
        rng: &mut R,
    ) -> Result<(ChessMove, i32), SearchError> {
        self.reset_stats();
        let depth = self.config.depth.max(1);
        let (score, best_move) = self.search(board, depth, team, i32::MIN, i32::MAX, rng);
        debug!(
            "{} searched {} positions ({} cutoffs) at depth {}, score {}",
            team, self.stats.positions_searched, self.stats.cutoffs, depth, score
        );
        best_move
            .map(|chess_move| (chess_move, score))
            .ok_or(SearchError::NoAvailableMoves)
    }

    /// Fail-soft alpha-beta. Returns the best score for `team` to move and the
    /// move achieving it; the move is `None` at a leaf.
    ///
    /// A leaf is depth 0 or a position with no legal moves. Stalemate scores 0;
    /// anything else is evaluated statically, which includes the mate penalty
    /// when `team` is checkmated.
    pub fn search<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        depth: u8,
        team: Team,
        mut alpha: i32,
        mut beta: i32,
        rng: &mut R,
    ) -> (i32, Option<ChessMove>) {
        self.stats.positions_searched += 1;

        let moves = board.generate_legal_moves(team);
        if depth == 0 || moves.is_empty() {
            return (resolve_leaf(board, team, !moves.is_empty()), None);
        }

        let moves = rank_moves(moves, self.config.rank_captures, &mut *rng);
        let maximizing = team.maximize_score();
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for chess_move in moves {
            let (score, _) = board.with_move_applied(&chess_move, |board| {
                self.search(board, depth - 1, team.opposite(), alpha, beta, &mut *rng)
            });
            trace!("depth {} {}: {}", depth, chess_move, score);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(chess_move);
                }
                if best_score >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(chess_move);
                }
                if best_score <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
                beta = beta.min(best_score);
            }
        }

        (best_score, best_move)
    }
}

fn resolve_leaf(board: &Board, team: Team, has_legal_moves: bool) -> i32 {
    let in_check = board.is_in_check(team);
    if !has_legal_moves && !in_check {
        return 0;
    }
    let mut score = evaluate::board_score(board);
    if !has_legal_moves {
        score += evaluate::checkmate_adjustment(team);
    }
    score
}
