use log::debug;
use rand::RngCore;

use crate::board::{team::Team, Board};
use crate::chess_move::ChessMove;
use crate::searcher::{SearchConfig, SearchEngine};

use super::{Difficulty, Player};

/// Plays the alpha-beta search engine's choice.
pub struct SearchPlayer {
    config: SearchConfig,
}

impl SearchPlayer {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Player for SearchPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Search
    }

    fn generate_move(
        &self,
        board: &mut Board,
        team: Team,
        rng: &mut dyn RngCore,
    ) -> Option<ChessMove> {
        let mut engine = SearchEngine::new(self.config);
        match engine.best_move(board, team, rng) {
            Ok((chess_move, score)) => {
                debug!("{} chose {} with score {}", team, chess_move, score);
                Some(chess_move)
            }
            Err(err) => {
                debug!("{}: {}", team, err);
                None
            }
        }
    }
}
