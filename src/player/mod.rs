//! Computer players. Each difficulty tier is a strategy that picks one legal
//! move for a team; the top tier delegates to the alpha-beta search engine.

mod search_player;
mod strategies;

#[cfg(test)]
mod tests;

use std::convert::TryFrom;
use std::fmt;

use rand::seq::SliceRandom;
use rand::RngCore;
use thiserror::Error;

use crate::board::{team::Team, Board};
use crate::chess_move::ChessMove;
use crate::searcher::SearchConfig;

pub use search_player::SearchPlayer;
pub use strategies::{AggressivePlayer, CautiousPlayer, RandomPlayer, TacticalPlayer};

pub trait Player {
    fn difficulty(&self) -> Difficulty;

    /// Picks a legal move for `team`, or `None` if it has none. The board is
    /// mutated while candidates are examined but is returned unchanged.
    fn generate_move(
        &self,
        board: &mut Board,
        team: Team,
        rng: &mut dyn RngCore,
    ) -> Option<ChessMove>;
}

#[derive(Error, Debug, PartialEq)]
pub enum PlayerError {
    #[error("difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Random = 1,
    Aggressive = 2,
    Cautious = 3,
    Tactical = 4,
    Search = 5,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Random,
        Difficulty::Aggressive,
        Difficulty::Cautious,
        Difficulty::Tactical,
        Difficulty::Search,
    ];

    pub fn tier(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = PlayerError;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|difficulty| difficulty.tier() == tier)
            .ok_or(PlayerError::InvalidDifficulty(tier))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Random => "random",
            Difficulty::Aggressive => "aggressive",
            Difficulty::Cautious => "cautious",
            Difficulty::Tactical => "tactical",
            Difficulty::Search => "search",
        };
        write!(f, "{} ({})", name, self.tier())
    }
}

/// Builds the player for a difficulty tier. `search_config` only affects the
/// search tier.
pub fn create_player(difficulty: Difficulty, search_config: SearchConfig) -> Box<dyn Player> {
    match difficulty {
        Difficulty::Random => Box::new(RandomPlayer),
        Difficulty::Aggressive => Box::new(AggressivePlayer),
        Difficulty::Cautious => Box::new(CautiousPlayer),
        Difficulty::Tactical => Box::new(TacticalPlayer),
        Difficulty::Search => Box::new(SearchPlayer::new(search_config)),
    }
}

/// Uniformly random pick, equivalent to shuffling and taking the first move.
fn pick(moves: &[ChessMove], rng: &mut dyn RngCore) -> Option<ChessMove> {
    moves.choose(rng).cloned()
}
