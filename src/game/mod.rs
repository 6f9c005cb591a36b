//! Drivers built on top of the core: computer-vs-computer games and
//! position counting.

pub mod computer_vs_computer;
pub mod position_counter;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{team::Team, BoardError};
use crate::player::PlayerError;
use crate::searcher::{SearchError, DEFAULT_SEARCH_DEPTH};

pub use computer_vs_computer::{play_computer_vs_computer, play_game, GameOutcome};
pub use position_counter::count_positions;

pub const DEFAULT_MAX_MOVES: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Difficulty tiers, 1 through 5.
    pub team_one_difficulty: u8,
    pub team_two_difficulty: u8,
    /// Search depth for tier 5 players.
    pub depth: u8,
    /// Plies played before the game is called off.
    pub max_moves: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            team_one_difficulty: 5,
            team_two_difficulty: 5,
            depth: DEFAULT_SEARCH_DEPTH,
            max_moves: DEFAULT_MAX_MOVES,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn difficulty(&self, team: Team) -> u8 {
        match team {
            Team::One => self.team_one_difficulty,
            Team::Two => self.team_two_difficulty,
        }
    }

    /// A seeded generator when `seed` is set, otherwise one seeded from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GameError {
    #[error("board error: {0}")]
    Board(#[from] BoardError),
    #[error("player error: {0}")]
    Player(#[from] PlayerError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}
