use std::convert::TryFrom;

use log::{debug, info};
use rand::RngCore;

use crate::board::{team::Team, Board};
use crate::chess_move::ChessMove;
use crate::evaluate::{self, GameEnding};
use crate::player::{create_player, Difficulty, Player};
use crate::searcher::SearchConfig;

use super::{GameConfig, GameError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` when the move limit was reached first.
    pub ending: Option<GameEnding>,
    pub moves_played: usize,
    pub board: Board,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Team> {
        match self.ending {
            Some(GameEnding::Checkmate { loser }) => Some(loser.opposite()),
            _ => None,
        }
    }
}

/// Plays a full game from the standard layout at the configured size.
pub fn play_computer_vs_computer(
    config: &GameConfig,
    rng: &mut dyn RngCore,
) -> Result<GameOutcome, GameError> {
    let board = Board::with_standard_layout(config.rows, config.cols)?;
    play_game(board, config, rng, |_, _, _| {})
}

/// Alternates the configured players from `board`, team one first, until one
/// side has no legal move or `config.max_moves` plies have been played.
/// `on_move` sees the board after every move.
pub fn play_game<F>(
    mut board: Board,
    config: &GameConfig,
    rng: &mut dyn RngCore,
    mut on_move: F,
) -> Result<GameOutcome, GameError>
where
    F: FnMut(&Board, Team, &ChessMove),
{
    let search_config = SearchConfig {
        depth: config.depth,
        ..SearchConfig::default()
    };
    let players: Vec<Box<dyn Player>> = Team::ALL
        .iter()
        .map(|&team| -> Result<Box<dyn Player>, GameError> {
            let difficulty = Difficulty::try_from(config.difficulty(team))?;
            Ok(create_player(difficulty, search_config))
        })
        .collect::<Result<_, GameError>>()?;

    let mut team = Team::One;
    let mut moves_played = 0;
    while moves_played < config.max_moves {
        let player = &players[team as usize];
        let chess_move = match player.generate_move(&mut board, team, rng) {
            Some(chess_move) => chess_move,
            None => break,
        };
        info!("{} ({}) plays {}", team, player.difficulty(), chess_move);
        board.make_move(chess_move.clone());
        on_move(&board, team, &chess_move);
        moves_played += 1;
        team = team.opposite();
    }

    let ending = evaluate::game_ending(&mut board, team);
    match ending {
        Some(GameEnding::Checkmate { loser }) => {
            info!("checkmate, {} wins after {} moves", loser.opposite(), moves_played)
        }
        Some(GameEnding::Stalemate) => info!("stalemate after {} moves", moves_played),
        None => debug!("move limit of {} reached", config.max_moves),
    }

    Ok(GameOutcome {
        ending,
        moves_played,
        board,
    })
}
