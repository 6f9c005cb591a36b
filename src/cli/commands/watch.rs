//! Watch command - two computer players play each other.

use std::thread;
use std::time::Duration;

use direction_chess::board::Board;
use direction_chess::evaluate::GameEnding;
use direction_chess::game::{play_game, GameConfig};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "8")]
    pub rows: usize,
    #[structopt(long, default_value = "8")]
    pub cols: usize,
    #[structopt(long = "team-one", default_value = "5", help = "Difficulty tier for team one")]
    pub team_one_difficulty: u8,
    #[structopt(long = "team-two", default_value = "5", help = "Difficulty tier for team two")]
    pub team_two_difficulty: u8,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long = "max-moves", default_value = "200")]
    pub max_moves: usize,
    #[structopt(long, help = "Seed for reproducible games")]
    pub seed: Option<u64>,
    #[structopt(
        long = "delay",
        default_value = "0",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, help = "Draw pieces with unicode chess symbols")]
    pub unicode: bool,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = GameConfig {
            rows: self.rows,
            cols: self.cols,
            team_one_difficulty: self.team_one_difficulty,
            team_two_difficulty: self.team_two_difficulty,
            depth: self.depth,
            max_moves: self.max_moves,
            seed: self.seed,
        };

        let board = match Board::with_standard_layout(config.rows, config.cols) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };
        let unicode = self.unicode;
        let show = move |board: &Board| {
            if unicode {
                println!("{:#}", board);
            } else {
                println!("{}", board);
            }
        };
        show(&board);

        let delay = Duration::from_millis(self.delay_ms);
        let mut rng = config.rng();
        let result = play_game(board, &config, &mut rng, |board, team, chess_move| {
            println!("{}: {}", team, chess_move);
            show(board);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        });

        match result {
            Ok(outcome) => match outcome.ending {
                Some(GameEnding::Checkmate { loser }) => println!(
                    "checkmate! {} wins after {} moves",
                    loser.opposite(),
                    outcome.moves_played
                ),
                Some(GameEnding::Stalemate) => {
                    println!("stalemate after {} moves", outcome.moves_played)
                }
                None => println!("no result after {} moves", outcome.moves_played),
            },
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }
}
