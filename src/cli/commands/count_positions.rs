//! Count positions command - count reachable positions at each depth.

use std::time::{Duration, Instant};

use direction_chess::board::{team::Team, Board};
use direction_chess::game::count_positions;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long, default_value = "8")]
    pub rows: usize,
    #[structopt(long, default_value = "8")]
    pub cols: usize,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = match Board::with_standard_layout(self.rows, self.cols) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        };

        let mut total_positions = 0;
        let mut total_duration = Duration::from_secs(0);

        for depth in 1..=self.depth {
            let starting_time = Instant::now();
            let count = count_positions(&board, Team::One, depth);
            let duration = starting_time.elapsed();

            total_positions += count;
            total_duration += duration;

            println!(
                "depth: {}, positions: {}, positions per second: {:.0}",
                depth,
                count,
                count as f64 / duration.as_secs_f64()
            );
        }

        println!(
            "total positions: {}, total duration: {:?}, positions per second: {:.0}",
            total_positions,
            total_duration,
            total_positions as f64 / total_duration.as_secs_f64()
        );
    }
}
