//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "direction-chess",
    about = "Chess on boards of any size, where every piece knows which way is forward"
)]
pub enum Chess {
    #[structopt(
        name = "watch",
        about = "Watch two computer players play each other from the standard layout. Each team's strength is a difficulty tier from 1 (random) to 5 (alpha-beta search at `--depth`)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Search a position for the best move at the given `--depth` (default: 4). The position is the standard layout unless a board diagram is given with `--position`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable in 1 through `--depth` plies (default: 4) from the standard layout, reporting how long each depth took."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Watch(cmd),
            BestMove(cmd),
            CountPositions(cmd),
        }
    }
}
