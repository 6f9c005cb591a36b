//! Best move command - search a single position.

use direction_chess::board::{team::Team, Board};
use direction_chess::game::GameError;
use direction_chess::searcher::{SearchConfig, SearchEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "one")]
    pub team: Team,
    #[structopt(long, default_value = "8")]
    pub rows: usize,
    #[structopt(long, default_value = "8")]
    pub cols: usize,
    #[structopt(
        long,
        help = "Board diagram, one character per square: uppercase for team one, lowercase for team two, '.' for empty"
    )]
    pub position: Option<String>,
    #[structopt(long)]
    pub seed: Option<u64>,
    #[structopt(long = "no-ranking", help = "Search moves in shuffled order only")]
    pub no_ranking: bool,
}

impl BestMoveArgs {
    fn run(&self) -> Result<(), GameError> {
        let mut board = match &self.position {
            Some(diagram) => Board::from_diagram(self.rows, self.cols, diagram)?,
            None => Board::with_standard_layout(self.rows, self.cols)?,
        };
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut engine = SearchEngine::new(SearchConfig {
            depth: self.depth,
            rank_captures: !self.no_ranking,
        });
        let (chess_move, score) = engine.best_move(&mut board, self.team, &mut rng)?;
        let stats = engine.stats();
        println!("{}", chess_move);
        println!(
            "score: {}, positions searched: {}, cutoffs: {}",
            score, stats.positions_searched, stats.cutoffs
        );
        Ok(())
    }
}

impl Command for BestMoveArgs {
    fn execute(self) {
        if let Err(err) = self.run() {
            eprintln!("Failed to calculate best move: {}", err);
            std::process::exit(1);
        }
    }
}
