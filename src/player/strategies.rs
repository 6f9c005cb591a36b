use log::trace;
use rand::RngCore;

use crate::board::{team::Team, Board};
use crate::chess_move::{ChessMove, ChessMoveList};

use super::{pick, Difficulty, Player};

/// Any legal move.
pub struct RandomPlayer;

/// Captures and checks when available, otherwise any legal move.
pub struct AggressivePlayer;

/// Prefers moves that leave the opponent nothing to capture.
pub struct CautiousPlayer;

/// Checkmate first, then progressively less ambitious move classes.
pub struct TacticalPlayer;

impl Player for RandomPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Random
    }

    fn generate_move(
        &self,
        board: &mut Board,
        team: Team,
        rng: &mut dyn RngCore,
    ) -> Option<ChessMove> {
        pick(&board.generate_legal_moves(team), rng)
    }
}

impl Player for AggressivePlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Aggressive
    }

    fn generate_move(
        &self,
        board: &mut Board,
        team: Team,
        rng: &mut dyn RngCore,
    ) -> Option<ChessMove> {
        let forcing = forcing_moves(board, team);
        if !forcing.is_empty() {
            return pick(&forcing, rng);
        }
        pick(&board.generate_legal_moves(team), rng)
    }
}

impl Player for CautiousPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Cautious
    }

    fn generate_move(
        &self,
        board: &mut Board,
        team: Team,
        rng: &mut dyn RngCore,
    ) -> Option<ChessMove> {
        let avoiding = board.generate_capture_avoiding_moves(team);
        if !avoiding.is_empty() {
            let forcing = forcing_moves(board, team);
            let preferred: ChessMoveList = avoiding
                .iter()
                .filter(|chess_move| forcing.contains(chess_move))
                .cloned()
                .collect();
            let choices = if preferred.is_empty() { avoiding } else { preferred };
            return pick(&choices, rng);
        }

        let forcing = forcing_moves(board, team);
        if !forcing.is_empty() {
            return pick(&forcing, rng);
        }
        pick(&board.generate_legal_moves(team), rng)
    }
}

impl Player for TacticalPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Tactical
    }

    fn generate_move(
        &self,
        board: &mut Board,
        team: Team,
        rng: &mut dyn RngCore,
    ) -> Option<ChessMove> {
        let legal = board.generate_legal_moves(team);
        let classified: Vec<(ChessMove, MoveTraits)> = legal
            .into_iter()
            .map(|chess_move| {
                let traits = MoveTraits::of(board, &chess_move, team);
                (chess_move, traits)
            })
            .collect();

        let tiers: [fn(&MoveTraits) -> bool; 5] = [
            |t: &MoveTraits| t.checkmates,
            |t: &MoveTraits| t.captures && t.avoids_capture && t.gives_check,
            |t: &MoveTraits| t.captures && t.avoids_capture,
            |t: &MoveTraits| t.avoids_capture,
            |_: &MoveTraits| true,
        ];

        for (tier, accepts) in tiers.iter().enumerate() {
            let candidates: ChessMoveList = classified
                .iter()
                .filter(|(_, traits)| accepts(traits))
                .map(|(chess_move, _)| chess_move.clone())
                .collect();
            if !candidates.is_empty() {
                trace!("{} picks from cascade tier {} of {} moves", team, tier, candidates.len());
                return pick(&candidates, rng);
            }
        }
        None
    }
}

/// Legal captures followed by the non-capturing legal checks.
fn forcing_moves(board: &mut Board, team: Team) -> ChessMoveList {
    let mut forcing = board.generate_capturing_moves(team);
    for chess_move in board.generate_check_applying_moves(team) {
        if !forcing.contains(&chess_move) {
            forcing.push(chess_move);
        }
    }
    forcing
}

#[derive(Clone, Copy, Debug)]
struct MoveTraits {
    captures: bool,
    gives_check: bool,
    avoids_capture: bool,
    checkmates: bool,
}

impl MoveTraits {
    fn of(board: &mut Board, chess_move: &ChessMove, team: Team) -> Self {
        let opponent = team.opposite();
        board.with_move_applied(chess_move, |board| {
            let gives_check = board.is_in_check(opponent);
            Self {
                captures: chess_move.is_capture(),
                gives_check,
                avoids_capture: board.generate_capturing_moves(opponent).is_empty(),
                checkmates: gives_check && board.generate_legal_moves(opponent).is_empty(),
            }
        })
    }
}
