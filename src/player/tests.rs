use std::convert::TryFrom;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{square::Square, team::Team, Board};
use crate::{chess_position, piece};
use crate::searcher::SearchConfig;

use super::*;

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col)
}

fn all_players() -> Vec<Box<dyn Player>> {
    let config = SearchConfig {
        depth: 2,
        ..SearchConfig::default()
    };
    Difficulty::ALL
        .iter()
        .map(|&difficulty| create_player(difficulty, config))
        .collect()
}

fn unmoved_capture_position() -> Board {
    chess_position! {
        ....k...
        ........
        ..q.r...
        ...P....
        ........
        ........
        ........
        ......K.
    }
}

/// The pawn has already moved, so its two captures are the only forcing moves.
fn capture_position() -> Board {
    let mut board = unmoved_capture_position();
    board.remove(sq(3, 3));
    board.put(sq(3, 3), piece!(Pawn, One, North).moved()).unwrap();
    board
}

fn mate_in_1() -> Board {
    chess_position! {
        .Q......
        ........
        ........
        ........
        ........
        ........
        k.K.....
        ........
    }
}

#[test]
fn test_difficulty_from_tier() {
    for tier in 1..=5 {
        assert_eq!(tier, Difficulty::try_from(tier).unwrap().tier());
    }
    assert_eq!(Err(PlayerError::InvalidDifficulty(0)), Difficulty::try_from(0));
    assert_eq!(Err(PlayerError::InvalidDifficulty(6)), Difficulty::try_from(6));
}

#[test]
fn test_factory_builds_the_requested_tier() {
    for (player, &difficulty) in all_players().iter().zip(Difficulty::ALL.iter()) {
        assert_eq!(difficulty, player.difficulty());
    }
}

#[test]
fn test_every_tier_plays_a_legal_move() {
    for player in all_players() {
        for seed in 0..4 {
            let mut board = Board::default();
            let legal = board.generate_legal_moves(Team::One);
            let mut rng = StdRng::seed_from_u64(seed);
            let chess_move = player
                .generate_move(&mut board, Team::One, &mut rng)
                .unwrap();
            assert!(legal.contains(&chess_move), "{} is not legal", chess_move);
            assert_eq!(Board::default(), board);
        }
    }
}

#[test]
fn test_every_tier_returns_none_without_moves() {
    let mut board = chess_position! {
        k.......
        ..Q.....
        .K......
        ........
        ........
        ........
        ........
        ........
    };
    for player in all_players() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(None, player.generate_move(&mut board, Team::Two, &mut rng));
    }
}

#[test]
fn test_aggressive_player_captures_when_possible() {
    for seed in 0..8 {
        let mut board = capture_position();
        let mut rng = StdRng::seed_from_u64(seed);
        let chess_move = AggressivePlayer
            .generate_move(&mut board, Team::One, &mut rng)
            .unwrap();
        assert!(chess_move.is_capture());
    }
}

#[test]
fn test_aggressive_player_counts_checks_as_forcing() {
    // an unmoved pawn can also double-step into check
    let mut board = unmoved_capture_position();
    let mut forcing = board.generate_capturing_moves(Team::One);
    let checks = board.generate_check_applying_moves(Team::One);
    assert!(checks.iter().any(|m| m.is_double_pawn_step()));
    forcing.extend(checks);

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chess_move = AggressivePlayer
            .generate_move(&mut board, Team::One, &mut rng)
            .unwrap();
        assert!(forcing.contains(&chess_move), "{} is not forcing", chess_move);
    }
}

#[test]
fn test_cautious_player_falls_back_to_captures() {
    // every move leaves something en prise, so captures are preferred
    let mut board = capture_position();
    assert!(board.generate_capture_avoiding_moves(Team::One).is_empty());
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chess_move = CautiousPlayer
            .generate_move(&mut board, Team::One, &mut rng)
            .unwrap();
        assert!(chess_move.is_capture());
    }
}

#[test]
fn test_cautious_player_moves_out_of_danger() {
    let mut board = chess_position! {
        k.......
        ........
        ..b.....
        ........
        ....R...
        ........
        ........
        K.......
    };
    let avoiding = board.generate_capture_avoiding_moves(Team::One);
    assert!(!avoiding.is_empty());
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chess_move = CautiousPlayer
            .generate_move(&mut board, Team::One, &mut rng)
            .unwrap();
        assert!(avoiding.contains(&chess_move), "{} can be captured", chess_move);
        assert_eq!(sq(4, 4), chess_move.from_square());
    }
}

#[test]
fn test_tactical_and_search_players_deliver_mate() {
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(TacticalPlayer),
        Box::new(SearchPlayer::new(SearchConfig {
            depth: 1,
            ..SearchConfig::default()
        })),
    ];
    for player in players {
        for seed in 0..4 {
            let mut board = mate_in_1();
            let mut rng = StdRng::seed_from_u64(seed);
            let chess_move = player
                .generate_move(&mut board, Team::One, &mut rng)
                .unwrap();
            board.make_move(chess_move);
            assert!(board.is_in_checkmate(Team::Two));
        }
    }
}

#[test]
fn test_tactical_player_prefers_safe_captures() {
    // the knight is defended by the pawn, the bishop is not and taking it checks
    let mut board = chess_position! {
        k.......
        ........
        ........
        .p......
        ..n.b...
        ...B....
        ........
        K.......
    };
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chess_move = TacticalPlayer
            .generate_move(&mut board, Team::One, &mut rng)
            .unwrap();
        assert_eq!(sq(4, 4), chess_move.to_square(), "chose {}", chess_move);
    }
}
