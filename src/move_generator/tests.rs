use crate::board::{piece::PieceType, square::Square, team::Team, Board};
use crate::chess_move::ChessMove;
use crate::{chess_position, piece};

use super::*;

fn destinations(moves: &ChessMoveList) -> Vec<Square> {
    let mut squares: Vec<Square> = moves.iter().map(ChessMove::to_square).collect();
    squares.sort();
    squares.dedup();
    squares
}

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col)
}

#[test]
fn test_empty_square_has_no_candidates() {
    let board = Board::default();
    assert!(candidate_moves(&board, sq(4, 4), false).is_empty());
    assert!(candidate_moves(&board, sq(9, 9), false).is_empty());
}

#[test]
fn test_rook_stops_at_first_occupant() {
    let board = chess_position! {
        ........
        ...p....
        ........
        ........
        .P.R....
        ........
        ........
        ........
    };
    let moves = candidate_moves(&board, sq(4, 3), false);
    let expected = vec![
        sq(1, 3),
        sq(2, 3),
        sq(3, 3),
        sq(4, 2),
        sq(4, 4),
        sq(4, 5),
        sq(4, 6),
        sq(4, 7),
        sq(5, 3),
        sq(6, 3),
        sq(7, 3),
    ];
    assert_eq!(expected, destinations(&moves));

    let captures: Vec<&ChessMove> = moves.iter().filter(|m| m.is_capture()).collect();
    assert_eq!(1, captures.len());
    assert_eq!(sq(1, 3), captures[0].to_square());
}

#[test]
fn test_bishop_and_queen_rays() {
    let board = chess_position! {
        ........
        ........
        ........
        ........
        ........
        ........
        .P......
        B.......
    };
    let bishop_moves = candidate_moves(&board, sq(7, 0), false);
    assert!(bishop_moves.is_empty());

    let mut board = Board::new(3, 3).unwrap();
    board.put(sq(1, 1), piece!(Queen, One, North)).unwrap();
    let queen_moves = candidate_moves(&board, sq(1, 1), false);
    assert_eq!(8, queen_moves.len());
}

#[test]
fn test_knight_jumps_and_skips_own_pieces() {
    let board = chess_position! {
        ........
        ........
        ........
        ........
        ........
        ..p.....
        ...P....
        .N......
    };
    let moves = candidate_moves(&board, sq(7, 1), false);
    assert_eq!(vec![sq(5, 0), sq(5, 2)], destinations(&moves));
    assert!(moves.iter().any(|m| m.to_square() == sq(5, 2) && m.is_capture()));
}

#[test]
fn test_pawn_single_and_double_step() {
    let board = Board::default();
    let moves = candidate_moves(&board, sq(6, 4), false);
    assert_eq!(vec![sq(4, 4), sq(5, 4)], destinations(&moves));
    assert!(moves.iter().any(ChessMove::is_double_pawn_step));
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let board = chess_position! {
        ........
        ........
        ........
        ........
        ....p...
        ...n....
        ...PP...
        ........
    };
    assert_eq!(
        vec![sq(5, 4)],
        destinations(&candidate_moves(&board, sq(6, 4), false))
            .into_iter()
            .filter(|s| s.col() == 4)
            .collect::<Vec<_>>()
    );
    // blocked on the first step: no double step either
    let pushes: Vec<Square> = destinations(&candidate_moves(&board, sq(6, 3), false))
        .into_iter()
        .filter(|s| s.col() == 3)
        .collect();
    assert!(pushes.is_empty());
}

#[test]
fn test_moved_pawn_has_no_double_step() {
    let mut board = Board::new(8, 8).unwrap();
    board.put(sq(6, 0), piece!(Pawn, One, North).moved()).unwrap();
    assert_eq!(vec![sq(5, 0)], destinations(&candidate_moves(&board, sq(6, 0), false)));
}

#[test]
fn test_attacking_only_pawn_covers_empty_diagonals_and_skips_pushes() {
    let board = Board::default();
    let moves = candidate_moves(&board, sq(6, 4), true);
    assert_eq!(vec![sq(5, 3), sq(5, 5)], destinations(&moves));
    assert!(moves.iter().all(|m| !m.is_capture()));

    // plain generation does not offer diagonals onto empty squares
    assert!(candidate_moves(&board, sq(6, 4), false)
        .iter()
        .all(|m| m.to_square().col() == 4));
}

#[test]
fn test_pawn_follows_its_direction() {
    let mut board = Board::new(5, 5).unwrap();
    board.put(sq(2, 0), piece!(Pawn, One, East)).unwrap();
    board.put(sq(1, 1), piece!(Knight, Two, South)).unwrap();
    let moves = candidate_moves(&board, sq(2, 0), false);
    assert_eq!(vec![sq(1, 1), sq(2, 1), sq(2, 2)], destinations(&moves));
}

#[test]
fn test_promotion_produces_exactly_four_moves() {
    let board = chess_position! {
        ..r.....
        ...P....
        ........
        ........
        ........
        ........
        ........
        ........
    };
    let moves = candidate_moves(&board, sq(1, 3), false);
    let pushes: Vec<&ChessMove> = moves.iter().filter(|m| m.to_square() == sq(0, 3)).collect();
    let captures: Vec<&ChessMove> = moves.iter().filter(|m| m.to_square() == sq(0, 2)).collect();

    for group in [pushes, captures].iter() {
        assert_eq!(4, group.len());
        let mut promotions: Vec<PieceType> = group.iter().filter_map(|m| m.promotion()).collect();
        promotions.sort();
        assert_eq!(
            vec![
                PieceType::Queen,
                PieceType::Rook,
                PieceType::Bishop,
                PieceType::Knight
            ],
            promotions
        );
    }
    assert!(moves.iter().all(|m| m.promotion().is_some()));
}

#[test]
fn test_promotion_edge_follows_direction() {
    let mut board = Board::new(4, 4).unwrap();
    board.put(sq(1, 2), piece!(Pawn, Two, East).moved()).unwrap();
    let moves = candidate_moves(&board, sq(1, 2), false);
    assert_eq!(4, moves.len());
    assert!(moves.iter().all(|m| m.to_square() == sq(1, 3)));
}

#[test]
fn test_king_steps() {
    let mut board = Board::new(3, 3).unwrap();
    board.put(sq(0, 0), piece!(King, One, North).moved()).unwrap();
    assert_eq!(
        vec![sq(0, 1), sq(1, 0), sq(1, 1)],
        destinations(&candidate_moves(&board, sq(0, 0), false))
    );
}

fn castle_position() -> Board {
    chess_position! {
        ....k...
        ........
        ........
        ........
        ........
        ........
        ........
        R...K..R
    }
}

fn castles(board: &Board) -> Vec<Square> {
    candidate_moves(board, sq(7, 4), false)
        .iter()
        .filter(|m| matches!(m, ChessMove::Castle(_)))
        .map(ChessMove::to_square)
        .collect()
}

#[test]
fn test_castling_offered_on_both_sides() {
    let board = castle_position();
    assert_eq!(vec![sq(7, 2), sq(7, 6)], castles(&board));

    let kingside = candidate_moves(&board, sq(7, 4), false)
        .into_iter()
        .find(|m| m.to_square() == sq(7, 6))
        .unwrap();
    match kingside {
        ChessMove::Castle(castle) => {
            assert_eq!(sq(7, 7), castle.rook_from_square());
            assert_eq!(sq(7, 5), castle.rook_to_square());
        }
        other => panic!("expected a castle, got {}", other),
    }
}

#[test]
fn test_castling_not_offered_in_attacking_mode() {
    let board = castle_position();
    assert!(candidate_moves(&board, sq(7, 4), true)
        .iter()
        .all(|m| !matches!(m, ChessMove::Castle(_))));
}

#[test]
fn test_castling_requires_unmoved_king() {
    let mut board = castle_position();
    let king = board.remove(sq(7, 4)).unwrap();
    board.put(sq(7, 4), king.moved()).unwrap();
    assert!(castles(&board).is_empty());
}

#[test]
fn test_castling_requires_unmoved_rook() {
    let mut board = castle_position();
    let rook = board.remove(sq(7, 7)).unwrap();
    board.put(sq(7, 7), rook.moved()).unwrap();
    assert_eq!(vec![sq(7, 2)], castles(&board));
}

#[test]
fn test_castling_requires_empty_between_squares() {
    let mut board = castle_position();
    board.put(sq(7, 1), piece!(Knight, One, North)).unwrap();
    assert_eq!(vec![sq(7, 6)], castles(&board));
}

#[test]
fn test_castling_requires_unattacked_path() {
    // pass-through square attacked
    let mut board = castle_position();
    board.put(sq(3, 5), piece!(Rook, Two, South)).unwrap();
    assert_eq!(vec![sq(7, 2)], castles(&board));

    // destination attacked
    let mut board = castle_position();
    board.put(sq(3, 2), piece!(Rook, Two, South)).unwrap();
    assert_eq!(vec![sq(7, 6)], castles(&board));

    // king in check
    let mut board = castle_position();
    board.put(sq(3, 4), piece!(Rook, Two, South)).unwrap();
    assert!(castles(&board).is_empty());

    // an attacked rook does not matter
    let mut board = castle_position();
    board.put(sq(3, 7), piece!(Rook, Two, South)).unwrap();
    assert_eq!(vec![sq(7, 2), sq(7, 6)], castles(&board));
}

#[test]
fn test_castling_runs_vertically_for_east_facing_king() {
    let mut board = Board::new(8, 8).unwrap();
    board.put(sq(4, 0), piece!(King, One, East)).unwrap();
    board.put(sq(0, 0), piece!(Rook, One, East)).unwrap();
    board.put(sq(7, 0), piece!(Rook, One, East)).unwrap();
    assert_eq!(
        vec![sq(2, 0), sq(6, 0)],
        candidate_moves(&board, sq(4, 0), false)
            .iter()
            .filter(|m| matches!(m, ChessMove::Castle(_)))
            .map(ChessMove::to_square)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_en_passant_after_double_step() {
    let mut board = chess_position! {
        ....k...
        ...p....
        ........
        ....P...
        ........
        ........
        ........
        ....K...
    };
    let double_step = board.create_move(sq(1, 3), sq(3, 3), None).unwrap();
    assert!(double_step.is_double_pawn_step());
    board.make_move(double_step);

    let en_passant = candidate_moves(&board, sq(3, 4), false)
        .into_iter()
        .find(|m| matches!(m, ChessMove::EnPassant(_)))
        .expect("en passant should be available");
    assert_eq!(sq(2, 3), en_passant.to_square());
    assert_eq!(sq(3, 3), en_passant.capture_square());
    assert_eq!(Some(piece!(Pawn, Two, South).moved()), en_passant.captured_piece());
}

#[test]
fn test_en_passant_onto_the_far_edge_promotes() {
    let mut board = Board::new(8, 8).unwrap();
    board.put(sq(1, 3), piece!(Pawn, One, North).moved()).unwrap();
    board.put(sq(1, 0), piece!(Pawn, Two, East)).unwrap();
    board.put(sq(7, 7), piece!(King, One, North)).unwrap();
    board.put(sq(7, 0), piece!(King, Two, South)).unwrap();

    let double_step = board.create_move(sq(1, 0), sq(1, 2), None).unwrap();
    assert!(double_step.is_double_pawn_step());
    board.make_move(double_step);

    let moves = board.legal_moves_from(sq(1, 3));
    assert!(moves
        .iter()
        .filter(|m| m.to_square().row() == 0)
        .all(|m| m.promotion().is_some()));

    let en_passant: Vec<&ChessMove> = moves
        .iter()
        .filter(|m| matches!(m, ChessMove::EnPassant(_)))
        .collect();
    assert_eq!(4, en_passant.len());
    assert!(en_passant.iter().all(|m| m.to_square() == sq(0, 2)));
    assert!(en_passant.iter().all(|m| m.capture_square() == sq(1, 2)));

    let before = board.clone();
    let capture = board
        .create_move(sq(1, 3), sq(0, 2), Some(PieceType::Queen))
        .unwrap();
    board.make_move(capture);
    assert_eq!(
        Some(PieceType::Queen),
        board.piece_at(sq(0, 2)).map(|piece| piece.piece_type())
    );
    assert_eq!(None, board.piece_at(sq(1, 2)));
    assert!(board.undo_move());
    assert_eq!(before.piece_at(sq(1, 3)), board.piece_at(sq(1, 3)));
    assert_eq!(before.piece_at(sq(1, 2)), board.piece_at(sq(1, 2)));
    assert_eq!(None, board.piece_at(sq(0, 2)));
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut board = chess_position! {
        ....k...
        ...p....
        ........
        ....P...
        ........
        ........
        ........
        ....K...
    };
    let double_step = board.create_move(sq(1, 3), sq(3, 3), None).unwrap();
    board.make_move(double_step);
    let king_move = board.create_move(sq(7, 4), sq(7, 3), None).unwrap();
    board.make_move(king_move);
    let king_move = board.create_move(sq(0, 4), sq(0, 3), None).unwrap();
    board.make_move(king_move);

    assert!(candidate_moves(&board, sq(3, 4), false)
        .iter()
        .all(|m| !matches!(m, ChessMove::EnPassant(_))));
}

#[test]
fn test_no_en_passant_after_single_steps() {
    let mut board = chess_position! {
        ....k...
        ........
        ...p....
        ....P...
        ........
        ........
        ........
        ....K...
    };
    let single_step = board.create_move(sq(2, 3), sq(3, 3), None).unwrap();
    board.make_move(single_step);
    assert!(candidate_moves(&board, sq(3, 4), false)
        .iter()
        .all(|m| !matches!(m, ChessMove::EnPassant(_))));
}

#[test]
fn test_generate_pseudo_legal_moves_covers_every_piece() {
    let board = Board::default();
    // 16 pawn moves and 4 knight moves
    assert_eq!(20, board.generate_pseudo_legal_moves(Team::One, false).len());
    assert_eq!(20, board.generate_pseudo_legal_moves(Team::Two, false).len());
}
