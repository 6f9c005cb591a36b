//! A chess engine core for rectangular boards of any size. Every piece carries
//! the direction it advances in, which decides pawn movement, promotion edges
//! and the castling axis.

pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod move_generator;
pub mod player;
pub mod prelude;
pub mod searcher;
