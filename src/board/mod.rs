pub mod direction;
pub mod error;
pub mod piece;
pub mod square;
pub mod team;

mod board;
mod display;
mod legality;


pub use board::Board;
pub use direction::Direction;
pub use error::BoardError;
pub use piece::{PieceRecord, PieceType};
pub use square::Square;
pub use team::Team;
