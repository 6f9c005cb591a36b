//! Board state: the piece grid plus the completed and undone move stacks.

use log::trace;

use crate::chess_move::ChessMove;

use super::{
    direction::Direction,
    error::BoardError,
    piece::{PieceRecord, PieceType},
    square::Square,
    team::Team,
};

const STANDARD_BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Represents the state of a chess board of any size.
///
/// The grid is a flat row-major array of optional piece records, so cloning a
/// board is a single deep copy with no shared state. Anything that needs to
/// search or filter moves concurrently should work on its own clone, since both
/// legality filtering and search apply and undo moves on the board in place.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: Vec<Option<PieceRecord>>,
    completed_moves: Vec<ChessMove>,
    undone_moves: Vec<ChessMove>,
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::empty(8, 8);
        board.place_standard_layout();
        board
    }
}

impl Board {
    /// An empty board. Both dimensions must be at least 1, and squares are
    /// addressed with `i32` coordinates, so neither may exceed `i32::MAX`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let max = i32::MAX as usize;
        if rows == 0 || cols == 0 || rows > max || cols > max || rows.checked_mul(cols).is_none()
        {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::empty(rows, cols))
    }

    /// Standard back rank centred on the row, pawns across the whole second row.
    /// Team one sits at the bottom facing north, team two at the top facing south.
    pub fn with_standard_layout(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < 4 || cols < 8 {
            return Err(BoardError::BoardTooSmallForStandardLayout { rows, cols });
        }
        let mut board = Self::new(rows, cols)?;
        board.place_standard_layout();
        Ok(board)
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            grid: vec![None; rows * cols],
            completed_moves: Vec::new(),
            undone_moves: Vec::new(),
        }
    }

    fn place_standard_layout(&mut self) {
        let last_row = self.rows as i32 - 1;
        let first_col = ((self.cols - STANDARD_BACK_RANK.len()) / 2) as i32;
        let sides = [
            (Team::Two, Direction::South, 0, 1),
            (Team::One, Direction::North, last_row, last_row - 1),
        ];

        for &(team, direction, back_row, pawn_row) in &sides {
            for (i, &piece_type) in STANDARD_BACK_RANK.iter().enumerate() {
                let square = Square::new(back_row, first_col + i as i32);
                self.set(square, Some(PieceRecord::new(piece_type, team, direction)));
            }
            for col in 0..self.cols as i32 {
                let square = Square::new(pawn_row, col);
                self.set(
                    square,
                    Some(PieceRecord::new(PieceType::Pawn, team, direction)),
                );
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, square: Square) -> Option<usize> {
        if self.is_on_board(square) {
            Some(square.row() as usize * self.cols + square.col() as usize)
        } else {
            None
        }
    }

    pub fn is_on_board(&self, square: Square) -> bool {
        square.row() >= 0
            && square.col() >= 0
            && (square.row() as usize) < self.rows
            && (square.col() as usize) < self.cols
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceRecord> {
        self.index(square).and_then(|i| self.grid[i])
    }

    /// True only for on-board squares with no piece on them.
    pub fn is_empty(&self, square: Square) -> bool {
        self.is_on_board(square) && self.piece_at(square).is_none()
    }

    pub fn is_same_team(&self, square: Square, team: Team) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.team() == team)
    }

    pub fn is_other_team(&self, square: Square, team: Team) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.team() != team)
    }

    #[must_use = "placing a piece may fail if the square is occupied or off the board"]
    pub fn put(&mut self, square: Square, piece: PieceRecord) -> Result<(), BoardError> {
        let index = self
            .index(square)
            .ok_or(BoardError::SquareOutOfBounds { square })?;
        if self.grid[index].is_some() {
            return Err(BoardError::SquareOccupied { square });
        }
        self.grid[index] = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<PieceRecord> {
        let index = self.index(square)?;
        self.grid[index].take()
    }

    /// Overwrites a square. Used by move application, which already knows what
    /// the square held. Off-board writes are ignored.
    pub(crate) fn set(&mut self, square: Square, piece: Option<PieceRecord>) {
        if let Some(index) = self.index(square) {
            self.grid[index] = piece;
        }
    }

    /// All on-board squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Square::new(row, col)))
    }

    /// The occupied squares of one team in row-major order.
    pub fn pieces(&self, team: Team) -> impl Iterator<Item = (Square, PieceRecord)> + '_ {
        self.squares().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.team() == team => Some((square, piece)),
            _ => None,
        })
    }

    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.pieces(team)
            .find(|(_, piece)| piece.is(PieceType::King))
            .map(|(square, _)| square)
    }

    pub fn completed_moves(&self) -> &[ChessMove] {
        &self.completed_moves
    }

    pub fn undone_moves(&self) -> &[ChessMove] {
        &self.undone_moves
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.completed_moves.last()
    }

    /// Applies a move obtained from `create_move` or `generate_legal_moves` and
    /// records it. A fresh move invalidates the redo history.
    pub fn make_move(&mut self, chess_move: ChessMove) {
        trace!("make move: {}", chess_move);
        chess_move.apply(self);
        self.completed_moves.push(chess_move);
        self.undone_moves.clear();
    }

    pub fn undo_move(&mut self) -> bool {
        match self.completed_moves.pop() {
            Some(chess_move) => {
                trace!("undo move: {}", chess_move);
                chess_move.undo(self);
                self.undone_moves.push(chess_move);
                true
            }
            None => false,
        }
    }

    pub fn redo_move(&mut self) -> bool {
        match self.undone_moves.pop() {
            Some(chess_move) => {
                trace!("redo move: {}", chess_move);
                chess_move.apply(self);
                self.completed_moves.push(chess_move);
                true
            }
            None => false,
        }
    }

    /// Applies `chess_move`, runs `f` on the resulting position, then undoes the
    /// move. The move sits on the completed stack while `f` runs (so en passant
    /// sees it) and the redo stack is left untouched.
    pub fn with_move_applied<T, F>(&mut self, chess_move: &ChessMove, f: F) -> T
    where
        F: FnOnce(&mut Board) -> T,
    {
        chess_move.apply(self);
        self.completed_moves.push(chess_move.clone());
        let result = f(self);
        self.completed_moves.pop();
        chess_move.undo(self);
        result
    }
}
