use std::fmt;

use super::{direction::Direction, team::Team};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

pub const ALL_PIECE_TYPES: [PieceType; 6] = [
    PieceType::King,
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Pawn,
];

/// The piece types a pawn may promote to, in the order promotion moves are
/// generated.
pub const PROMOTION_TYPES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
];

impl PieceType {
    pub fn material_value(&self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 100,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
        }
    }

    /// Team one glyphs are uppercase, team two glyphs are lowercase.
    pub fn to_glyph(&self, team: Team) -> char {
        let glyph = match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        };
        match team {
            Team::One => glyph.to_ascii_uppercase(),
            Team::Two => glyph,
        }
    }

    pub fn from_glyph(c: char) -> Option<(PieceType, Team)> {
        let team = if c.is_ascii_uppercase() {
            Team::One
        } else {
            Team::Two
        };
        let piece_type = match c.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            _ => return None,
        };
        Some((piece_type, team))
    }

    pub fn to_unicode_piece_char(&self, team: Team) -> char {
        match (self, team) {
            (PieceType::King, Team::One) => '♔',
            (PieceType::Queen, Team::One) => '♕',
            (PieceType::Rook, Team::One) => '♖',
            (PieceType::Bishop, Team::One) => '♗',
            (PieceType::Knight, Team::One) => '♘',
            (PieceType::Pawn, Team::One) => '♙',
            (PieceType::King, Team::Two) => '♚',
            (PieceType::Queen, Team::Two) => '♛',
            (PieceType::Rook, Team::Two) => '♜',
            (PieceType::Bishop, Team::Two) => '♝',
            (PieceType::Knight, Team::Two) => '♞',
            (PieceType::Pawn, Team::Two) => '♟',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything the board knows about one piece. Records are values: a move never
/// edits a record in place, it stores a new one (moved, or promoted) and keeps the
/// old one so the move can be undone exactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PieceRecord {
    piece_type: PieceType,
    team: Team,
    direction: Direction,
    has_moved: bool,
}

impl PieceRecord {
    pub fn new(piece_type: PieceType, team: Team, direction: Direction) -> Self {
        Self {
            piece_type,
            team,
            direction,
            has_moved: false,
        }
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn value(&self) -> i32 {
        self.piece_type.material_value()
    }

    pub fn glyph(&self) -> char {
        self.piece_type.to_glyph(self.team)
    }

    pub fn unicode_glyph(&self) -> char {
        self.piece_type.to_unicode_piece_char(self.team)
    }

    pub fn is(&self, piece_type: PieceType) -> bool {
        self.piece_type == piece_type
    }

    /// The record this piece has after making any move.
    pub fn moved(self) -> Self {
        Self {
            has_moved: true,
            ..self
        }
    }

    pub fn unmoved(self) -> Self {
        Self {
            has_moved: false,
            ..self
        }
    }

    pub fn promoted(self, piece_type: PieceType) -> Self {
        Self { piece_type, ..self }
    }
}

impl fmt::Display for PieceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[macro_export]
macro_rules! piece {
    ($piece_type:ident, $team:ident, $direction:ident) => {
        $crate::board::piece::PieceRecord::new(
            $crate::board::piece::PieceType::$piece_type,
            $crate::board::team::Team::$team,
            $crate::board::direction::Direction::$direction,
        )
    };
}
