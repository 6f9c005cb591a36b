//! (row, col) step vectors for each movement pattern.

pub type Offset = (i32, i32);

pub const ORTHOGONAL: [Offset; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL: [Offset; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ALL_DIRECTIONS: [Offset; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
