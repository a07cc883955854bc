//! Offset and ray tables.
//!
//! Deltas are `(rank, file)` pairs. Rank deltas are relative to the board
//! text, so `-1` walks towards rank 8.
//!
//! # Examples
//!
//! ```
//! use chess_rules::{attacks, Field};
//!
//! let ray: Vec<Field> = attacks::ray(Field::C1, (-1, 1)).collect();
//! assert_eq!(ray, [Field::D2, Field::E3, Field::F4, Field::G5, Field::H6]);
//!
//! assert_eq!(attacks::knight_targets(Field::A1).count(), 2);
//! ```

use std::iter;

use crate::field::Field;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DELTAS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DELTAS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Fields reached by repeatedly stepping `delta` from `from`, excluding
/// `from`, until the board edge. Callers stop at the first occupied field.
pub fn ray(from: Field, (rank_delta, file_delta): (i8, i8)) -> impl Iterator<Item = Field> {
    iter::successors(from.offset(rank_delta, file_delta), move |previous| {
        previous.offset(rank_delta, file_delta)
    })
}

fn leaper_targets(from: Field, deltas: &'static [(i8, i8)]) -> impl Iterator<Item = Field> {
    deltas
        .iter()
        .filter_map(move |&(rank_delta, file_delta)| from.offset(rank_delta, file_delta))
}

/// On-board fields a knight on `from` jumps to.
pub fn knight_targets(from: Field) -> impl Iterator<Item = Field> {
    leaper_targets(from, &KNIGHT_DELTAS)
}

/// On-board fields adjacent to `from`.
pub fn king_targets(from: Field) -> impl Iterator<Item = Field> {
    leaper_targets(from, &KING_DELTAS)
}
