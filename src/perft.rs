//! Count pseudo-legal move paths.
//!
//! # Examples
//!
//! ```
//! use chess_rules::{perft, Position};
//!
//! let pos = Position::default();
//! assert_eq!(perft(&pos, 1), 20);
//! assert_eq!(perft(&pos, 2), 400);
//! ```

use crate::position::Position;

/// Counts pseudo-legal move paths of a given length.
///
/// Moves that leave the own king in check are followed like any other
/// move, so beyond shallow depths the counts exceed the well-known legal
/// move counts. Useful for comparing, testing and debugging move
/// generation correctness and performance.
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .map(|m| {
                    let child = pos.clone().play(m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}
