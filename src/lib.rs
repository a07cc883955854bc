//! A library for chess positions and pseudo-legal move generation.
//!
//! Moves are generated by the movement rules of each figure and the
//! occupancy of the board. Whether a move leaves the own king in check is not
//! considered: a legality filter can be layered on top by generating the
//! opponent's moves from the resulting position.
//!
//! # Examples
//!
//! Generate pseudo-legal moves in the starting position:
//!
//! ```
//! use chess_rules::Position;
//!
//! let pos = Position::default();
//! let moves = pos.moves();
//! assert_eq!(moves.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use chess_rules::{Field, Move, Position};
//!
//! let pos = Position::default();
//!
//! // 1. e4
//! let pos = pos.play(&Move::Movement {
//!     source: Field::E2,
//!     target: Field::E4,
//! });
//! assert_eq!(pos.moves_from(Field::E7).len(), 2);
//! ```
//!
//! Also supports [FEN](fen) for positions and short algebraic
//! [notation](notation) for moves:
//!
//! ```
//! use chess_rules::{fen::Fen, notation, Position};
//!
//! let pos: Position = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse::<Fen>()?.into_position();
//! let m = notation::parse("0-0", &pos)?;
//! let pos = pos.play(&m);
//! assert_eq!(Fen::from_position(pos).to_string(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
//! # Ok::<_, chess_rules::Error>(())
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   [`Field`] and [`fen::Fen`], using their text representations.
//!
//! # Logging
//!
//! Events are emitted with [`tracing`](https://docs.rs/tracing/0.1): a `debug`
//! event when a FEN or a move cannot be parsed, a `trace` event for every
//! applied move. No subscriber is installed by this crate.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod castling;
mod field;
mod figure;
mod kind;
mod m;
mod movegen;
mod perft;
mod position;
mod side;

pub mod attacks;
pub mod board;
pub mod errors;
pub mod fen;
pub mod notation;

pub use board::Board;
pub use castling::{CastlingSide, Castlings};
pub use errors::Error;
pub use field::Field;
pub use figure::Figure;
pub use kind::Kind;
pub use m::{Move, MoveList, MoveSet};
pub use perft::perft;
pub use position::Position;
pub use side::{ParseSideError, Side};
