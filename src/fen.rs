//! Parse and write Forsyth-Edwards-Notation.
//!
//! # Examples
//!
//! Parse and write FENs:
//!
//! ```
//! use chess_rules::{fen::Fen, Field, Side};
//!
//! let fen: Fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1".parse()?;
//! let pos = fen.into_position();
//! assert_eq!(pos.side_to_move(), Side::Black);
//! assert_eq!(pos.en_passant(), Some(Field::E3));
//!
//! let fen = Fen::from_position(pos);
//! assert_eq!(
//!     fen.to_string(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! # Ok::<_, chess_rules::Error>(())
//! ```
//!
//! Or use the shortcuts:
//!
//! ```
//! use chess_rules::{fen, Position};
//!
//! let pos = fen::decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
//! assert_eq!(pos, Position::default());
//! assert_eq!(fen::encode(&pos), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
//! # Ok::<_, chess_rules::Error>(())
//! ```

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    board::Board, castling::Castlings, errors::Error, field::Field, position::Position, side::Side,
};

fn invalid(part: &'static str, err: Error) -> Error {
    debug!(part, %err, "invalid fen");
    err
}

/// A FEN like `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1`.
///
/// The six space separated fields are the board, the side to move, the
/// castling rights, the en passant target and the two move counters.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Fen(pub Position);

impl Fen {
    pub const fn from_position(pos: Position) -> Fen {
        Fen(pos)
    }

    pub fn as_position(&self) -> &Position {
        &self.0
    }

    pub fn into_position(self) -> Position {
        self.0
    }

    /// Parses a FEN. Runs of whitespace separate fields.
    ///
    /// # Errors
    ///
    /// * [`Error::MalformedInput`] if there are not exactly 6 fields, or the
    ///   side to move, the en passant target or a counter is invalid. The en
    ///   passant target must be on the 6th rank with White to move and on the
    ///   3rd rank with Black to move.
    /// * [`Error::InvalidBoardShape`] if the board does not have 8 rows of 8
    ///   files.
    pub fn from_ascii(fen: &[u8]) -> Result<Fen, Error> {
        let parts: Vec<&[u8]> = fen
            .split(u8::is_ascii_whitespace)
            .filter(|part| !part.is_empty())
            .collect();

        let [board_part, side_part, castling_part, ep_part, halfmoves_part, fullmoves_part] =
            parts[..]
        else {
            return Err(invalid("fields", Error::MalformedInput));
        };

        let board = Board::from_board_fen(board_part).map_err(|err| invalid("board", err))?;

        let side_to_move = match side_part {
            [ch] => Side::from_char(char::from(*ch)),
            _ => None,
        }
        .ok_or_else(|| invalid("side", Error::MalformedInput))?;

        let castlings = castling_part
            .iter()
            .filter_map(|&ch| Castlings::from_char(char::from(ch)))
            .fold(Castlings::empty(), |castlings, flag| castlings | flag);

        let en_passant = match ep_part {
            b"-" => None,
            ep => {
                let field = Field::from_ascii(ep).map_err(|err| invalid("en passant", err))?;
                if field.rank() != side_to_move.en_passant_rank() {
                    return Err(invalid("en passant", Error::MalformedInput));
                }
                Some(field)
            }
        };

        let halfmoves =
            btoi::btou(halfmoves_part).map_err(|_| invalid("halfmoves", Error::MalformedInput))?;
        let fullmoves =
            btoi::btou(fullmoves_part).map_err(|_| invalid("fullmoves", Error::MalformedInput))?;

        Ok(Fen(Position::new(
            board,
            side_to_move,
            castlings,
            en_passant,
            halfmoves,
            fullmoves,
        )))
    }

    pub fn append_to_string(&self, s: &mut String) {
        let pos = &self.0;
        s.push_str(&pos.board().board_fen());
        s.push(' ');
        s.push(pos.side_to_move().char());
        s.push(' ');
        pos.castlings().append_to(s);
        s.push(' ');
        match pos.en_passant() {
            Some(field) => {
                s.push(field.file_char());
                s.push(field.rank_char());
            }
            None => s.push('-'),
        }
        s.push(' ');
        s.push_str(&pos.halfmoves().to_string());
        s.push(' ');
        s.push_str(&pos.fullmoves().to_string());
    }
}

impl From<Position> for Fen {
    fn from(pos: Position) -> Fen {
        Fen(pos)
    }
}

impl FromStr for Fen {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Fen, Error> {
        Fen::from_ascii(fen.as_bytes())
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(90);
        self.append_to_string(&mut s);
        f.write_str(&s)
    }
}

/// Parses a FEN into a [`Position`].
///
/// # Errors
///
/// See [`Fen::from_ascii()`].
pub fn decode(fen: &str) -> Result<Position, Error> {
    fen.parse().map(Fen::into_position)
}

/// Writes the FEN of a [`Position`].
pub fn encode(pos: &Position) -> String {
    let mut s = String::with_capacity(90);
    Fen(pos.clone()).append_to_string(&mut s);
    s
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fen {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fen {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FenVisitor;

        impl serde::de::Visitor<'_> for FenVisitor {
            type Value = Fen;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("fen string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(FenVisitor)
    }
}
