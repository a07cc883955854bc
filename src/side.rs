use std::{error::Error, fmt, ops, str::FromStr};

use crate::{figure::Figure, kind::Kind};

/// `White` or `Black`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Gets the side from its FEN letter, `w` or `b`.
    pub const fn from_char(ch: char) -> Option<Side> {
        match ch {
            'w' => Some(Side::White),
            'b' => Some(Side::Black),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_white(white: bool) -> Side {
        if white {
            Side::White
        } else {
            Side::Black
        }
    }

    #[inline]
    pub fn fold<T>(self, white: T, black: T) -> T {
        match self {
            Side::White => white,
            Side::Black => black,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Side::White)
    }

    #[inline]
    pub const fn is_black(self) -> bool {
        matches!(self, Side::Black)
    }

    /// The other side.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Side;
    ///
    /// assert_eq!(Side::White.opposite(), Side::Black);
    /// assert_eq!(!Side::Black, Side::White);
    /// ```
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }

    /// Rank delta of a single pawn step. White pawns walk towards rank 0,
    /// the top row of the board text.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Rank the king and rooks start on.
    #[inline]
    pub const fn backrank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Rank pawns start on and may advance two squares from.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Rank of the en passant target when this side is to move: the field
    /// an opposing double advance skipped.
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Side::White => 2,
            Side::Black => 5,
        }
    }

    /// Rank on which pawns are transformed.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn(self) -> Figure {
        Kind::Pawn.of(self)
    }
    #[inline]
    pub const fn knight(self) -> Figure {
        Kind::Knight.of(self)
    }
    #[inline]
    pub const fn bishop(self) -> Figure {
        Kind::Bishop.of(self)
    }
    #[inline]
    pub const fn rook(self) -> Figure {
        Kind::Rook.of(self)
    }
    #[inline]
    pub const fn queen(self) -> Figure {
        Kind::Queen.of(self)
    }
    #[inline]
    pub const fn king(self) -> Figure {
        Kind::King.of(self)
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opposite()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("white", "black"))
    }
}

/// Error when parsing an invalid side name.
#[derive(Clone, Debug)]
pub struct ParseSideError;

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid side")
    }
}

impl Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Side, ParseSideError> {
        Ok(match s {
            "white" => Side::White,
            "black" => Side::Black,
            _ => return Err(ParseSideError),
        })
    }
}
