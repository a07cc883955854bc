use std::fmt;

use crate::{kind::Kind, side::Side};

/// A figure with [`Kind`] and [`Side`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Figure {
    pub kind: Kind,
    pub side: Side,
}

impl Figure {
    /// Gets the FEN letter: uppercase for White, lowercase for Black.
    pub const fn char(self) -> char {
        match self.side {
            Side::White => self.kind.upper_char(),
            Side::Black => self.kind.char(),
        }
    }

    /// Parses a FEN letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Figure, Side};
    ///
    /// assert_eq!(Figure::from_char('Q'), Some(Side::White.queen()));
    /// assert_eq!(Figure::from_char('p'), Some(Side::Black.pawn()));
    /// assert_eq!(Figure::from_char('1'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Figure> {
        Kind::from_char(ch).map(|kind| kind.of(Side::from_white(ch.is_ascii_uppercase())))
    }

    #[inline]
    pub fn is(self, kind: Kind, side: Side) -> bool {
        self.kind == kind && self.side == side
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}
