use crate::{figure::Figure, side::Side};

/// Figure kinds: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Kind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Kind {
    /// Gets the figure kind from its English letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::Kind;
    ///
    /// assert_eq!(Kind::from_char('K'), Some(Kind::King));
    /// assert_eq!(Kind::from_char('n'), Some(Kind::Knight));
    ///
    /// assert_eq!(Kind::from_char('X'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Kind> {
        match ch {
            'P' | 'p' => Some(Kind::Pawn),
            'N' | 'n' => Some(Kind::Knight),
            'B' | 'b' => Some(Kind::Bishop),
            'R' | 'r' => Some(Kind::Rook),
            'Q' | 'q' => Some(Kind::Queen),
            'K' | 'k' => Some(Kind::King),
            _ => None,
        }
    }

    /// Gets the kind a pawn may be transformed into from its uppercase
    /// letter, `N`, `B`, `R` or `Q`.
    pub const fn from_promotion_char(ch: char) -> Option<Kind> {
        match ch {
            'N' => Some(Kind::Knight),
            'B' => Some(Kind::Bishop),
            'R' => Some(Kind::Rook),
            'Q' => Some(Kind::Queen),
            _ => None,
        }
    }

    /// Gets a [`Figure`] of the given side.
    ///
    /// # Examples
    ///
    /// ```
    /// use chess_rules::{Kind, Side};
    ///
    /// assert_eq!(Kind::King.of(Side::Black), Side::Black.king());
    /// ```
    #[inline]
    pub const fn of(self, side: Side) -> Figure {
        Figure { kind: self, side }
    }

    pub const fn char(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Rook => 'r',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }

    pub const fn upper_char(self) -> char {
        match self {
            Kind::Pawn => 'P',
            Kind::Knight => 'N',
            Kind::Bishop => 'B',
            Kind::Rook => 'R',
            Kind::Queen => 'Q',
            Kind::King => 'K',
        }
    }

    /// `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, and `King`, in this order.
    pub const ALL: [Kind; 6] = [
        Kind::Pawn,
        Kind::Knight,
        Kind::Bishop,
        Kind::Rook,
        Kind::Queen,
        Kind::King,
    ];

    /// Kinds a pawn can be transformed into, weakest first.
    pub const PROMOTIONS: [Kind; 4] = [Kind::Knight, Kind::Bishop, Kind::Rook, Kind::Queen];
}
