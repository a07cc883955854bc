use std::ops;

use bitflags::bitflags;

use crate::{field::Field, side::Side};

/// `KingSide` (0-0) or `QueenSide` (0-0-0).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    #[inline]
    pub const fn from_king_side(king_side: bool) -> CastlingSide {
        if king_side {
            CastlingSide::KingSide
        } else {
            CastlingSide::QueenSide
        }
    }

    /// File the king lands on.
    pub const fn king_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 6,
            CastlingSide::QueenSide => 2,
        }
    }

    /// File of the corner the partner rook starts on.
    pub const fn rook_from_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /// File the partner rook lands on, next to the king.
    pub const fn rook_to_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 5,
            CastlingSide::QueenSide => 3,
        }
    }

    /// Canonical king square of `side`, on the e-file of its back rank.
    pub const fn king_from(side: Side) -> Field {
        Field::new_unchecked(side.backrank(), 4)
    }

    pub const fn king_to(self, side: Side) -> Field {
        Field::new_unchecked(side.backrank(), self.king_to_file())
    }

    pub const fn rook_from(self, side: Side) -> Field {
        Field::new_unchecked(side.backrank(), self.rook_from_file())
    }

    pub const fn rook_to(self, side: Side) -> Field {
        Field::new_unchecked(side.backrank(), self.rook_to_file())
    }

    /// Squares strictly between the king and the partner rook.
    pub fn path(self, side: Side) -> impl Iterator<Item = Field> {
        let files = match self {
            CastlingSide::KingSide => 5..7,
            CastlingSide::QueenSide => 1..4,
        };
        files.map(move |file| Field::new_unchecked(side.backrank(), file))
    }

    #[must_use]
    #[inline]
    pub const fn other(self) -> CastlingSide {
        match self {
            CastlingSide::KingSide => CastlingSide::QueenSide,
            CastlingSide::QueenSide => CastlingSide::KingSide,
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

impl ops::Not for CastlingSide {
    type Output = CastlingSide;

    #[inline]
    fn not(self) -> CastlingSide {
        self.other()
    }
}

bitflags! {
    /// Castling rights. The four flags are independent state and are not
    /// derived from the board.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Castlings: u8 {
        const WHITE_KINGSIDE = 1;
        const WHITE_QUEENSIDE = 2;
        const BLACK_KINGSIDE = 4;
        const BLACK_QUEENSIDE = 8;
    }
}

impl Default for Castlings {
    fn default() -> Castlings {
        Castlings::all()
    }
}

impl Castlings {
    /// The flag for one side and wing.
    pub const fn flag(side: Side, castling_side: CastlingSide) -> Castlings {
        match (side, castling_side) {
            (Side::White, CastlingSide::KingSide) => Castlings::WHITE_KINGSIDE,
            (Side::White, CastlingSide::QueenSide) => Castlings::WHITE_QUEENSIDE,
            (Side::Black, CastlingSide::KingSide) => Castlings::BLACK_KINGSIDE,
            (Side::Black, CastlingSide::QueenSide) => Castlings::BLACK_QUEENSIDE,
        }
    }

    /// Both flags of one side.
    pub const fn of(side: Side) -> Castlings {
        match side {
            Side::White => Castlings::WHITE_KINGSIDE.union(Castlings::WHITE_QUEENSIDE),
            Side::Black => Castlings::BLACK_KINGSIDE.union(Castlings::BLACK_QUEENSIDE),
        }
    }

    pub fn has(self, side: Side, castling_side: CastlingSide) -> bool {
        self.contains(Castlings::flag(side, castling_side))
    }

    pub fn discard_side(&mut self, side: Side) {
        self.remove(Castlings::of(side));
    }

    /// Discards the flag of `side` whose rook starts on `field`, if any.
    pub fn discard_rook(&mut self, side: Side, field: Field) {
        for castling_side in CastlingSide::ALL {
            if castling_side.rook_from(side) == field {
                self.remove(Castlings::flag(side, castling_side));
            }
        }
    }

    /// Gets the flag from its FEN letter, one of `K`, `Q`, `k` or `q`.
    pub const fn from_char(ch: char) -> Option<Castlings> {
        match ch {
            'K' => Some(Castlings::WHITE_KINGSIDE),
            'Q' => Some(Castlings::WHITE_QUEENSIDE),
            'k' => Some(Castlings::BLACK_KINGSIDE),
            'q' => Some(Castlings::BLACK_QUEENSIDE),
            _ => None,
        }
    }

    /// Appends the FEN letters of the set flags in `KQkq` order, or `-` if
    /// there are none.
    pub fn append_to(self, s: &mut String) {
        if self.is_empty() {
            s.push('-');
        }
        for (flag, ch) in [
            (Castlings::WHITE_KINGSIDE, 'K'),
            (Castlings::WHITE_QUEENSIDE, 'Q'),
            (Castlings::BLACK_KINGSIDE, 'k'),
            (Castlings::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.contains(flag) {
                s.push(ch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares() {
        assert_eq!(CastlingSide::king_from(Side::White), Field::E1);
        assert_eq!(CastlingSide::king_from(Side::Black), Field::E8);
        assert_eq!(CastlingSide::KingSide.king_to(Side::White), Field::G1);
        assert_eq!(CastlingSide::QueenSide.king_to(Side::Black), Field::C8);
        assert_eq!(CastlingSide::KingSide.rook_to(Side::White), Field::F1);
        assert_eq!(CastlingSide::QueenSide.rook_from(Side::Black), Field::A8);
        assert_eq!(
            CastlingSide::QueenSide.path(Side::White).collect::<Vec<_>>(),
            [Field::B1, Field::C1, Field::D1]
        );
        assert_eq!(
            CastlingSide::KingSide.path(Side::Black).collect::<Vec<_>>(),
            [Field::F8, Field::G8]
        );
    }

    #[test]
    fn test_discard() {
        let mut castlings = Castlings::default();
        castlings.discard_rook(Side::Black, Field::H8);
        assert!(!castlings.has(Side::Black, CastlingSide::KingSide));
        assert!(castlings.has(Side::Black, CastlingSide::QueenSide));
        castlings.discard_rook(Side::White, Field::A8);
        castlings.discard_rook(Side::White, Field::E4);
        assert_eq!(castlings.bits().count_ones(), 3);
        castlings.discard_side(Side::White);
        assert_eq!(castlings, Castlings::BLACK_QUEENSIDE);
    }

    #[test]
    fn test_fen_letters() {
        let mut s = String::new();
        Castlings::default().append_to(&mut s);
        assert_eq!(s, "KQkq");

        let mut s = String::new();
        Castlings::empty().append_to(&mut s);
        assert_eq!(s, "-");

        let mut s = String::new();
        (Castlings::BLACK_QUEENSIDE | Castlings::WHITE_KINGSIDE).append_to(&mut s);
        assert_eq!(s, "Kq");
    }
}
