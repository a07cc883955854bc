use std::{fmt, str::FromStr};

use crate::errors::Error;

/// A square of the board, addressed by rank and file.
///
/// Rank 0 is the first row of the board text, i.e. rank `8` in algebraic
/// coordinates, and file 0 is file `a`. Both are always in `0..=7`.
///
/// # Examples
///
/// ```
/// use chess_rules::Field;
///
/// let field = Field::new(6, 4)?;
/// assert_eq!(field, Field::E2);
/// assert_eq!(field.to_string(), "e2");
/// assert_eq!("e2".parse::<Field>()?, field);
/// # Ok::<_, chess_rules::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Field {
    rank: u8,
    file: u8,
}

impl Field {
    /// Creates a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeField`] if `rank` or `file` is not in
    /// `0..=7`.
    pub const fn new(rank: u8, file: u8) -> Result<Field, Error> {
        if rank < 8 && file < 8 {
            Ok(Field { rank, file })
        } else {
            Err(Error::OutOfRangeField)
        }
    }

    /// Both coordinates must be in `0..=7`.
    #[inline]
    pub(crate) const fn new_unchecked(rank: u8, file: u8) -> Field {
        debug_assert!(rank < 8 && file < 8);
        Field { rank, file }
    }

    /// Parses algebraic coordinates such as `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] unless `s` is a file letter `a`-`h`
    /// followed by a rank digit `1`-`8`.
    pub fn from_ascii(s: &[u8]) -> Result<Field, Error> {
        match *s {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Field::new_unchecked(b'8' - rank, file - b'a'))
            }
            _ => Err(Error::MalformedInput),
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Moves by the given rank and file deltas, or `None` if that leaves
    /// the board.
    pub fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Field> {
        let rank = self.rank.checked_add_signed(rank_delta)?;
        let file = self.file.checked_add_signed(file_delta)?;
        Field::new(rank, file).ok()
    }

    pub const fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub const fn rank_char(self) -> char {
        (b'8' - self.rank) as char
    }

    /// All 64 fields, row by row from the top of the board text.
    pub fn all() -> impl Iterator<Item = Field> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Field::new_unchecked(rank, file)))
    }
}

macro_rules! field_consts {
    ($($name:ident = ($rank:expr, $file:expr),)+) => {
        impl Field {
            $(
                pub const $name: Field = Field::new_unchecked($rank, $file);
            )+
        }
    }
}

field_consts! {
    A8 = (0, 0), B8 = (0, 1), C8 = (0, 2), D8 = (0, 3), E8 = (0, 4), F8 = (0, 5), G8 = (0, 6), H8 = (0, 7),
    A7 = (1, 0), B7 = (1, 1), C7 = (1, 2), D7 = (1, 3), E7 = (1, 4), F7 = (1, 5), G7 = (1, 6), H7 = (1, 7),
    A6 = (2, 0), B6 = (2, 1), C6 = (2, 2), D6 = (2, 3), E6 = (2, 4), F6 = (2, 5), G6 = (2, 6), H6 = (2, 7),
    A5 = (3, 0), B5 = (3, 1), C5 = (3, 2), D5 = (3, 3), E5 = (3, 4), F5 = (3, 5), G5 = (3, 6), H5 = (3, 7),
    A4 = (4, 0), B4 = (4, 1), C4 = (4, 2), D4 = (4, 3), E4 = (4, 4), F4 = (4, 5), G4 = (4, 6), H4 = (4, 7),
    A3 = (5, 0), B3 = (5, 1), C3 = (5, 2), D3 = (5, 3), E3 = (5, 4), F3 = (5, 5), G3 = (5, 6), H3 = (5, 7),
    A2 = (6, 0), B2 = (6, 1), C2 = (6, 2), D2 = (6, 3), E2 = (6, 4), F2 = (6, 5), G2 = (6, 6), H2 = (6, 7),
    A1 = (7, 0), B1 = (7, 1), C1 = (7, 2), D1 = (7, 3), E1 = (7, 4), F1 = (7, 5), G1 = (7, 6), H1 = (7, 7),
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Field, Error> {
        Field::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.file_char().to_ascii_uppercase(),
            self.rank_char()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FieldVisitor;

        impl serde::de::Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("field name")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(FieldVisitor)
    }
}
