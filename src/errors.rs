use std::{error, fmt};

/// Error when text or coordinates do not describe a valid position, field or
/// move.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Structurally invalid text: wrong field count, unexpected character,
    /// bad length.
    MalformedInput,
    /// Rank or file outside of `0..=7`.
    OutOfRangeField,
    /// Board with a row count or row width other than 8.
    InvalidBoardShape,
    /// Move notation that matches no move or more than one move.
    AmbiguousOrUnresolvedMove,
}

impl Error {
    fn desc(self) -> &'static str {
        match self {
            Error::MalformedInput => "malformed input",
            Error::OutOfRangeField => "field out of range",
            Error::InvalidBoardShape => "invalid board shape",
            Error::AmbiguousOrUnresolvedMove => "ambiguous or unresolved move",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc())
    }
}

impl error::Error for Error {}
