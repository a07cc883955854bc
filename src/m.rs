use std::{collections::HashSet, fmt};

use arrayvec::ArrayVec;

use crate::{castling::CastlingSide, field::Field, figure::Figure};

/// Information about a move.
///
/// Moves compare and hash structurally: same variant, same fields.
///
/// # Display
///
/// `Move` implements [`Display`](fmt::Display) using long algebraic notation,
/// e.g. `e2-e4`, `e4xd5` or `e7-e8=Q`. If a position is available for
/// context, the short [notation](crate::notation) is more common.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// A figure moves to an empty field.
    Movement { source: Field, target: Field },
    /// A figure captures the opposing figure on the target field.
    Take { source: Field, target: Field },
    /// A pawn captures en passant. The target is the en passant field.
    EnPassantTake { source: Field, target: Field },
    /// The king moves two files towards a rook, which jumps over it.
    Castling { source: Field, target: Field },
    /// A pawn advances to the last rank and is replaced by `figure`.
    TransformationMovement {
        source: Field,
        target: Field,
        figure: Figure,
    },
    /// A pawn captures onto the last rank and is replaced by `figure`.
    TransformationTake {
        source: Field,
        target: Field,
        figure: Figure,
    },
}

impl Move {
    /// Gets the origin field.
    pub const fn source(self) -> Field {
        match self {
            Move::Movement { source, .. }
            | Move::Take { source, .. }
            | Move::EnPassantTake { source, .. }
            | Move::Castling { source, .. }
            | Move::TransformationMovement { source, .. }
            | Move::TransformationTake { source, .. } => source,
        }
    }

    /// Gets the destination field. For castling moves this is the field the
    /// king lands on.
    pub const fn target(self) -> Field {
        match self {
            Move::Movement { target, .. }
            | Move::Take { target, .. }
            | Move::EnPassantTake { target, .. }
            | Move::Castling { target, .. }
            | Move::TransformationMovement { target, .. }
            | Move::TransformationTake { target, .. } => target,
        }
    }

    /// Gets the figure a pawn is transformed into.
    pub const fn figure(self) -> Option<Figure> {
        match self {
            Move::TransformationMovement { figure, .. } | Move::TransformationTake { figure, .. } => {
                Some(figure)
            }
            _ => None,
        }
    }

    /// Checks if the move is a capture.
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            Move::Take { .. } | Move::EnPassantTake { .. } | Move::TransformationTake { .. }
        )
    }

    /// Checks if the move is en passant.
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassantTake { .. })
    }

    /// Checks if the move is a castling move.
    pub const fn is_castling(self) -> bool {
        matches!(self, Move::Castling { .. })
    }

    /// Checks if the move is a promotion.
    pub const fn is_transformation(self) -> bool {
        matches!(
            self,
            Move::TransformationMovement { .. } | Move::TransformationTake { .. }
        )
    }

    /// Gets the castling side, decided by the direction the king moves in.
    pub fn castling_side(self) -> Option<CastlingSide> {
        match self {
            Move::Castling { source, target } => {
                Some(CastlingSide::from_king_side(source.file() < target.file()))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Movement { source, target } => write!(f, "{source}-{target}"),
            Move::Take { source, target } | Move::EnPassantTake { source, target } => {
                write!(f, "{source}x{target}")
            }
            Move::Castling { source, target } => {
                f.write_str(if source.file() < target.file() { "0-0" } else { "0-0-0" })
            }
            Move::TransformationMovement {
                source,
                target,
                figure,
            } => write!(f, "{source}-{target}={}", figure.kind.upper_char()),
            Move::TransformationTake {
                source,
                target,
                figure,
            } => write!(f, "{source}x{target}={}", figure.kind.upper_char()),
        }
    }
}

/// Pseudo-legal moves of a whole position. Duplicates collapse.
pub type MoveSet = HashSet<Move>;

/// A container for moves that can be stored inline on the stack.
///
/// There is enough space for the pseudo-legal moves of any single field:
/// a queen in the center reaches 27 fields, a pawn on the seventh rank
/// yields at most 12 transformations.
pub type MoveList = ArrayVec<Move, 32>;
