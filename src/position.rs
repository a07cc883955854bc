use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::{
    board::Board,
    castling::{CastlingSide, Castlings},
    errors::Error,
    field::Field,
    figure::Figure,
    kind::Kind,
    m::{Move, MoveList, MoveSet},
    movegen,
    side::Side,
};

/// A game state: board, side to move, castling rights, en passant target
/// and move counters.
///
/// Two positions are equal if board, side to move, castling rights and
/// en passant target are equal. The counters do not take part in
/// comparisons or hashing.
///
/// # Examples
///
/// ```
/// use chess_rules::{Field, Move, Position};
///
/// let pos = Position::default();
/// assert_eq!(pos.moves().len(), 20);
///
/// let pos = pos.play(&Move::Movement {
///     source: Field::E2,
///     target: Field::E4,
/// });
/// assert_eq!(pos.en_passant(), Some(Field::E3));
/// assert_eq!(pos.moves().len(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    side_to_move: Side,
    castlings: Castlings,
    en_passant: Option<Field>,
    halfmoves: u32,
    fullmoves: u32,
}

impl Position {
    /// Assembles a position. Nothing is validated: kings may be missing,
    /// castling rights may disagree with the board.
    pub const fn new(
        board: Board,
        side_to_move: Side,
        castlings: Castlings,
        en_passant: Option<Field>,
        halfmoves: u32,
        fullmoves: u32,
    ) -> Position {
        Position {
            board,
            side_to_move,
            castlings,
            en_passant,
            halfmoves,
            fullmoves,
        }
    }

    /// Builds a position from rows of cells, the first row being rank 8,
    /// with all castling rights, no en passant target and fresh counters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardShape`] unless `rows` is 8×8.
    pub fn from_grid(rows: Vec<Vec<Option<Figure>>>, side_to_move: Side) -> Result<Position, Error> {
        Ok(Position::new(
            Board::from_grid(rows)?,
            side_to_move,
            Castlings::all(),
            None,
            0,
            1,
        ))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn figure_at(&self, field: Field) -> Option<Figure> {
        self.board.figure_at(field)
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn castlings(&self) -> Castlings {
        self.castlings
    }

    /// The field a pawn skipped with its last double advance.
    #[inline]
    pub fn en_passant(&self) -> Option<Field> {
        self.en_passant
    }

    /// Half-moves since the last capture or pawn move.
    #[inline]
    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    /// Starts at 1 and is incremented after every move of Black.
    #[inline]
    pub fn fullmoves(&self) -> u32 {
        self.fullmoves
    }

    /// All pseudo-legal moves of the side to move. Moves that leave the
    /// own king in check are included.
    pub fn moves(&self) -> MoveSet {
        let mut set = MoveSet::new();
        let mut moves = MoveList::new();
        for (field, figure) in self.board.figures() {
            if figure.side == self.side_to_move {
                moves.clear();
                movegen::gen_from(self, field, &mut moves);
                set.extend(moves.drain(..));
            }
        }
        set
    }

    /// Pseudo-legal moves of the figure on `field`. Empty if the field is
    /// empty or holds a figure of the side not to move.
    pub fn moves_from(&self, field: Field) -> MoveSet {
        let mut moves = MoveList::new();
        movegen::gen_from(self, field, &mut moves);
        moves.into_iter().collect()
    }

    /// Pseudo-legal moves of figures of `kind` landing on `target`, except
    /// castling. Used to resolve short notation.
    pub fn san_candidates(&self, kind: Kind, target: Field) -> MoveList {
        let mut candidates = MoveList::new();
        let mut moves = MoveList::new();
        for (field, figure) in self.board.figures() {
            if figure.is(kind, self.side_to_move) {
                moves.clear();
                movegen::gen_from(self, field, &mut moves);
                candidates.extend(
                    moves
                        .drain(..)
                        .filter(|m| m.target() == target && !m.is_castling()),
                );
            }
        }
        candidates
    }

    /// Plays a move, consuming the position. Never fails: the move is
    /// applied without checking that it is pseudo-legal.
    #[must_use]
    pub fn play(mut self, m: &Move) -> Position {
        self.apply(m);
        self
    }

    /// Plays a move in place. See [`Position::play()`].
    pub fn apply(&mut self, m: &Move) {
        let side = self.side_to_move;
        trace!(%m, %side, "apply move");

        let source = m.source();
        let target = m.target();
        let mover = self.board.remove_figure_at(source);

        let captured = match *m {
            Move::EnPassantTake { .. } => target
                .offset(-side.forward(), 0)
                .and_then(|field| self.board.remove_figure_at(field)),
            _ => self.board.figure_at(target),
        };

        match *m {
            Move::Movement { .. } | Move::Take { .. } | Move::EnPassantTake { .. } => {
                if let Some(figure) = mover {
                    self.board.set_figure_at(target, figure);
                }
            }
            Move::Castling { .. } => {
                if let Some(figure) = mover {
                    self.board.set_figure_at(target, figure);
                }
                let castling_side = CastlingSide::from_king_side(source.file() < target.file());
                let rook_from = Field::new_unchecked(source.rank(), castling_side.rook_from_file());
                let rook_to = Field::new_unchecked(target.rank(), castling_side.rook_to_file());
                if let Some(rook) = self.board.remove_figure_at(rook_from) {
                    self.board.set_figure_at(rook_to, rook);
                }
            }
            Move::TransformationMovement { figure, .. } | Move::TransformationTake { figure, .. } => {
                self.board.set_figure_at(target, figure);
            }
        }

        if let Some(figure) = mover {
            match figure.kind {
                Kind::King => self.castlings.discard_side(figure.side),
                Kind::Rook => self.castlings.discard_rook(figure.side, source),
                _ => (),
            }
        }
        if let Some(figure) = captured {
            if figure.kind == Kind::Rook {
                self.castlings.discard_rook(figure.side, target);
            }
        }

        let pawn_moved = mover.is_some_and(|figure| figure.kind == Kind::Pawn);

        self.en_passant = match *m {
            Move::Movement { source, target }
                if pawn_moved
                    && source.file() == target.file()
                    && source.rank().abs_diff(target.rank()) == 2 =>
            {
                Some(Field::new_unchecked(
                    (source.rank() + target.rank()) / 2,
                    source.file(),
                ))
            }
            _ => None,
        };

        if m.is_capture() || captured.is_some() || pawn_moved {
            self.halfmoves = 0;
        } else {
            self.halfmoves = self.halfmoves.saturating_add(1);
        }

        if side.is_black() {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }

        self.side_to_move = !side;
    }
}

impl Default for Position {
    /// The standard starting position.
    fn default() -> Position {
        Position::new(Board::default(), Side::White, Castlings::all(), None, 0, 1)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Position) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castlings == other.castlings
            && self.en_passant == other.en_passant
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.side_to_move.hash(state);
        self.castlings.hash(state);
        self.en_passant.hash(state);
    }
}
