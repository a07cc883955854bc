use std::{
    fmt::{self, Write as _},
    ops::Index,
};

use crate::{errors::Error, field::Field, figure::Figure, kind::Kind, side::Side};

/// [`Figure`] positions on an 8×8 grid.
///
/// # Examples
///
/// ```
/// use chess_rules::{Board, Field, Side};
///
/// let board = Board::default();
/// // r n b q k b n r
/// // p p p p p p p p
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // . . . . . . . .
/// // P P P P P P P P
/// // R N B Q K B N R
///
/// assert_eq!(board.figure_at(Field::E8), Some(Side::Black.king()));
/// assert_eq!(board.figure_at(Field::E4), None);
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Option<Figure>; 8]; 8],
}

impl Board {
    pub const fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Builds a board from rows of cells, the first row being rank 8.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoardShape`] unless there are exactly 8 rows
    /// of exactly 8 cells.
    pub fn from_grid(rows: Vec<Vec<Option<Figure>>>) -> Result<Board, Error> {
        if rows.len() != 8 || rows.iter().any(|row| row.len() != 8) {
            return Err(Error::InvalidBoardShape);
        }
        let mut board = Board::empty();
        for (target, row) in board.grid.iter_mut().zip(rows) {
            target.copy_from_slice(&row);
        }
        Ok(board)
    }

    /// Parses the board part of a FEN, e.g.
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] for characters other than digits
    /// and figure letters, and [`Error::InvalidBoardShape`] if there are not
    /// exactly 8 rows of 8 files.
    pub fn from_board_fen(board_fen: &[u8]) -> Result<Board, Error> {
        let mut board = Board::empty();
        let mut rows = 0;

        for (rank, row) in board_fen.split(|ch| *ch == b'/').enumerate() {
            if rank >= 8 {
                return Err(Error::InvalidBoardShape);
            }

            let mut file = 0;
            for &ch in row {
                if ch.is_ascii_digit() {
                    file += usize::from(ch - b'0');
                } else {
                    let figure = Figure::from_char(char::from(ch)).ok_or(Error::MalformedInput)?;
                    if file >= 8 {
                        return Err(Error::InvalidBoardShape);
                    }
                    board.grid[rank][file] = Some(figure);
                    file += 1;
                }
            }

            if file != 8 {
                return Err(Error::InvalidBoardShape);
            }
            rows += 1;
        }

        if rows != 8 {
            return Err(Error::InvalidBoardShape);
        }

        Ok(board)
    }

    /// Renders the board part of a FEN.
    pub fn board_fen(&self) -> String {
        let mut fen = String::with_capacity(71);

        for (rank, row) in self.grid.iter().enumerate() {
            if rank > 0 {
                fen.push('/');
            }

            let mut empty = 0u8;
            for cell in row {
                match cell {
                    Some(figure) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(figure.char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
        }

        fen
    }

    #[inline]
    pub fn figure_at(&self, field: Field) -> Option<Figure> {
        self.grid[usize::from(field.rank())][usize::from(field.file())]
    }

    /// Side of the figure on `field`, if any.
    #[inline]
    pub fn side_at(&self, field: Field) -> Option<Side> {
        self.figure_at(field).map(|figure| figure.side)
    }

    /// Kind of the figure on `field`, if any.
    #[inline]
    pub fn kind_at(&self, field: Field) -> Option<Kind> {
        self.figure_at(field).map(|figure| figure.kind)
    }

    /// Places `figure` on `field`, replacing any previous occupant.
    pub fn set_figure_at(&mut self, field: Field, figure: Figure) {
        self.grid[usize::from(field.rank())][usize::from(field.file())] = Some(figure);
    }

    /// Clears `field` and returns its previous occupant.
    pub fn remove_figure_at(&mut self, field: Field) -> Option<Figure> {
        self.grid[usize::from(field.rank())][usize::from(field.file())].take()
    }

    /// Iterates over occupied fields, row by row from the top.
    pub fn figures(&self) -> impl Iterator<Item = (Field, Figure)> + '_ {
        Field::all().filter_map(move |field| self.figure_at(field).map(|figure| (field, figure)))
    }

    /// The rows of the grid, the first one being rank 8.
    pub fn rows(&self) -> &[[Option<Figure>; 8]; 8] {
        &self.grid
    }
}

impl Default for Board {
    fn default() -> Board {
        const BACK: [Kind; 8] = [
            Kind::Rook,
            Kind::Knight,
            Kind::Bishop,
            Kind::Queen,
            Kind::King,
            Kind::Bishop,
            Kind::Knight,
            Kind::Rook,
        ];

        let mut board = Board::empty();
        for side in Side::ALL {
            for (file, kind) in BACK.iter().enumerate() {
                board.grid[usize::from(side.backrank())][file] = Some(kind.of(side));
                board.grid[usize::from(side.pawn_rank())][file] = Some(side.pawn());
            }
        }
        board
    }
}

impl Index<Field> for Board {
    type Output = Option<Figure>;

    fn index(&self, field: Field) -> &Option<Figure> {
        &self.grid[usize::from(field.rank())][usize::from(field.file())]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (file, cell) in row.iter().enumerate() {
                f.write_char(cell.map_or('.', Figure::char))?;
                f.write_char(if file < 7 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_default_board_fen() {
        assert_eq!(Board::default().board_fen(), START);
        assert_eq!(Board::from_board_fen(START.as_bytes()), Ok(Board::default()));
        assert_eq!(Board::empty().board_fen(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_board_fen_roundtrip() {
        for board_fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "4k3/8/8/8/8/8/8/4K3",
        ] {
            let board = Board::from_board_fen(board_fen.as_bytes()).expect("valid board fen");
            assert_eq!(board.board_fen(), board_fen);
        }
    }

    #[test]
    fn test_invalid_board_fen() {
        for (board_fen, error) in [
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP", Error::InvalidBoardShape),
            ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR/8", Error::InvalidBoardShape),
            ("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Error::InvalidBoardShape),
            ("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Error::InvalidBoardShape),
            ("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR", Error::InvalidBoardShape),
            ("rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR", Error::InvalidBoardShape),
            ("rnbqkbnr/pppxpppp/8/8/8/8/PPPPPPPP/RNBQKBNR", Error::MalformedInput),
            ("", Error::InvalidBoardShape),
        ] {
            assert_eq!(Board::from_board_fen(board_fen.as_bytes()), Err(error), "{board_fen}");
        }
        assert_eq!(
            Board::from_board_fen("rnbqkbnr/pppppppp/8/8/44/8/PPPPPPPP/RNBQKBNR".as_bytes())
                .map(|board| board.board_fen()),
            Ok(START.to_owned())
        );
    }

    #[test]
    fn test_from_grid() {
        let rows: Vec<Vec<Option<Figure>>> = Board::default()
            .rows()
            .iter()
            .map(|row| row.to_vec())
            .collect();
        assert_eq!(Board::from_grid(rows.clone()), Ok(Board::default()));

        let mut short = rows.clone();
        short.pop();
        assert_eq!(Board::from_grid(short), Err(Error::InvalidBoardShape));

        let mut narrow = rows;
        narrow[3].pop();
        assert_eq!(Board::from_grid(narrow), Err(Error::InvalidBoardShape));
    }

    #[test]
    fn test_figures() {
        let board = Board::default();
        assert_eq!(board.figures().count(), 32);
        assert_eq!(board.figures().next(), Some((Field::A8, Side::Black.rook())));
        assert_eq!(board[Field::D1], Some(Side::White.queen()));
        assert_eq!(board.side_at(Field::A2), Some(Side::White));
        assert_eq!(board.kind_at(Field::G8), Some(Kind::Knight));
    }

    #[test]
    fn test_debug() {
        let board = Board::default();
        let debug = format!("{board:?}");
        assert!(debug.starts_with("r n b q k b n r\np p p p p p p p\n. . . ."));
    }
}
