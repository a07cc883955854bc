//! Read and write short algebraic move notation.
//!
//! The accepted subset covers piece moves like `Nf3`, `Rad1` or `Qh4xe1`,
//! pawn moves like `e4` or `exd5`, transformations like `e8=Q` or `dxe8=N`
//! and castling as `0-0` or `0-0-0`. A trailing `+` or `#` is ignored.
//!
//! # Examples
//!
//! ```
//! use chess_rules::{notation, Field, Move, Position};
//!
//! let pos = Position::default();
//! let m = notation::parse("Nf3", &pos)?;
//! assert_eq!(m, Move::Movement { source: Field::G1, target: Field::F3 });
//!
//! assert_eq!(notation::format(&m, &pos), "Nf3");
//! # Ok::<_, chess_rules::Error>(())
//! ```
//!
//! Castling and transformations are built from the text alone. The resulting
//! move is not checked against the position:
//!
//! ```
//! use chess_rules::{notation, Field, Move, Position};
//!
//! let pos = Position::default();
//! assert_eq!(
//!     notation::parse("0-0-0", &pos)?,
//!     Move::Castling { source: Field::E1, target: Field::C1 }
//! );
//! # Ok::<_, chess_rules::Error>(())
//! ```

use tracing::debug;

use crate::{
    castling::CastlingSide,
    errors::Error,
    field::Field,
    kind::Kind,
    m::{Move, MoveList},
    position::Position,
};

/// Resolves move notation in the context of a position.
///
/// # Errors
///
/// * [`Error::MalformedInput`] if `text` is not in the accepted subset.
/// * [`Error::AmbiguousOrUnresolvedMove`] if a piece or pawn move matches no
///   pseudo-legal move, or more than one.
pub fn parse(text: &str, pos: &Position) -> Result<Move, Error> {
    let result = parse_ascii(text.as_bytes(), pos);
    if let Err(err) = result {
        debug!(text, %err, side = %pos.side_to_move(), "unresolved notation");
    }
    result
}

fn parse_ascii(ascii: &[u8], pos: &Position) -> Result<Move, Error> {
    let ascii = match ascii {
        [rest @ .., b'+' | b'#'] => rest,
        _ => ascii,
    };

    if ascii.contains(&b'-') {
        parse_castling(ascii, pos)
    } else if let Some(eq) = ascii.iter().position(|&ch| ch == b'=') {
        parse_transformation(&ascii[..eq], &ascii[eq + 1..], pos)
    } else {
        parse_normal(ascii, pos)
    }
}

fn parse_castling(ascii: &[u8], pos: &Position) -> Result<Move, Error> {
    let castling_side = match ascii {
        b"0-0" | b"O-O" => CastlingSide::KingSide,
        b"0-0-0" | b"O-O-O" => CastlingSide::QueenSide,
        _ => return Err(Error::MalformedInput),
    };
    let side = pos.side_to_move();
    Ok(Move::Castling {
        source: CastlingSide::king_from(side),
        target: castling_side.king_to(side),
    })
}

fn parse_transformation(head: &[u8], tail: &[u8], pos: &Position) -> Result<Move, Error> {
    let kind = match *tail {
        [ch] => Kind::from_promotion_char(char::from(ch)),
        _ => None,
    }
    .ok_or(Error::MalformedInput)?;

    let side = pos.side_to_move();
    let figure = kind.of(side);
    let target = destination(head)?;
    if target.rank() != side.promotion_rank() {
        return Err(Error::MalformedInput);
    }
    let behind = target
        .offset(-side.forward(), 0)
        .ok_or(Error::MalformedInput)?;

    if head.contains(&b'x') {
        let file = match head.first() {
            Some(&ch @ b'a'..=b'h') => ch - b'a',
            _ => return Err(Error::MalformedInput),
        };
        Ok(Move::TransformationTake {
            source: Field::new(behind.rank(), file)?,
            target,
            figure,
        })
    } else {
        Ok(Move::TransformationMovement {
            source: behind,
            target,
            figure,
        })
    }
}

fn parse_normal(ascii: &[u8], pos: &Position) -> Result<Move, Error> {
    let target = destination(ascii)?;
    let hints = ascii.get(1..ascii.len() - 2).unwrap_or_default();
    let capture = hints.contains(&b'x');

    match ascii[0] {
        ch @ (b'N' | b'B' | b'R' | b'Q' | b'K') => {
            let kind = Kind::from_char(char::from(ch)).ok_or(Error::MalformedInput)?;
            let mut candidates = pos.san_candidates(kind, target);
            if capture {
                candidates.retain(|m| m.is_capture());
            }
            if candidates.len() != 1 {
                let (file, rank) = read_hints(hints)?;
                candidates.retain(|m| {
                    file.is_none_or(|f| f == m.source().file())
                        && rank.is_none_or(|r| r == m.source().rank())
                });
            }
            unique(&candidates)
        }
        file @ b'a'..=b'h' => {
            let mut candidates = pos.san_candidates(Kind::Pawn, target);
            candidates.retain(|m| m.source().file() == file - b'a' && m.is_capture() == capture);
            unique(&candidates)
        }
        _ => Err(Error::MalformedInput),
    }
}

/// The destination field in the last two characters.
fn destination(ascii: &[u8]) -> Result<Field, Error> {
    match ascii.len().checked_sub(2) {
        Some(start) => Field::from_ascii(&ascii[start..]),
        None => Err(Error::MalformedInput),
    }
}

/// Reads an optional source file and source rank between the piece letter
/// and the destination. A capture marker is skipped.
fn read_hints(hints: &[u8]) -> Result<(Option<u8>, Option<u8>), Error> {
    let mut file = None;
    let mut rank = None;
    for &ch in hints {
        match ch {
            b'a'..=b'h' if file.is_none() && rank.is_none() => file = Some(ch - b'a'),
            b'1'..=b'8' if rank.is_none() => rank = Some(b'8' - ch),
            b'x' => (),
            _ => return Err(Error::MalformedInput),
        }
    }
    Ok((file, rank))
}

fn unique(candidates: &MoveList) -> Result<Move, Error> {
    match candidates[..] {
        [m] => Ok(m),
        _ => Err(Error::AmbiguousOrUnresolvedMove),
    }
}

/// Writes a move in short algebraic notation, disambiguated against the
/// other pseudo-legal moves of the position.
///
/// Pawn captures always name the source file, so that [`parse()`] resolves
/// the result back to the same move.
pub fn format(m: &Move, pos: &Position) -> String {
    let mut s = String::with_capacity(8);
    append_to_string(m, pos, &mut s);
    s
}

/// Like [`format()`], appending to an existing string.
pub fn append_to_string(m: &Move, pos: &Position, s: &mut String) {
    if let Some(castling_side) = m.castling_side() {
        s.push_str(match castling_side {
            CastlingSide::KingSide => "0-0",
            CastlingSide::QueenSide => "0-0-0",
        });
        return;
    }

    let source = m.source();
    let target = m.target();
    let kind = if m.is_transformation() || m.is_en_passant() {
        Kind::Pawn
    } else {
        pos.board().kind_at(source).unwrap_or(Kind::Pawn)
    };

    if kind == Kind::Pawn {
        if m.is_capture() {
            s.push(source.file_char());
        }
    } else {
        s.push(kind.upper_char());

        let others = pos.san_candidates(kind, target);
        let mut ambiguous = false;
        let mut shared_file = false;
        let mut shared_rank = false;
        for other in others.iter().filter(|other| other.source() != source) {
            ambiguous = true;
            shared_file |= other.source().file() == source.file();
            shared_rank |= other.source().rank() == source.rank();
        }
        if ambiguous {
            if !shared_file {
                s.push(source.file_char());
            } else if !shared_rank {
                s.push(source.rank_char());
            } else {
                s.push(source.file_char());
                s.push(source.rank_char());
            }
        }
    }

    if m.is_capture() {
        s.push('x');
    }
    s.push(target.file_char());
    s.push(target.rank_char());

    if let Some(figure) = m.figure() {
        s.push('=');
        s.push(figure.kind.upper_char());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fen::Fen, side::Side};

    fn from_fen(fen: &str) -> Position {
        fen.parse::<Fen>().expect("valid fen").into_position()
    }

    #[test]
    fn test_parse_piece_moves() {
        let pos = Position::default();
        assert_eq!(
            parse("Nf3", &pos),
            Ok(Move::Movement {
                source: Field::G1,
                target: Field::F3,
            })
        );
        assert_eq!(
            parse("Nc3+", &pos),
            Ok(Move::Movement {
                source: Field::B1,
                target: Field::C3,
            })
        );
        assert_eq!(parse("Nd2", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        assert_eq!(parse("Qd3", &pos), Err(Error::AmbiguousOrUnresolvedMove));
    }

    #[test]
    fn test_parse_pawn_moves() {
        let pos = Position::default();
        assert_eq!(
            parse("e4", &pos),
            Ok(Move::Movement {
                source: Field::E2,
                target: Field::E4,
            })
        );
        assert_eq!(parse("e5", &pos), Err(Error::AmbiguousOrUnresolvedMove));

        let pos = from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
        assert_eq!(
            parse("exd6", &pos),
            Ok(Move::EnPassantTake {
                source: Field::E5,
                target: Field::D6,
            })
        );
        assert_eq!(parse("exf6", &pos), Err(Error::AmbiguousOrUnresolvedMove));

        // The capture marker must agree with the move.
        let pos = Position::default();
        assert_eq!(parse("exe4", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        assert_eq!(parse("Nxf3", &pos), Err(Error::AmbiguousOrUnresolvedMove));

        let pos = from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        assert_eq!(
            parse("exd5", &pos),
            Ok(Move::Take {
                source: Field::E4,
                target: Field::D5,
            })
        );
        assert_eq!(parse("ed5", &pos), Err(Error::AmbiguousOrUnresolvedMove));
    }

    #[test]
    fn test_parse_castling() {
        let pos = Position::default();
        assert_eq!(
            parse("0-0-0", &pos),
            Ok(Move::Castling {
                source: Field::E1,
                target: Field::C1,
            })
        );

        let pos = from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
        assert_eq!(
            parse("0-0#", &pos),
            Ok(Move::Castling {
                source: Field::E8,
                target: Field::G8,
            })
        );
        assert_eq!(parse("0-0-0-0", &pos), Err(Error::MalformedInput));
        assert_eq!(parse("e2-e4", &pos), Err(Error::MalformedInput));
    }

    #[test]
    fn test_parse_transformations() {
        let pos = from_fen("r2qkbnr/pbPppppp/2n5/1p6/8/8/PPP1PPPP/RNBQKBNR w KQkq - 0 1");
        assert_eq!(
            parse("c8=N", &pos),
            Ok(Move::TransformationMovement {
                source: Field::C7,
                target: Field::C8,
                figure: Side::White.knight(),
            })
        );
        assert_eq!(
            parse("cxd8=Q+", &pos),
            Ok(Move::TransformationTake {
                source: Field::C7,
                target: Field::D8,
                figure: Side::White.queen(),
            })
        );
        assert_eq!(parse("c8=K", &pos), Err(Error::MalformedInput));
        assert_eq!(parse("c8=q", &pos), Err(Error::MalformedInput));
        assert_eq!(parse("c8=", &pos), Err(Error::MalformedInput));
        assert_eq!(parse("c8", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        // Only onto the last rank.
        assert_eq!(parse("e4=Q", &pos), Err(Error::MalformedInput));
        assert_eq!(parse("bxc6=N", &pos), Err(Error::MalformedInput));

        let pos = from_fen("4k3/8/8/8/8/8/1p6/R3K3 b - - 0 1");
        assert_eq!(
            parse("bxa1=R", &pos),
            Ok(Move::TransformationTake {
                source: Field::B2,
                target: Field::A1,
                figure: Side::Black.rook(),
            })
        );
    }

    #[test]
    fn test_parse_disambiguation() {
        let pos = from_fen("4k3/8/8/8/R6R/8/8/R3K3 w - - 0 1");
        assert_eq!(parse("Rd4", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        assert_eq!(
            parse("Rhd4", &pos),
            Ok(Move::Movement {
                source: Field::H4,
                target: Field::D4,
            })
        );
        assert_eq!(
            parse("Rad4", &pos),
            Ok(Move::Movement {
                source: Field::A4,
                target: Field::D4,
            })
        );
        assert_eq!(parse("Ra3", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        assert_eq!(
            parse("R1a3", &pos),
            Ok(Move::Movement {
                source: Field::A1,
                target: Field::A3,
            })
        );
        assert_eq!(
            parse("Ra4a3", &pos),
            Ok(Move::Movement {
                source: Field::A4,
                target: Field::A3,
            })
        );
        // A capture marker needs a figure to take.
        assert_eq!(parse("Ra4xa3", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        assert_eq!(parse("Rza3", &pos), Err(Error::MalformedInput));
    }

    #[test]
    fn test_parse_malformed() {
        let pos = Position::default();
        for text in ["", "e", "+", "Xe4", "Pe4", "Nf9", "Ni3", "e4x", "9e4"] {
            assert_eq!(parse(text, &pos), Err(Error::MalformedInput), "{text}");
        }
    }

    #[test]
    fn test_format() {
        let pos = Position::default();
        let m = parse("e4", &pos).expect("resolved");
        assert_eq!(format(&m, &pos), "e4");

        let pos = from_fen("4k3/8/8/8/R6R/8/8/R3K3 w - - 0 1");
        for (m, expected) in [
            (
                Move::Movement {
                    source: Field::H4,
                    target: Field::D4,
                },
                "Rhd4",
            ),
            (
                Move::Movement {
                    source: Field::A1,
                    target: Field::A3,
                },
                "R1a3",
            ),
            (
                Move::Movement {
                    source: Field::H4,
                    target: Field::H8,
                },
                "Rh8",
            ),
            (
                Move::Movement {
                    source: Field::E1,
                    target: Field::D2,
                },
                "Kd2",
            ),
        ] {
            assert_eq!(format(&m, &pos), expected);
        }

        let pos = from_fen("r2qkbnr/pbPppppp/2n5/1p6/8/8/PPP1PPPP/RNBQKBNR w KQkq - 0 1");
        let m = Move::TransformationTake {
            source: Field::C7,
            target: Field::B8,
            figure: Side::White.knight(),
        };
        assert_eq!(format(&m, &pos), "cxb8=N");
        let m = Move::Castling {
            source: Field::E1,
            target: Field::C1,
        };
        assert_eq!(format(&m, &pos), "0-0-0");
    }

    #[test]
    fn test_format_file_and_rank() {
        let pos = from_fen("4k3/8/8/1N6/8/1N3N2/8/4K3 w - - 0 1");
        let m = Move::Movement {
            source: Field::B3,
            target: Field::D4,
        };
        // Knights on b5, b3 and f3 all reach d4. For b3 both the file and
        // the rank are shared.
        assert_eq!(format(&m, &pos), "Nb3d4");
        assert_eq!(parse("Nb3d4", &pos), Ok(m));
        assert_eq!(parse("Nbd4", &pos), Err(Error::AmbiguousOrUnresolvedMove));
        assert_eq!(
            parse("N5d4", &pos),
            Ok(Move::Movement {
                source: Field::B5,
                target: Field::D4,
            })
        );
    }

    #[test]
    fn test_roundtrip_all_moves() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            "r2qkbnr/pbPppppp/2n5/1p6/8/8/PPP1PPPP/RNBQKBNR w KQkq - 0 1",
            "4k3/8/8/1N6/8/1N3N2/8/4K3 w - - 0 1",
            "1Q2k3/8/8/Q7/8/8/Q7/4K2Q w - - 0 1",
        ] {
            let pos = from_fen(fen);
            for m in pos.moves() {
                let text = format(&m, &pos);
                assert_eq!(parse(&text, &pos), Ok(m), "{fen}: {text}");
            }
        }
    }
}
