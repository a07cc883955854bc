use crate::{
    attacks,
    castling::CastlingSide,
    field::Field,
    kind::Kind,
    m::{Move, MoveList},
    position::Position,
    side::Side,
};

/// Generates the pseudo-legal moves of the figure on `from`. Nothing is
/// generated for empty fields and for figures of the side not to move.
pub(crate) fn gen_from(pos: &Position, from: Field, moves: &mut MoveList) {
    let Some(figure) = pos.board().figure_at(from) else {
        return;
    };
    if figure.side != pos.side_to_move() {
        return;
    }

    match figure.kind {
        Kind::Pawn => gen_pawn(pos, from, moves),
        Kind::Knight => gen_leaper(pos, from, attacks::knight_targets(from), moves),
        Kind::Bishop => gen_slider(pos, from, &attacks::BISHOP_DELTAS, moves),
        Kind::Rook => gen_slider(pos, from, &attacks::ROOK_DELTAS, moves),
        Kind::Queen => {
            gen_slider(pos, from, &attacks::BISHOP_DELTAS, moves);
            gen_slider(pos, from, &attacks::ROOK_DELTAS, moves);
        }
        Kind::King => {
            gen_leaper(pos, from, attacks::king_targets(from), moves);
            gen_castling(pos, from, moves);
        }
    }
}

/// `Movement` onto an empty field, `Take` onto an opposing figure, nothing
/// onto a friendly figure.
fn classify(pos: &Position, source: Field, target: Field) -> Option<Move> {
    match pos.board().side_at(target) {
        None => Some(Move::Movement { source, target }),
        Some(side) if side != pos.side_to_move() => Some(Move::Take { source, target }),
        Some(_) => None,
    }
}

fn gen_leaper<I>(pos: &Position, from: Field, targets: I, moves: &mut MoveList)
where
    I: Iterator<Item = Field>,
{
    moves.extend(targets.filter_map(|to| classify(pos, from, to)));
}

fn gen_slider(pos: &Position, from: Field, deltas: &[(i8, i8)], moves: &mut MoveList) {
    for &delta in deltas {
        for to in attacks::ray(from, delta) {
            match classify(pos, from, to) {
                Some(m @ Move::Movement { .. }) => moves.push(m),
                Some(m) => {
                    moves.push(m);
                    break;
                }
                None => break,
            }
        }
    }
}

fn gen_pawn(pos: &Position, from: Field, moves: &mut MoveList) {
    let side = pos.side_to_move();
    let forward = side.forward();
    let board = pos.board();

    if let Some(ahead) = from.offset(forward, 0) {
        if board.figure_at(ahead).is_none() {
            push_pawn_move(side, from, ahead, false, moves);

            if from.rank() == side.pawn_rank() {
                if let Some(double) = ahead.offset(forward, 0) {
                    if board.figure_at(double).is_none() {
                        moves.push(Move::Movement {
                            source: from,
                            target: double,
                        });
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(to) = from.offset(forward, file_delta) else {
            continue;
        };
        match board.side_at(to) {
            Some(other) if other != side => push_pawn_move(side, from, to, true, moves),
            Some(_) => (),
            None if pos.en_passant() == Some(to) && to.rank() == side.en_passant_rank() => {
                moves.push(Move::EnPassantTake {
                    source: from,
                    target: to,
                })
            }
            None => (),
        }
    }
}

fn push_pawn_move(side: Side, source: Field, target: Field, capture: bool, moves: &mut MoveList) {
    if target.rank() == side.promotion_rank() {
        for kind in Kind::PROMOTIONS {
            let figure = kind.of(side);
            moves.push(if capture {
                Move::TransformationTake {
                    source,
                    target,
                    figure,
                }
            } else {
                Move::TransformationMovement {
                    source,
                    target,
                    figure,
                }
            });
        }
    } else if capture {
        moves.push(Move::Take { source, target });
    } else {
        moves.push(Move::Movement { source, target });
    }
}

fn gen_castling(pos: &Position, king: Field, moves: &mut MoveList) {
    let side = pos.side_to_move();
    if king != CastlingSide::king_from(side) {
        return;
    }

    let board = pos.board();
    for castling_side in CastlingSide::ALL {
        if pos.castlings().has(side, castling_side)
            && castling_side
                .path(side)
                .all(|field| board.figure_at(field).is_none())
            && board.figure_at(castling_side.rook_from(side)) == Some(side.rook())
        {
            moves.push(Move::Castling {
                source: king,
                target: castling_side.king_to(side),
            });
        }
    }
}
