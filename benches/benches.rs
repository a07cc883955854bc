use chess_rules::{fen::Fen, notation, perft, Field, Move, Position};
use iai::black_box;

fn bench_shallow_perft() {
    let pos = Position::default();
    assert_eq!(black_box(perft(black_box(&pos), 3)), 8_902);
}

fn bench_kiwipete() -> u64 {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let pos = fen.parse::<Fen>().expect("valid fen").into_position();
    perft(black_box(&pos), 2)
}

fn bench_generate_moves() -> usize {
    let fen = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b kq - 0 1";
    let pos = fen.parse::<Fen>().expect("valid fen").into_position();
    black_box(&pos).moves().len()
}

fn bench_apply() -> Position {
    let fen = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b kq - 0 1";
    let pos = fen.parse::<Fen>().expect("valid fen").into_position();

    let m = Move::Movement {
        source: Field::F8,
        target: Field::E7,
    };

    let mut pos = black_box(pos);
    pos.apply(&m);
    pos
}

fn bench_san_candidates() -> usize {
    let fen = "r2q1rk1/pb1nbppp/5n2/1p2p3/3NP3/P1NB4/1P2QPPP/R1BR2K1 w - - 0 1";
    let pos = fen.parse::<Fen>().expect("valid fen").into_position();
    black_box(&pos)
        .san_candidates(chess_rules::Kind::Knight, Field::B5)
        .len()
}

fn bench_play_notation() -> Position {
    let moves = [
        "e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5", "d5", "exd5", "Na5", "Bb5+", "c6", "dxc6",
        "bxc6", "Ba4", "Ba6", "d3", "Bc5", "0-0", "0-0", "Nc3", "Qc7", "Nge4", "Be7", "Nxf6+",
        "Bxf6", "Ne4", "Be7", "Re1", "Rad8",
    ];

    let mut pos = black_box(Position::default());
    for text in black_box(moves).iter() {
        let m = notation::parse(text, &pos).expect("resolved move");
        pos.apply(&m);
    }
    pos
}

fn bench_fen_roundtrip() -> String {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let fen: Fen = black_box(fen).parse().expect("valid fen");
    fen.to_string()
}

iai::main!(
    bench_shallow_perft,
    bench_kiwipete,
    bench_generate_moves,
    bench_apply,
    bench_san_candidates,
    bench_play_notation,
    bench_fen_roundtrip,
);
