#![no_main]

use chess_rules::{fen::Fen, notation, Position};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let kiwipete: Fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
        .parse()
        .expect("valid fen");

    for pos in [Position::default(), kiwipete.into_position()] {
        let Ok(m) = notation::parse(text, &pos) else {
            continue;
        };
        if pos.moves().contains(&m) {
            let formatted = notation::format(&m, &pos);
            assert_eq!(notation::parse(&formatted, &pos), Ok(m));
        }
        let _ = pos.play(&m);
    }
});
