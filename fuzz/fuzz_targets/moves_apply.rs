#![no_main]

use chess_rules::fen::Fen;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(fen) = Fen::from_ascii(data) else {
        return;
    };
    let pos = fen.into_position();
    for m in pos.moves() {
        assert_eq!(m.source().to_string().len(), 2);
        let child = pos.clone().play(&m);
        assert_ne!(child.side_to_move(), pos.side_to_move());
        let text = Fen::from_position(child.clone()).to_string();
        assert_eq!(text.parse::<Fen>().map(Fen::into_position), Ok(child));
    }
});
