#![no_main]
use dicechess::chess::core::Square;
use dicechess::game::dice::LoadedDice;
use dicechess::game::{Game, Phase};
use libfuzzer_sys::fuzz_target;

// The first bytes load the dice, the rest are commands: 64 and above rolls the
// dice, anything below clicks the square with that index.
fuzz_target!(|data: &[u8]| {
    let Some((&face_count, rest)) = data.split_first() else {
        return;
    };
    let face_count = usize::from(face_count % 8) + 1;
    if rest.len() < face_count {
        return;
    }
    let (faces, commands) = rest.split_at(face_count);
    let faces: String = faces
        .iter()
        .map(|byte| char::from(b"kqrbnp"[usize::from(byte % 6)]))
        .collect();
    let Ok(dice) = LoadedDice::try_from(faces.as_str()) else {
        return;
    };
    let mut game = Game::with_dice(dice);
    for &command in commands {
        match Square::try_from(command) {
            Ok(square) => game.select_or_move(square),
            Err(_) => game.roll_dice(),
        }
        assert!(game.board().is_consistent());
        if game.phase() == Phase::AwaitingRoll {
            assert!(game.usable_kinds().is_empty());
        }
        if let Some(piece) = game.selected() {
            assert_eq!(piece.owner(), game.turn());
        }
    }
});
