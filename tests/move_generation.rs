use dicechess::chess::bitboard::Bitboard;
use dicechess::chess::board::Board;
use dicechess::chess::core::{Piece, PieceKind, Player, Square};
use dicechess::chess::movegen::legal_moves;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

fn setup(placement: &str) -> Board {
    Board::try_from(placement).expect("parsing valid placement: {placement}")
}

fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let piece = board.at(from).expect("there should be a piece on {from}");
    legal_moves(piece, board).iter().collect()
}

/// Scatters pieces of random kinds and colors over roughly a third of the
/// board. Kings are not required: movement rules do not depend on them.
fn random_board(rng: &mut StdRng) -> Board {
    let mut board = Board::empty();
    for square in Square::iter() {
        if rng.gen_bool(0.3) {
            let owner = if rng.gen_bool(0.5) {
                Player::White
            } else {
                Player::Black
            };
            let kind = PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())];
            let _ = board.place(Piece::new(owner, kind, square));
        }
    }
    board
}

fn occupancy(board: &Board, player: Player) -> Bitboard {
    board.pieces_of(player).map(Piece::square).collect()
}

#[test]
fn rook_stops_at_capture() {
    let board = setup("8/8/p7/8/8/8/8/R7");
    let moves = destinations(&board, Square::A1);
    for square in [Square::A2, Square::A3, Square::A4, Square::A5, Square::A6] {
        assert!(moves.contains(&square), "{square} is missing");
    }
    assert!(!moves.contains(&Square::A7));
    assert!(!moves.contains(&Square::A8));
    assert_eq!(moves.len(), 5 + 7);
}

#[test]
fn starting_moves() {
    let board = Board::starting();
    let mut moves = Vec::new();
    for piece in board.pieces_of(Player::White) {
        for to in legal_moves(piece, &board).iter() {
            moves.push(format!("{}{to}", piece.square()));
        }
    }
    moves.sort();
    assert_eq!(
        moves,
        vec![
            "a2a3", "a2a4", "b1a3", "b1c3", "b2b3", "b2b4", "c2c3", "c2c4", "d2d3", "d2d4",
            "e2e3", "e2e4", "f2f3", "f2f4", "g1f3", "g1h3", "g2g3", "g2g4", "h2h3", "h2h4"
        ]
    );
}

#[test]
fn no_castling_en_passant_or_promotion() {
    // Castling squares are not reachable by the king.
    let board = setup("r3k2r/8/8/8/8/8/8/R3K2R");
    assert_eq!(
        destinations(&board, Square::E1),
        vec![Square::D1, Square::F1, Square::D2, Square::E2, Square::F2]
    );
    // A pawn next to an enemy pawn that just made a double push cannot take
    // it en passant.
    let board = setup("8/8/8/3pP3/8/8/8/8");
    assert_eq!(destinations(&board, Square::E5), vec![Square::E6]);
    // A pawn reaching the last rank stays a pawn.
    let board = setup("8/P7/8/8/8/8/8/8");
    assert_eq!(destinations(&board, Square::A7), vec![Square::A8]);
}

#[test]
fn king_may_step_into_attack() {
    // There is no check: the king can move next to the enemy rook.
    let board = setup("8/8/8/8/8/8/r7/2K5");
    assert_eq!(
        destinations(&board, Square::C1),
        vec![Square::B1, Square::D1, Square::B2, Square::C2, Square::D2]
    );
}

#[test]
fn mirrored_moves() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let board = random_board(&mut rng);
        let mirrored = board.mirror();
        for piece in board.pieces() {
            let twin = mirrored
                .at(piece.square().mirror())
                .expect("mirrored piece should exist");
            assert_eq!(twin.kind(), piece.kind());
            assert_eq!(twin.owner(), piece.owner().opponent());
            assert_eq!(
                legal_moves(twin, &mirrored),
                legal_moves(piece, &board)
                    .iter()
                    .map(Square::mirror)
                    .collect::<Bitboard>(),
                "{piece:?} on\n{board:?}"
            );
        }
    }
}

fn to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square as u8))
}

/// Destinations derived from the attack tables of a reference implementation.
/// Pawn pushes have no counterpart there, so only pawn captures are compared.
fn reference_moves(piece: &Piece, board: &Board) -> u64 {
    let own = occupancy(board, piece.owner());
    let opponents = occupancy(board, piece.owner().opponent());
    let occupied = shakmaty::Bitboard((own | opponents).bits());
    let square = to_shakmaty(piece.square());
    let attacks = match piece.kind() {
        PieceKind::King => shakmaty::attacks::king_attacks(square),
        PieceKind::Queen => shakmaty::attacks::queen_attacks(square, occupied),
        PieceKind::Rook => shakmaty::attacks::rook_attacks(square, occupied),
        PieceKind::Bishop => shakmaty::attacks::bishop_attacks(square, occupied),
        PieceKind::Knight => shakmaty::attacks::knight_attacks(square),
        PieceKind::Pawn => {
            let color = match piece.owner() {
                Player::White => shakmaty::Color::White,
                Player::Black => shakmaty::Color::Black,
            };
            shakmaty::attacks::pawn_attacks(color, square) & shakmaty::Bitboard(opponents.bits())
        },
    };
    attacks.0 & !own.bits()
}

#[test]
fn matches_reference_attacks() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let board = random_board(&mut rng);
        for piece in board.pieces() {
            let mut moves = legal_moves(piece, &board);
            if piece.kind() == PieceKind::Pawn {
                moves = moves
                    .iter()
                    .filter(|square| square.file() != piece.square().file())
                    .collect();
            }
            assert_eq!(
                moves,
                Bitboard::from_bits(reference_moves(piece, &board)),
                "{piece:?} on\n{board:?}"
            );
        }
    }
}
