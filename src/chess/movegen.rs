//! Destination generation for each [`PieceKind`].
//!
//! There is no notion of check: a move is legal as long as it follows the
//! movement rule of the piece, stays on the board and does not land on a piece
//! of the same color. The king may step into attacked squares, and the game
//! ends once it is captured.

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{Direction, Piece, PieceKind, Square};

const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::DownLeft,
    Direction::DownRight,
];

const QUEEN_DIRECTIONS: [Direction; 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    Direction::UpLeft.delta(),
    Direction::Up.delta(),
    Direction::UpRight.delta(),
    Direction::Right.delta(),
    Direction::Left.delta(),
    Direction::DownLeft.delta(),
    Direction::Down.delta(),
    Direction::DownRight.delta(),
];

/// The way a kind of piece moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// Repeats steps in each direction until the board edge or the first
    /// occupied square, which is included if it holds an opponent piece.
    Slide(&'static [Direction]),
    /// Jumps straight to each offset, ignoring pieces in between.
    Leap(&'static [(i8, i8)]),
    /// Pushes forward onto empty squares and captures diagonally forward.
    Pawn,
}

impl PieceKind {
    /// Movement rule of the kind. The queen combines rook and bishop slides.
    #[must_use]
    pub const fn movement(self) -> Movement {
        match self {
            Self::King => Movement::Leap(&KING_OFFSETS),
            Self::Queen => Movement::Slide(&QUEEN_DIRECTIONS),
            Self::Rook => Movement::Slide(&ROOK_DIRECTIONS),
            Self::Bishop => Movement::Slide(&BISHOP_DIRECTIONS),
            Self::Knight => Movement::Leap(&KNIGHT_OFFSETS),
            Self::Pawn => Movement::Pawn,
        }
    }
}

/// Calculates the set of squares the piece can move to on the given board.
///
/// ```
/// use dicechess::chess::board::Board;
/// use dicechess::chess::core::Square;
/// use dicechess::chess::movegen::legal_moves;
///
/// let board = Board::starting();
/// let knight = board.at(Square::G1).unwrap();
/// assert_eq!(
///     legal_moves(knight, &board).iter().collect::<Vec<_>>(),
///     vec![Square::F3, Square::H3]
/// );
/// ```
#[must_use]
pub fn legal_moves(piece: &Piece, board: &Board) -> Bitboard {
    match piece.kind().movement() {
        Movement::Slide(directions) => slide(piece, board, directions),
        Movement::Leap(offsets) => leap(piece, board, offsets),
        Movement::Pawn => pawn(piece, board),
    }
}

/// Returns true if the piece has at least one legal move.
#[must_use]
pub fn can_move(piece: &Piece, board: &Board) -> bool {
    !legal_moves(piece, board).is_empty()
}

fn slide(piece: &Piece, board: &Board, directions: &[Direction]) -> Bitboard {
    let mut targets = Bitboard::empty();
    for &direction in directions {
        let mut next = piece.square().shift(direction);
        while let Some(square) = next {
            match board.at(square) {
                None => targets.insert(square),
                Some(blocker) => {
                    if blocker.owner() != piece.owner() {
                        targets.insert(square);
                    }
                    break;
                },
            }
            next = square.shift(direction);
        }
    }
    targets
}

fn leap(piece: &Piece, board: &Board, offsets: &[(i8, i8)]) -> Bitboard {
    let reachable: Bitboard = offsets
        .iter()
        .filter_map(|&(file_delta, rank_delta)| piece.square().offset(file_delta, rank_delta))
        .collect();
    reachable - board.occupancy(piece.owner())
}

fn pawn(piece: &Piece, board: &Board) -> Bitboard {
    let mut targets = Bitboard::empty();
    let push = piece.owner().push_direction();
    let is_empty = |square: Square| board.at(square).is_none();

    if let Some(single) = piece.square().shift(push).filter(|&square| is_empty(square)) {
        targets.insert(single);
        if !piece.has_moved() {
            if let Some(double) = single.shift(push).filter(|&square| is_empty(square)) {
                targets.insert(double);
            }
        }
    }

    let (_, rank_delta) = push.delta();
    let diagonals: Bitboard = [-1, 1]
        .into_iter()
        .filter_map(|file_delta| piece.square().offset(file_delta, rank_delta))
        .collect();
    targets | (diagonals & board.occupancy(piece.owner().opponent()))
}
