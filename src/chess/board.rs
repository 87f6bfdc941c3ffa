//! Square-centric [`Board`]: a fixed arena of 64 slots, each holding at most
//! one [`Piece`].
//!
//! The board owns the pieces. A piece never exists in two slots at once: the
//! only way to change its square is [`Board::relocate`], which clears the old
//! slot, updates the piece and fills the new slot in one step.

use std::fmt::{self, Write};

use anyhow::bail;
use strum::IntoEnumIterator;

use crate::chess::bitboard::Bitboard;
use crate::chess::core::{File, Piece, PieceKind, Player, Rank, Square, BOARD_SIZE, BOARD_WIDTH};

/// Order of the pieces on both back ranks at the start of the game, from
/// [`File::A`] to [`File::H`].
const BACKRANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupancy of all 64 squares.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            squares: std::array::from_fn(|_| None),
        }
    }

    /// Creates the standard starting layout: pawns on the second and seventh
    /// ranks, Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook on the
    /// back ranks.
    ///
    /// ```
    /// use dicechess::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for player in Player::iter() {
            for (file, kind) in File::iter().zip(BACKRANK) {
                board.put(Piece::new(
                    player,
                    kind,
                    Square::new(file, Rank::backrank(player)),
                ));
                board.put(Piece::new(
                    player,
                    PieceKind::Pawn,
                    Square::new(file, Rank::pawns_starting(player)),
                ));
            }
        }
        board
    }

    /// Returns the piece standing on the square, if any.
    #[must_use]
    pub fn at(&self, square: Square) -> Option<&Piece> {
        self.squares[square as usize].as_ref()
    }

    /// Places the piece on its square and returns the piece that was standing
    /// there before, if any.
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        let square = piece.square();
        self.squares[square as usize].replace(piece)
    }

    /// Takes the piece off the board.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Moves the piece standing on `from` to `to`, marks it as moved and
    /// returns the piece previously standing on `to` (i.e. the captured one).
    /// Does nothing if `from` is empty or equal to `to`.
    ///
    /// Legality is not checked here: this is the caller's responsibility.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        if from == to {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.relocate(to);
        self.place(piece)
    }

    /// Iterates over all pieces on the board from A1 to H8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten()
    }

    /// Iterates over all pieces of given player from A1 to H8.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.owner() == player)
    }

    /// Squares occupied by the player's pieces.
    #[must_use]
    pub fn occupancy(&self, player: Player) -> Bitboard {
        self.pieces_of(player).map(Piece::square).collect()
    }

    /// Checks that every piece is stored in the slot matching its square.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Square::iter().all(|square| {
            self.at(square)
                .map_or(true, |piece| piece.square() == square)
        })
    }

    /// Returns the same position seen from the other side: every piece
    /// changes color and is reflected across the middle of the board.
    #[must_use]
    pub fn mirror(&self) -> Self {
        let mut mirrored = Self::empty();
        for piece in self.pieces() {
            let mut reflected =
                Piece::new(piece.owner().opponent(), piece.kind(), piece.square().mirror());
            if piece.has_moved() {
                reflected.mark_moved();
            }
            let _ = mirrored.place(reflected);
        }
        mirrored
    }

    // Only used while building boards where the slot is known to be empty.
    fn put(&mut self, piece: Piece) {
        debug_assert!(self.at(piece.square()).is_none());
        let _ = self.place(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl TryFrom<&str> for Board {
    type Error = anyhow::Error;

    /// Parses the piece placement part of [Forsyth-Edwards Notation] (e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`). Surrounding
    /// whitespace is ignored.
    ///
    /// Pawns outside of their starting rank are considered to have moved
    /// already, so they won't be able to advance two squares.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if the input does not describe exactly 8
    /// ranks of exactly 8 squares or contains unknown symbols.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let placement = input.trim();
        let mut board = Self::empty();
        let mut rank_id = BOARD_WIDTH;
        for rank_fen in placement.split('/') {
            if rank_id == 0 {
                bail!("incorrect placement: expected 8 ranks, got {placement}");
            }
            rank_id -= 1;
            let rank = Rank::try_from(rank_id)?;
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if file >= BOARD_WIDTH {
                    bail!("incorrect placement: rank {rank_fen} exceeds {BOARD_WIDTH} files");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        file += symbol as u8 - b'0';
                        continue;
                    },
                    _ => (),
                }
                let square = Square::new(file.try_into()?, rank);
                let mut piece = Piece::from_symbol(symbol, square)?;
                if piece.kind() == PieceKind::Pawn
                    && rank != Rank::pawns_starting(piece.owner())
                {
                    piece.mark_moved();
                }
                board.put(piece);
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!(
                    "incorrect placement: rank size should be exactly {BOARD_WIDTH}, got {rank_fen} of length {file}"
                );
            }
        }
        if rank_id != 0 {
            bail!("incorrect placement: there should be 8 ranks, got {placement}");
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Prints board representation in FEN piece placement format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut empty_squares = 0i32;
            for file in File::iter() {
                if let Some(piece) = self.at(Square::new(file, rank)) {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::One {
                const RANK_SEPARATOR: char = '/';
                f.write_char(RANK_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if rank != Rank::One {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
