//! Chess primitives commonly used within [`crate::chess`] and
//! [`crate::game`].

use std::fmt::{self, Write};
use std::mem;
use std::ops::Not;

use anyhow::bail;
use itertools::Itertools;
use strum::IntoEnumIterator;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use dicechess::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// A square is the (file, rank) coordinate pair packed into a single byte.
///
/// ```
/// use dicechess::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// assert_eq!(Square::from_coords(4, 1), Some(Square::E2));
/// assert_eq!(Square::from_coords(8, 1), None);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Builds a square from zero-based (file, rank) coordinates. Returns
    /// [`None`] when either coordinate falls outside the board.
    #[must_use]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        const WIDTH: i8 = BOARD_WIDTH as i8;
        if file < 0 || file >= WIDTH || rank < 0 || rank >= WIDTH {
            return None;
        }
        Some(unsafe { mem::transmute((rank * WIDTH + file) as u8) })
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Moves the square by given number of files and ranks. Returns [`None`]
    /// if the result would leave the board.
    #[must_use]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        Self::from_coords(
            self.file() as i8 + file_delta,
            self.rank() as i8 + rank_delta,
        )
    }

    /// Returns the neighbouring square in given direction, if there is one.
    #[must_use]
    pub const fn shift(self, direction: Direction) -> Option<Self> {
        let (file_delta, rank_delta) = direction.delta();
        self.offset(file_delta, rank_delta)
    }

    /// Reflects the square across the horizontal axis between ranks 4 and 5
    /// (e.g. E2 becomes E7). Useful for comparing the positions of the two
    /// players.
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self::new(self.file(), self.rank().mirror())
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        // Exclusive range patterns are not allowed:
        // https://github.com/rust-lang/rust/issues/37854
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(unsafe { mem::transmute::<u8, Self>(square_index) }),
            _ => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(column) }),
            _ => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, strum::EnumIter)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// The rank holding the player's king and other major pieces at the start
    /// of the game.
    #[must_use]
    pub const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    /// The rank holding the player's pawns at the start of the game.
    #[must_use]
    pub const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }

    const fn mirror(self) -> Self {
        unsafe { mem::transmute(BOARD_WIDTH - 1 - self as u8) }
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute::<u8, Self>(row) }),
            _ => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// The game is played between two players: White (having the advantage of the
/// first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// White pawns advance towards higher ranks, Black pawns towards lower
    /// ones.
    pub(super) const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// Standard [chess pieces]. These are also the faces of each die.
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All kinds in the order of die faces.
    pub const ALL: [Self; 6] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
        Self::Pawn,
    ];

    /// Lowercase algebraic symbol of the piece kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    /// Parses a kind from its algebraic symbol, ignoring the case.
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Ok(Self::King),
            'q' => Ok(Self::Queen),
            'r' => Ok(Self::Rook),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            'p' => Ok(Self::Pawn),
            _ => bail!("piece kind symbol should be within \"kqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Rook => "Rook",
            Self::Bishop => "Bishop",
            Self::Knight => "Knight",
            Self::Pawn => "Pawn",
        })
    }
}

bitflags::bitflags! {
    /// A set of [`PieceKind`]s. The engine uses it to track the kinds the dice
    /// granted to the player for the current turn: each kind can be moved
    /// once, no matter how many dice show it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        #[allow(missing_docs)]
        const KING = 0b00_0001;
        #[allow(missing_docs)]
        const QUEEN = 0b00_0010;
        #[allow(missing_docs)]
        const ROOK = 0b00_0100;
        #[allow(missing_docs)]
        const BISHOP = 0b00_1000;
        #[allow(missing_docs)]
        const KNIGHT = 0b01_0000;
        #[allow(missing_docs)]
        const PAWN = 0b10_0000;
    }
}

impl KindSet {
    /// Returns true if the set contains given kind.
    #[must_use]
    pub fn has(self, kind: PieceKind) -> bool {
        self.contains(Self::from(kind))
    }

    /// Iterates over the kinds in the set in [`PieceKind::ALL`] order.
    pub fn kinds(self) -> impl Iterator<Item = PieceKind> {
        PieceKind::iter().filter(move |kind| self.has(*kind))
    }
}

impl From<PieceKind> for KindSet {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::King => Self::KING,
            PieceKind::Queen => Self::QUEEN,
            PieceKind::Rook => Self::ROOK,
            PieceKind::Bishop => Self::BISHOP,
            PieceKind::Knight => Self::KNIGHT,
            PieceKind::Pawn => Self::PAWN,
        }
    }
}

impl FromIterator<PieceKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = PieceKind>>(kinds: I) -> Self {
        kinds
            .into_iter()
            .fold(Self::empty(), |set, kind| set | Self::from(kind))
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.kinds().join(", "))
    }
}

/// A specific piece owned by a player and placed on the board.
///
/// The square is only changed by [`crate::chess::board::Board`] when it
/// relocates the piece, so it always matches the board slot holding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    owner: Player,
    kind: PieceKind,
    square: Square,
    /// Only matters for pawns: a pawn that has not moved yet can advance two
    /// squares.
    has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind, square: Square) -> Self {
        Self {
            owner,
            kind,
            square,
            has_moved: false,
        }
    }

    /// Creates a piece from its FEN symbol: uppercase for White, lowercase for
    /// Black.
    ///
    /// # Errors
    ///
    /// If the symbol is not one of `KQRBNPkqrbnp`.
    pub fn from_symbol(symbol: char, square: Square) -> anyhow::Result<Self> {
        if !"KQRBNPkqrbnp".contains(symbol) {
            bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'");
        }
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self::new(owner, PieceKind::try_from(symbol)?, square))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn owner(&self) -> Player {
        self.owner
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// FEN symbol of the piece.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self.owner {
            Player::White => self.kind.symbol().to_ascii_uppercase(),
            Player::Black => self.kind.symbol(),
        }
    }

    pub(super) fn relocate(&mut self, to: Square) {
        self.square = to;
        self.has_moved = true;
    }

    pub(super) fn mark_moved(&mut self) {
        self.has_moved = true;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Also known as `NorthWest`.
    UpLeft,
    /// Also known as `North`.
    Up,
    /// Also known as `NorthEast`.
    UpRight,
    /// Also known as `East`.
    Right,
    /// Also known as `West`.
    Left,
    /// Also known as `SouthWest`.
    DownLeft,
    /// Also known as `South`.
    Down,
    /// Also known as `SouthEast`.
    DownRight,
}

impl Direction {
    /// Returns (file, rank) increments of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, 1),
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::DownLeft => (-1, -1),
            Self::Down => (0, -1),
            Self::DownRight => (1, -1),
        }
    }
}

#[cfg(test)]
mod test {
    use std::mem::{size_of, size_of_val};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rank() {
        assert_eq!(
            ('1'..='9')
                .filter_map(|ch| Rank::try_from(ch).ok())
                .collect::<Vec<Rank>>(),
            vec![
                Rank::One,
                Rank::Two,
                Rank::Three,
                Rank::Four,
                Rank::Five,
                Rank::Six,
                Rank::Seven,
                Rank::Eight,
            ]
        );
        assert_eq!(
            (0..=BOARD_WIDTH)
                .filter_map(|idx| Rank::try_from(idx).ok())
                .collect::<Vec<Rank>>(),
            Rank::iter().collect::<Vec<Rank>>()
        );
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '9'")]
    fn rank_from_incorrect_char() {
        let _ = Rank::try_from('9').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within '1'..='8', got '0'")]
    fn rank_from_incorrect_char_zero() {
        let _ = Rank::try_from('0').unwrap();
    }

    #[test]
    #[should_panic(expected = "rank should be within 0..BOARD_WIDTH, got 8")]
    fn rank_from_incorrect_index() {
        let _ = Rank::try_from(BOARD_WIDTH).unwrap();
    }

    #[test]
    fn file() {
        assert_eq!(
            ('a'..='i')
                .filter_map(|ch| File::try_from(ch).ok())
                .collect::<Vec<File>>(),
            vec![
                File::A,
                File::B,
                File::C,
                File::D,
                File::E,
                File::F,
                File::G,
                File::H,
            ]
        );
        assert_eq!(
            (0..=BOARD_WIDTH)
                .filter_map(|idx| File::try_from(idx).ok())
                .collect::<Vec<File>>(),
            File::iter().collect::<Vec<File>>()
        );
    }

    #[test]
    #[should_panic(expected = "file should be within 'a'..='h', got 'i'")]
    fn file_from_incorrect_char() {
        let _ = File::try_from('i').unwrap();
    }

    #[test]
    fn square() {
        let squares: Vec<_> = [
            0u8,
            BOARD_SIZE - 1,
            BOARD_WIDTH - 1,
            BOARD_WIDTH,
            BOARD_WIDTH * 2 + 5,
            BOARD_SIZE,
        ]
        .iter()
        .filter_map(|square| Square::try_from(*square).ok())
        .collect();
        assert_eq!(
            squares,
            vec![Square::A1, Square::H8, Square::H1, Square::A2, Square::F3]
        );
        assert_eq!(Square::try_from("e4").unwrap(), Square::E4);
        assert_eq!(Square::E4.to_string(), "e4");
        assert_eq!(Square::new(File::B, Rank::Three), Square::B3);
        assert_eq!(Square::G7.file(), File::G);
        assert_eq!(Square::G7.rank(), Rank::Seven);
    }

    #[test]
    #[should_panic(expected = "square should be two-char, got e44 with 3 chars")]
    fn square_from_long_str() {
        let _ = Square::try_from("e44").unwrap();
    }

    #[test]
    fn coordinates() {
        assert_eq!(Square::from_coords(0, 0), Some(Square::A1));
        assert_eq!(Square::from_coords(7, 7), Some(Square::H8));
        assert_eq!(Square::from_coords(0, 5), Some(Square::A6));
        for (file, rank) in [(-1, 0), (0, -1), (8, 0), (0, 8), (-3, 12)] {
            assert_eq!(Square::from_coords(file, rank), None);
        }
        for square in Square::iter() {
            assert_eq!(
                Square::from_coords(square.file() as i8, square.rank() as i8),
                Some(square)
            );
        }
    }

    #[test]
    fn mirror() {
        assert_eq!(Square::E2.mirror(), Square::E7);
        assert_eq!(Square::A1.mirror(), Square::A8);
        assert_eq!(Square::H5.mirror(), Square::H4);
        assert!(Square::iter().all(|square| square.mirror().mirror() == square));
    }

    #[test]
    fn within_board_shift() {
        let square = Square::E4;
        assert_eq!(square.shift(Direction::Left), Some(Square::D4));
        assert_eq!(square.shift(Direction::Up), Some(Square::E5));
        assert_eq!(square.shift(Direction::UpRight), Some(Square::F5));
        assert_eq!(square.shift(Direction::UpLeft), Some(Square::D5));
        assert_eq!(square.shift(Direction::Right), Some(Square::F4));
        assert_eq!(square.shift(Direction::Down), Some(Square::E3));
        assert_eq!(square.shift(Direction::DownRight), Some(Square::F3));
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::D3));
    }

    #[test]
    fn border_squares_shift() {
        let square = Square::D1;
        assert_eq!(square.shift(Direction::Up), Some(Square::D2));
        for direction in [Direction::Down, Direction::DownRight, Direction::DownLeft] {
            assert_eq!(square.shift(direction), None);
        }

        let square = Square::A2;
        assert_eq!(square.shift(Direction::UpRight), Some(Square::B3));
        for direction in [Direction::Left, Direction::UpLeft, Direction::DownLeft] {
            assert_eq!(square.shift(direction), None);
        }

        let square = Square::H8;
        assert_eq!(square.shift(Direction::DownLeft), Some(Square::G7));
        for direction in [
            Direction::Up,
            Direction::UpRight,
            Direction::UpLeft,
            Direction::DownRight,
            Direction::Right,
        ] {
            assert_eq!(square.shift(direction), None);
        }
    }

    #[test]
    fn players() {
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.to_string(), "White");
    }

    #[test]
    fn piece_symbols() {
        let piece = Piece::from_symbol('N', Square::G1).unwrap();
        assert_eq!(piece.owner(), Player::White);
        assert_eq!(piece.kind(), PieceKind::Knight);
        assert_eq!(piece.square(), Square::G1);
        assert!(!piece.has_moved());
        assert_eq!(piece.to_string(), "N");

        let piece = Piece::from_symbol('q', Square::D8).unwrap();
        assert_eq!(piece.owner(), Player::Black);
        assert_eq!(piece.kind(), PieceKind::Queen);
        assert_eq!(piece.to_string(), "q");

        assert!(Piece::from_symbol('x', Square::A1).is_err());
        assert!(Piece::from_symbol('1', Square::A1).is_err());
    }

    #[test]
    fn kind_symbols() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::try_from(kind.symbol()).unwrap(), kind);
            assert_eq!(
                PieceKind::try_from(kind.symbol().to_ascii_uppercase()).unwrap(),
                kind
            );
        }
        assert_eq!(PieceKind::Knight.to_string(), "Knight");
        assert!(PieceKind::try_from('z').is_err());
    }

    #[test]
    fn kind_set() {
        let set: KindSet = [PieceKind::Pawn, PieceKind::Knight, PieceKind::Pawn]
            .into_iter()
            .collect();
        assert_eq!(set, KindSet::PAWN | KindSet::KNIGHT);
        assert!(set.has(PieceKind::Pawn));
        assert!(!set.has(PieceKind::King));
        assert_eq!(
            set.kinds().collect::<Vec<_>>(),
            vec![PieceKind::Knight, PieceKind::Pawn]
        );
        assert_eq!(set.to_string(), "{Knight, Pawn}");
        assert_eq!(KindSet::empty().to_string(), "{}");
        assert_eq!(
            PieceKind::ALL.into_iter().collect::<KindSet>(),
            KindSet::all()
        );
    }

    #[test]
    fn primitive_size() {
        assert_eq!(size_of::<Square>(), 1);
        assert_eq!(size_of::<PieceKind>(), size_of::<Option<PieceKind>>());
        let dice: [Option<PieceKind>; 3] = [None; 3];
        assert_eq!(size_of_val(&dice), 3);
    }
}
