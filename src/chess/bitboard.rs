//! [`Bitboard`] is a compact set of squares. The move generator uses it to
//! report legal destinations, and the game keeps the destinations of the
//! selected piece in it.
//!
//! [Bitboard]: https://www.chessprogramming.org/Bitboards

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};

use itertools::Itertools;

use crate::chess::core::{Square, BOARD_SIZE, BOARD_WIDTH};

/// Represents a set of squares and provides common operations (e.g. AND, OR)
/// over these sets. Each bit corresponds to one of 64 squares of the chess
/// board.
///
/// Mirroring [`Square`] semantics, the least significant bit corresponds to
/// A1, and the most significant bit - to H8.
///
/// ```
/// use dicechess::chess::bitboard::Bitboard;
/// use dicechess::chess::core::Square;
///
/// let squares = Bitboard::from_squares(&[Square::E3, Square::E4]);
/// assert!(squares.contains(Square::E4));
/// assert!(!squares.contains(Square::E5));
/// assert_eq!(squares.iter().collect::<Vec<_>>(), vec![Square::E3, Square::E4]);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Constructs Bitboard from pre-calculated bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Constructs a bitboard representing empty set of squares.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn from_squares(squares: &[Square]) -> Self {
        squares.iter().copied().collect()
    }

    /// Returns true if this bitboard contains given square.
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        (self.bits & (1u64 << square as u8)) != 0
    }

    /// Adds the square to the set.
    pub fn insert(&mut self, square: Square) {
        *self |= Self::from(square);
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of squares in the set.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// An efficient way to iterate over the set squares, from A1 to H8.
    #[must_use]
    pub const fn iter(self) -> BitboardIterator {
        BitboardIterator { bits: self.bits }
    }
}

impl fmt::Debug for Bitboard {
    /// Dumps the set as a board: '1' for squares in the set, '.' otherwise,
    /// eighth rank first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..BOARD_SIZE)
            .map(|index| {
                if self.bits & (1u64 << index) == 0 {
                    '.'
                } else {
                    '1'
                }
            })
            .chunks(BOARD_WIDTH as usize)
            .into_iter()
            .map(|mut chunk| chunk.join(SQUARE_SEPARATOR))
            .collect::<Vec<String>>();
        write!(f, "{}", rows.iter().rev().join(LINE_SEPARATOR))
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl Sub for Bitboard {
    type Output = Self;

    /// Relative complement: squares of `self` that are not in `rhs`.
    fn sub(self, rhs: Self) -> Self::Output {
        self & !rhs
    }
}

impl Not for Bitboard {
    type Output = Self;

    /// Returns complement bitboard, i.e. all squares not in the set.
    fn not(self) -> Self::Output {
        Self::from_bits(!self.bits)
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Self::from_bits(1u64 << square as u8)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        squares
            .into_iter()
            .fold(Self::empty(), |set, square| set | Self::from(square))
    }
}

impl IntoIterator for Bitboard {
    type IntoIter = BitboardIterator;
    type Item = Square;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterates over set bits in [`Bitboard`] from least significant 1 bits (LS1B)
/// to most significant 1 bits (MS1B).
#[derive(Debug)]
pub struct BitboardIterator {
    bits: u64,
}

impl Iterator for BitboardIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        // Get the LS1B and consume it from the iterator.
        let next_index = self.bits.trailing_zeros();
        self.bits ^= 1 << next_index;
        // trailing_zeros() of a non-zero u64 is always in 0..64 range.
        Square::try_from(next_index as u8).ok()
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Bitboard;
    use crate::chess::core::Square;

    #[test]
    fn basics() {
        assert_eq!(std::mem::size_of::<Bitboard>(), 8);
        assert_eq!((!Bitboard::empty()).bits, u64::MAX);
        assert_eq!(Bitboard::empty().bits, u64::MIN);

        assert_eq!(Bitboard::from(Square::A1).bits, 1);
        assert_eq!(Bitboard::from(Square::B1).bits, 2);
        assert_eq!(Bitboard::from(Square::D1).bits, 8);
        assert_eq!(Bitboard::from(Square::H8).bits, 1u64 << 63);

        let mut set = Bitboard::empty();
        assert!(set.is_empty());
        set.insert(Square::C5);
        set.insert(Square::C5);
        assert_eq!(set.count(), 1);
        assert!(set.contains(Square::C5));
        assert!(!set.contains(Square::C6));
    }

    #[test]
    fn set_ops() {
        let left = Bitboard::from_squares(&[Square::A1, Square::B2, Square::C3]);
        let right = Bitboard::from_squares(&[Square::C3, Square::D4]);
        assert_eq!(
            left | right,
            Bitboard::from_squares(&[Square::A1, Square::B2, Square::C3, Square::D4])
        );
        assert_eq!(left & right, Bitboard::from(Square::C3));
        assert_eq!(
            left - right,
            Bitboard::from_squares(&[Square::A1, Square::B2])
        );
        assert_eq!(!left & right, Bitboard::from(Square::D4));
    }

    #[test]
    fn iteration_order() {
        let set = Bitboard::from_squares(&[Square::H8, Square::A1, Square::E4]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Square::A1, Square::E4, Square::H8]
        );
        assert_eq!((!Bitboard::empty()).iter().count(), 64);
        assert_eq!(Bitboard::empty().iter().next(), None);
    }

    #[test]
    fn bitboard_dump() {
        assert_eq!(
            format!(
                "{:?}",
                Bitboard::from_squares(&[Square::A1, Square::B2, Square::H8])
            ),
            ". . . . . . . 1\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . 1 . . . . . .\n\
             1 . . . . . . ."
        );
    }
}
