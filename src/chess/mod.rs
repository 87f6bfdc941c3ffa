//! Chess primitives shared by the dice chess rules: squares, pieces, the board
//! and destination generation for each piece kind.

pub mod bitboard;
pub mod board;
pub mod core;
pub mod movegen;
