//! Glyphs used to draw the pieces.

use std::collections::HashMap;

use anyhow::bail;
use itertools::iproduct;
use log::warn;

use crate::chess::core::{Piece, PieceKind, Player};

/// Order of the glyphs accepted by [`Theme::try_from`]: White pieces first,
/// then Black ones, each in [`PieceKind::ALL`] order.
pub const GLYPH_ORDER: &str = "KQRBNPkqrbnp";

/// Drawn in place of a piece that has no glyph.
pub const MISSING_GLYPH: char = '?';

/// Maps each (owner, kind) pair to a printable character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    glyphs: HashMap<(Player, PieceKind), char>,
}

impl Theme {
    /// Letters of the FEN notation: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn ascii() -> Self {
        Self::from_glyphs(GLYPH_ORDER.chars())
    }

    /// Chess symbols of the Unicode standard.
    #[must_use]
    pub fn unicode() -> Self {
        Self::from_glyphs("♔♕♖♗♘♙♚♛♜♝♞♟".chars())
    }

    fn from_glyphs(glyphs: impl Iterator<Item = char>) -> Self {
        let keys = iproduct!([Player::White, Player::Black], PieceKind::ALL);
        Self {
            glyphs: keys.zip(glyphs).collect(),
        }
    }

    /// Returns the glyph of the piece. A piece without one is reported and
    /// drawn as [`MISSING_GLYPH`] so that the board can still be rendered.
    #[must_use]
    pub fn glyph(&self, piece: &Piece) -> char {
        self.glyphs
            .get(&(piece.owner(), piece.kind()))
            .copied()
            .unwrap_or_else(|| {
                warn!("No glyph for {} {}", piece.owner(), piece.kind());
                MISSING_GLYPH
            })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::ascii()
    }
}

impl TryFrom<&str> for Theme {
    type Error = anyhow::Error;

    /// Reads the glyphs in [`GLYPH_ORDER`]. A shorter string leaves the
    /// trailing pieces without glyphs.
    fn try_from(glyphs: &str) -> anyhow::Result<Self> {
        let count = glyphs.chars().count();
        if count > GLYPH_ORDER.len() {
            bail!(
                "expected at most {} glyphs in \"{GLYPH_ORDER}\" order, got {count}",
                GLYPH_ORDER.len()
            );
        }
        if let Some(blank) = glyphs.chars().find(|glyph| glyph.is_whitespace()) {
            bail!("glyphs should be printable, got {blank:?}");
        }
        Ok(Self::from_glyphs(glyphs.chars()))
    }
}
