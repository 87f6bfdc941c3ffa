//! Text rendering of the game state.

use std::fmt::{self, Write};

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::chess::core::{File, Rank, Square};
use crate::game::dice::Dice;
use crate::game::{Game, Phase};
use crate::interface::theme::Theme;

/// Snapshot of the game drawn with the given theme.
///
/// The board is printed with rank 8 on top. Each square takes three columns:
///
/// - `[P]` is the selected piece,
/// - `(P)` is a piece that may be selected this turn,
/// - `{p}` is an opponent piece the selected one can capture,
/// - ` * ` is an empty square the selected piece can move to,
/// - ` . ` is an empty square.
///
/// The board is followed by the player to move, the dice and a hint on what
/// to do next.
pub struct View<'a, D: Dice> {
    game: &'a Game<D>,
    theme: &'a Theme,
}

impl<'a, D: Dice> View<'a, D> {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(game: &'a Game<D>, theme: &'a Theme) -> Self {
        Self { game, theme }
    }

    fn cell(&self, square: Square) -> String {
        let game = self.game;
        let is_selected = game
            .selected()
            .is_some_and(|piece| piece.square() == square);
        let is_destination = game.destinations().contains(square);
        match game.board().at(square) {
            Some(piece) => {
                let glyph = self.theme.glyph(piece);
                if is_selected {
                    format!("[{glyph}]")
                } else if is_destination {
                    format!("{{{glyph}}}")
                } else if game.is_playable(square) {
                    format!("({glyph})")
                } else {
                    format!(" {glyph} ")
                }
            },
            None if is_destination => " * ".to_string(),
            None => " . ".to_string(),
        }
    }

    /// Each die shows its kind while that kind is still usable this turn.
    fn dice(&self) -> String {
        if !self.game.dice_rolled() {
            return "not rolled".to_string();
        }
        let usable = self.game.usable_kinds();
        self.game
            .dice_results()
            .iter()
            .map(|result| match result {
                Some(kind) if usable.has(*kind) => kind.to_string(),
                _ => "-".to_string(),
            })
            .join(" | ")
    }

    fn hint(&self) -> String {
        let game = self.game;
        match game.phase() {
            Phase::AwaitingRoll => "Throw the dice with `roll`.".to_string(),
            Phase::AwaitingSelection => format!(
                "Select a piece of a kind shown on the dice: {}.",
                game.usable_kinds()
            ),
            Phase::AwaitingDestination => match game.selected() {
                Some(piece) if game.destinations().is_empty() => format!(
                    "The {} on {} has no moves, select another piece.",
                    piece.kind(),
                    piece.square()
                ),
                Some(piece) => format!(
                    "Move the {} on {} to a marked square.",
                    piece.kind(),
                    piece.square()
                ),
                None => String::new(),
            },
            Phase::GameOver => format!(
                "{} Type `restart` to play again.",
                game.victory_message().unwrap_or_default()
            ),
        }
    }
}

impl<D: Dice> fmt::Display for View<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = File::iter().map(|file| format!(" {file} ")).join("");
        let files = files.trim_end();
        writeln!(f, "  {files}")?;
        for rank in Rank::iter().rev() {
            f.write_str(&format!("{rank} "))?;
            for file in File::iter() {
                f.write_str(&self.cell(Square::new(file, rank)))?;
            }
            writeln!(f, " {rank}")?;
        }
        writeln!(f, "  {files}")?;
        writeln!(f, "Turn: {}", self.game.turn())?;
        writeln!(f, "Dice: {}", self.dice())?;
        f.write_str(&self.hint())?;
        f.write_char('\n')
    }
}
