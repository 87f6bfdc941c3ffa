//! Chess variant where three dice decide which kinds of pieces may move each
//! turn. There is no check or checkmate: the game ends once a king is
//! captured.
//!
//! The crate is split into the chess primitives ([`chess`]), the turn state
//! machine driven by the dice ([`game`]) and a line-based terminal front-end
//! ([`interface`]).
//!
//! ```
//! use dicechess::chess::core::{Player, Square};
//! use dicechess::game::dice::LoadedDice;
//! use dicechess::game::{Game, Phase};
//!
//! let mut game = Game::with_dice(LoadedDice::try_from("p").unwrap());
//! game.roll_dice();
//! game.select_or_move(Square::E2);
//! game.select_or_move(Square::E4);
//! // Pawn was the only kind thrown, so the turn passes to Black.
//! assert_eq!(game.turn(), Player::Black);
//! assert_eq!(game.phase(), Phase::AwaitingRoll);
//! ```

pub mod chess;
pub mod game;
pub mod interface;

use shadow_rs::shadow;

shadow!(build);

/// Returns the full version that can be used to identify how the binary was
/// built.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}
