//! The dice chess turn state machine.
//!
//! Each turn starts with a throw of three dice. Every die shows a
//! [`PieceKind`], and the player may move one piece of each kind shown
//! (duplicates do not grant extra moves). The turn passes to the opponent once
//! every granted kind was used or none of the remaining ones can move. The
//! game ends as soon as a king is captured.
//!
//! [`Game`] is driven by three commands: [`Game::roll_dice`],
//! [`Game::select_or_move`] and [`Game::restart`]. Commands that make no sense
//! in the current [`Phase`] are ignored: they are ordinary user missteps, not
//! errors. After every command, the front-end is expected to query the state
//! and re-render it.

use log::{debug, info};

use crate::chess::bitboard::Bitboard;
use crate::chess::board::Board;
use crate::chess::core::{KindSet, Piece, PieceKind, Player, Square};
use crate::chess::movegen::{can_move, legal_moves};

pub mod dice;

use dice::{Dice, DiceResults, RandomDice, DICE_COUNT};

/// Where the game is in the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The player to move has to throw the dice.
    AwaitingRoll,
    /// The dice are thrown, no piece is selected.
    AwaitingSelection,
    /// A piece is selected and its legal destinations are known.
    AwaitingDestination,
    /// A king was captured. Only [`Game::restart`] has any effect.
    GameOver,
}

/// Rule engine owning the board and the state of the current turn.
#[derive(Debug)]
pub struct Game<D: Dice = RandomDice<rand::rngs::StdRng>> {
    board: Board,
    turn: Player,
    dice: D,
    dice_rolled: bool,
    dice_results: DiceResults,
    usable: KindSet,
    selected: Option<Square>,
    destinations: Bitboard,
    winner: Option<Player>,
}

impl Game {
    /// Starts a new game with fair dice seeded from the system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dice(RandomDice::from_entropy())
    }

    /// Starts a new game with fair dice producing the same throws for the
    /// same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_dice(RandomDice::seeded(seed))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dice> Game<D> {
    /// Starts a new game from the standard layout.
    pub fn with_dice(dice: D) -> Self {
        Self::from_board(Board::starting(), Player::White, dice)
    }

    /// Starts a game from an arbitrary position with `turn` to throw the dice.
    /// [`Game::restart`] still goes back to the standard layout.
    pub fn from_board(board: Board, turn: Player, dice: D) -> Self {
        debug_assert!(board.is_consistent());
        Self {
            board,
            turn,
            dice,
            dice_rolled: false,
            dice_results: [None; DICE_COUNT],
            usable: KindSet::empty(),
            selected: None,
            destinations: Bitboard::empty(),
            winner: None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The player who is to throw the dice or move.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn dice_rolled(&self) -> bool {
        self.dice_rolled
    }

    /// Outcomes of the three dice thrown this turn, unset before the throw.
    #[must_use]
    pub const fn dice_results(&self) -> DiceResults {
        self.dice_results
    }

    /// Kinds that can still be moved this turn.
    #[must_use]
    pub const fn usable_kinds(&self) -> KindSet {
        self.usable
    }

    /// The selected piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.and_then(|square| self.board.at(square))
    }

    /// Legal destinations of the selected piece, empty without selection.
    #[must_use]
    pub const fn destinations(&self) -> Bitboard {
        self.destinations
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The player who captured the opponent's king.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Human-readable announcement of the winner once the game is over.
    #[must_use]
    pub fn victory_message(&self) -> Option<String> {
        self.winner
            .map(|winner| format!("{winner} captured the king!"))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::GameOver
        } else if !self.dice_rolled {
            Phase::AwaitingRoll
        } else if self.selected.is_some() {
            Phase::AwaitingDestination
        } else {
            Phase::AwaitingSelection
        }
    }

    /// Returns true if the square holds a piece that may be selected this
    /// turn: it belongs to the player to move and the dice granted its kind.
    #[must_use]
    pub fn is_playable(&self, square: Square) -> bool {
        self.board
            .at(square)
            .is_some_and(|piece| self.may_move(piece))
    }

    /// Throws the dice for the player to move. Ignored unless the game is in
    /// [`Phase::AwaitingRoll`].
    ///
    /// If none of the pieces of the thrown kinds can move, the turn passes to
    /// the opponent right away.
    pub fn roll_dice(&mut self) {
        if self.phase() != Phase::AwaitingRoll {
            debug!("Ignoring dice roll in {:?}", self.phase());
            return;
        }
        for result in &mut self.dice_results {
            *result = Some(self.dice.roll());
        }
        self.usable = self.dice_results.iter().flatten().copied().collect();
        self.dice_rolled = true;
        info!("{} rolled {}", self.turn, self.usable);

        if !self.can_play_any() {
            info!("{} has no playable piece, passing the turn", self.turn);
            self.end_turn();
        }
    }

    /// Handles a click on the square: selects a playable piece, moves the
    /// selected piece to one of its legal destinations, refreshes the
    /// selection when clicking the selected piece again, or drops the
    /// selection otherwise. Ignored before the dice are thrown and after the
    /// game is over.
    pub fn select_or_move(&mut self, square: Square) {
        match self.phase() {
            Phase::AwaitingRoll | Phase::GameOver => {
                debug!("Ignoring click on {square} in {:?}", self.phase());
            },
            Phase::AwaitingSelection => self.select(square),
            Phase::AwaitingDestination => {
                let Some(from) = self.selected else {
                    return;
                };
                if self.destinations.contains(square) {
                    self.clear_selection();
                    self.apply_move(from, square);
                } else if square == from {
                    self.refresh_selection();
                } else {
                    debug!("Deselecting piece on {from}");
                    self.clear_selection();
                }
            },
        }
    }

    /// Drops the current selection, if any. Ignored after the game is over.
    pub fn deselect(&mut self) {
        if let Some(from) = self.selected.filter(|_| !self.is_over()) {
            debug!("Deselecting piece on {from}");
            self.clear_selection();
        }
    }

    /// Goes back to the standard layout with White to throw the dice. The
    /// dice source is kept.
    pub fn restart(&mut self) {
        info!("Restarting the game");
        self.board = Board::starting();
        self.turn = Player::White;
        self.dice_rolled = false;
        self.dice_results = [None; DICE_COUNT];
        self.usable = KindSet::empty();
        self.clear_selection();
        self.winner = None;
    }

    fn may_move(&self, piece: &Piece) -> bool {
        piece.owner() == self.turn && self.usable.has(piece.kind())
    }

    fn select(&mut self, square: Square) {
        if !self.is_playable(square) {
            debug!("Square {square} holds no playable piece");
            return;
        }
        self.selected = Some(square);
        self.refresh_selection();
        debug!(
            "Selected {square}, destinations: {:?}",
            self.destinations.iter().collect::<Vec<_>>()
        );
    }

    fn refresh_selection(&mut self) {
        self.destinations = self
            .selected()
            .map_or_else(Bitboard::empty, |piece| legal_moves(piece, &self.board));
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.destinations = Bitboard::empty();
    }

    fn apply_move(&mut self, from: Square, to: Square) {
        let Some(kind) = self.board.at(from).map(Piece::kind) else {
            return;
        };
        let captured = self.board.relocate(from, to);
        debug_assert!(self.board.is_consistent());
        match &captured {
            Some(piece) => info!(
                "{} {kind} {from}x{to} captures {}",
                self.turn,
                piece.kind()
            ),
            None => info!("{} {kind} {from}-{to}", self.turn),
        }

        if captured.is_some_and(|piece| piece.kind() == PieceKind::King) {
            self.winner = Some(self.turn);
            info!("Game over: {} won", self.turn);
            return;
        }

        self.usable.remove(KindSet::from(kind));
        if self.usable.is_empty() || !self.can_play_any() {
            self.end_turn();
        }
    }

    fn end_turn(&mut self) {
        if self.is_over() {
            return;
        }
        self.turn = !self.turn;
        self.dice_rolled = false;
        self.dice_results = [None; DICE_COUNT];
        self.usable = KindSet::empty();
        self.clear_selection();
        info!("Turn passes to {}", self.turn);
    }

    /// Kinds that were drawn but have no pieces left (or none that can move)
    /// simply do not count.
    fn can_play_any(&self) -> bool {
        self.board
            .pieces_of(self.turn)
            .any(|piece| self.may_move(piece) && can_move(piece, &self.board))
    }
}
