//! Text commands understood by the terminal front-end.

use crate::chess::core::Square;

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Throw the dice.
    Roll,
    /// Click on a square: select a piece, pick its destination or deselect.
    Click(Square),
    /// Plays a move in one line, e.g. `e2e4`, dropping any other selection
    /// first.
    Move {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
    },
    /// Start over from the initial position.
    Restart,
    /// Render the current state again.
    Show,
    /// Print the list of commands.
    Help,
    /// Leave the game.
    Quit,
    /// Anything else. The input is kept to report it back.
    Unknown(String),
}

impl Command {
    /// Parses a line of input. Case and surrounding whitespace are ignored,
    /// an empty line simply shows the board again.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_ascii_lowercase();
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] | ["board" | "d"] => Self::Show,
            ["roll" | "r"] => Self::Roll,
            ["restart" | "new"] => Self::Restart,
            ["help" | "h" | "?"] => Self::Help,
            ["quit" | "exit" | "q"] => Self::Quit,
            ["click", square] => {
                parse_click(square).unwrap_or_else(|| Self::Unknown(line.clone()))
            },
            [token] => parse_click(token)
                .or_else(|| parse_move(token))
                .unwrap_or_else(|| Self::Unknown(line.clone())),
            _ => Self::Unknown(line.clone()),
        }
    }
}

fn parse_click(token: &str) -> Option<Command> {
    Square::try_from(token).ok().map(Command::Click)
}

fn parse_move(token: &str) -> Option<Command> {
    if token.len() != 4 || !token.is_ascii() {
        return None;
    }
    let (from, to) = token.split_at(2);
    Some(Command::Move {
        from: Square::try_from(from).ok()?,
        to: Square::try_from(to).ok()?,
    })
}

/// Reference printed by the `help` command.
pub const HELP: &str = "\
Commands:
  roll, r          throw the dice
  e2, click e2     click a square: select a piece, move it or deselect
  e2e4             click e2, then e4
  restart, new     start a new game
  board, d         show the board again
  help, h          show this message
  quit, q          leave the game";
