//! Line-based terminal front-end. It reads commands from the input stream,
//! forwards them to the [`Game`] and draws the resulting state after each one.
//!
//! The rule engine never fails on user missteps, so the loop only stops on
//! `quit`, at the end of the input or on an I/O error.

use std::io::{BufRead, Write};

use log::debug;

use crate::game::dice::Dice;
use crate::game::Game;

pub mod command;
pub mod theme;
pub mod view;

use command::{Command, HELP};
use theme::Theme;
use view::View;

/// Connects the game with the input and output streams.
pub struct Terminal<R: BufRead, W: Write, D: Dice> {
    game: Game<D>,
    theme: Theme,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, D: Dice> Terminal<R, W, D> {
    /// Creates the front-end for the given game, drawing the pieces with the
    /// theme.
    pub const fn new(game: Game<D>, theme: Theme, input: R, output: W) -> Self {
        Self {
            game,
            theme,
            input,
            output,
        }
    }

    /// Reads and executes commands until `quit` or the end of the input.
    ///
    /// # Errors
    ///
    /// If reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Dice chess {}", crate::version())?;
        writeln!(self.output, "Type `help` for the list of commands.")?;
        self.draw()?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match Command::parse(&line) {
                Command::Roll => self.game.roll_dice(),
                Command::Click(square) => self.game.select_or_move(square),
                Command::Move { from, to } => {
                    if self
                        .game
                        .selected()
                        .is_some_and(|piece| piece.square() != from)
                    {
                        self.game.deselect();
                    }
                    if self.game.selected().is_none() {
                        self.game.select_or_move(from);
                    }
                    self.game.select_or_move(to);
                },
                Command::Restart => self.game.restart(),
                Command::Show => {},
                Command::Help => {
                    writeln!(self.output, "{HELP}")?;
                    continue;
                },
                Command::Quit => break,
                Command::Unknown(command) => {
                    debug!("Unknown command: {command}");
                    writeln!(self.output, "Unknown command: {command}")?;
                    writeln!(self.output, "Type `help` for the list of commands.")?;
                    continue;
                },
            }
            self.draw()?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        write!(self.output, "\n{}", View::new(&self.game, &self.theme))?;
        self.output.flush()?;
        Ok(())
    }
}
