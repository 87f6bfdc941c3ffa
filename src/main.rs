use std::io;

use anyhow::Context;
use clap::Parser;
use dicechess::game::dice::{Dice, LoadedDice, RandomDice};
use dicechess::game::Game;
use dicechess::interface::theme::Theme;
use dicechess::interface::Terminal;

/// Plays dice chess in the terminal. Each turn starts with a throw of three
/// dice, and only the kinds of pieces shown on them may move. Capture the
/// opponent's king to win.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Seed for the dice to make the throws reproducible.
    #[arg(long, conflicts_with = "dice")]
    seed: Option<u64>,
    /// Load the dice with a fixed sequence of faces given as piece symbols
    /// (k, q, r, b, n, p), repeated over and over.
    #[arg(long)]
    dice: Option<String>,
    /// Draw the pieces with Unicode chess symbols.
    #[arg(long, conflicts_with = "glyphs")]
    unicode: bool,
    /// Draw the pieces with custom glyphs given in "KQRBNPkqrbnp" order.
    #[arg(long)]
    glyphs: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::parse();

    let dice: Box<dyn Dice> = match (config.dice.as_deref(), config.seed) {
        (Some(faces), _) => Box::new(
            LoadedDice::try_from(faces)
                .with_context(|| format!("invalid dice faces: {faces:?}"))?,
        ),
        (None, Some(seed)) => Box::new(RandomDice::seeded(seed)),
        (None, None) => Box::new(RandomDice::from_entropy()),
    };
    let theme = match config.glyphs.as_deref() {
        Some(glyphs) => {
            Theme::try_from(glyphs).with_context(|| format!("invalid glyphs: {glyphs:?}"))?
        },
        None if config.unicode => Theme::unicode(),
        None => Theme::ascii(),
    };
    log::debug!("Starting with {config:?}");

    let mut terminal = Terminal::new(
        Game::with_dice(dice),
        theme,
        io::stdin().lock(),
        io::stdout().lock(),
    );
    terminal.run()
}
