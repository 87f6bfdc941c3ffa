//! Sources of dice throws. Every die has six faces, one per [`PieceKind`].

use anyhow::bail;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess::core::PieceKind;

/// Number of dice thrown at the start of each turn.
pub const DICE_COUNT: usize = 3;

/// Outcome of each die for the current turn, [`None`] while the dice are not
/// thrown.
pub type DiceResults = [Option<PieceKind>; DICE_COUNT];

/// Produces one die throw at a time.
pub trait Dice {
    /// Throws a single die.
    fn roll(&mut self) -> PieceKind;
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> PieceKind {
        (**self).roll()
    }
}

/// Fair dice: each face has the same probability.
#[derive(Debug)]
pub struct RandomDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    /// Throws the dice using given random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDice<StdRng> {
    /// Creates dice that produce the same sequence of throws for the same
    /// seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates dice seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Dice that repeat a fixed sequence of faces over and over. Handy for
/// replaying a game or setting up a specific situation.
///
/// ```
/// use dicechess::chess::core::PieceKind;
/// use dicechess::game::dice::{Dice, LoadedDice};
///
/// let mut dice = LoadedDice::try_from("pn").unwrap();
/// assert_eq!(dice.roll(), PieceKind::Pawn);
/// assert_eq!(dice.roll(), PieceKind::Knight);
/// assert_eq!(dice.roll(), PieceKind::Pawn);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedDice {
    faces: Vec<PieceKind>,
    next: usize,
}

impl LoadedDice {
    /// Creates dice cycling through the given faces.
    ///
    /// # Errors
    ///
    /// If the sequence of faces is empty.
    pub fn new(faces: impl IntoIterator<Item = PieceKind>) -> anyhow::Result<Self> {
        let faces: Vec<PieceKind> = faces.into_iter().collect();
        if faces.is_empty() {
            bail!("loaded dice need at least one face");
        }
        Ok(Self { faces, next: 0 })
    }
}

impl TryFrom<&str> for LoadedDice {
    type Error = anyhow::Error;

    /// Parses the faces from piece symbols (e.g. "ppn"), ignoring the case.
    /// Whitespace and commas between symbols are allowed.
    fn try_from(symbols: &str) -> anyhow::Result<Self> {
        let faces = symbols
            .chars()
            .filter(|symbol| !symbol.is_whitespace() && *symbol != ',')
            .map(PieceKind::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Self::new(faces)
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> PieceKind {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}
