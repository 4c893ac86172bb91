//! Randomock Dice — dice that draw from an injected `Randomizer`.
//!
//! Production code builds a `Dice` over `ThreadRandomizer`; tests build it
//! over a scripted randomizer and register values under [`ROLL_KEY`].

use randomock_core::Randomizer;
use thiserror::Error;

/// Key every roll is drawn under.
pub const ROLL_KEY: &str = "roll";

/// Dice construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A die must have at least one side.
    #[error("a die needs at least one side, got {0}")]
    NoSides(isize),
}

/// A die with faces `1..=sides`.
#[derive(Debug)]
pub struct Dice<R> {
    sides: isize,
    rng: R,
}

impl<R: Randomizer> Dice<R> {
    /// Create a die with `sides` faces backed by `rng`.
    ///
    /// # Errors
    ///
    /// Returns `DiceError::NoSides` if `sides` is zero or negative.
    pub fn new(sides: isize, rng: R) -> Result<Self, DiceError> {
        if sides <= 0 {
            return Err(DiceError::NoSides(sides));
        }
        Ok(Self { sides, rng })
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> isize {
        self.sides
    }

    /// Rolls once. The randomizer picks a face index in `[0, sides)` under
    /// [`ROLL_KEY`]; the face shown is that index plus one.
    pub fn roll(&mut self) -> isize {
        let face = self.rng.int_below(ROLL_KEY, self.sides) + 1;
        tracing::debug!(face, sides = self.sides, "rolled");
        face
    }

    /// Rolls `count` times.
    pub fn roll_many(&mut self, count: usize) -> Vec<isize> {
        (0..count).map(|_| self.roll()).collect()
    }

    /// Gives back the randomizer.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}
