//! Roll sources.
//!
//! Engines never call an RNG directly; they pull rolls from a [`Dice`]. The
//! driver uses [`FairDice`], tests script exact sequences with [`LoadedDice`].

use crate::constants::{DIE_MAX, DIE_MIN};
use crate::error::GameError;

/// Anything that produces die rolls.
pub trait Dice {
    fn roll(&mut self) -> u8;
}

/// Validate a die value.
#[inline]
pub fn check_roll(roll: u8) -> Result<u8, GameError> {
    if (DIE_MIN..=DIE_MAX).contains(&roll) {
        Ok(roll)
    } else {
        Err(GameError::InvalidRoll(roll))
    }
}

/// A fair six-sided die.
pub struct FairDice {
    rng: fastrand::Rng,
}

impl Default for FairDice {
    fn default() -> Self {
        Self::new()
    }
}

impl FairDice {
    /// Seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Dice for FairDice {
    #[inline]
    fn roll(&mut self) -> u8 {
        self.rng.u8(DIE_MIN..=DIE_MAX)
    }
}

/// Replays a fixed script of rolls, starting over when it runs out.
///
/// Values are not checked here so that engines can be fed bad rolls.
#[derive(Clone, Debug)]
pub struct LoadedDice {
    script: Vec<u8>,
    cursor: usize,
}

impl LoadedDice {
    /// Panics on an empty script.
    pub fn new(script: Vec<u8>) -> Self {
        assert!(!script.is_empty(), "loaded dice need at least one roll");
        Self { script, cursor: 0 }
    }

    /// Number of rolls handed out so far.
    pub fn rolled(&self) -> usize {
        self.cursor
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> u8 {
        let r = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        r
    }
}
