//! Six-sided dice, pools, and rolling.
//!
//! Every die is a d6 and a face of 5 or 6 is a hit. Faces come from a
//! [`DieSource`]: [`RandomDice`] in play, [`ScriptedDice`] when a test or
//! replay needs an exact sequence.

pub mod pool;
pub mod roll;

pub use pool::{DicePool, roll};
pub use roll::RollResult;

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on a debate die.
pub const FACES: u32 = 6;

/// Lowest face that counts as a hit.
pub const HIT_THRESHOLD: u32 = 5;

/// Whether a face counts as a hit.
pub fn is_hit(face: u32) -> bool {
    face >= HIT_THRESHOLD
}

/// Anything that can produce d6 faces.
pub trait DieSource {
    /// Roll one die, returning a face in `1..=6`.
    fn roll_d6(&mut self) -> u32;
}

impl<D: DieSource + ?Sized> DieSource for Box<D> {
    fn roll_d6(&mut self) -> u32 {
        (**self).roll_d6()
    }
}

/// Uniform pseudo-random dice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    /// Dice seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Dice with a fixed seed, for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for RandomDice {
    fn roll_d6(&mut self) -> u32 {
        self.rng.random_range(1..=FACES)
    }
}

/// Dice that replay a fixed sequence of faces, starting over when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedDice {
    /// Replay `faces` in order. Faces are clamped into `1..=6`; an empty
    /// script always rolls 1.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, FACES)).collect(),
            consumed: 0,
        }
    }

    /// How many faces have been rolled so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl DieSource for ScriptedDice {
    fn roll_d6(&mut self) -> u32 {
        self.consumed += 1;
        match self.faces.pop_front() {
            Some(face) => {
                self.faces.push_back(face);
                face
            }
            None => 1,
        }
    }
}
