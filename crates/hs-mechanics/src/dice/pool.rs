//! Dice pool rolling.

use super::DieSource;
use super::roll::RollResult;

/// A number of d6s to be rolled together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DicePool {
    /// How many dice are in the pool.
    pub size: u32,
}

impl DicePool {
    /// Create a pool of `size` dice.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Roll every die in the pool.
    pub fn roll<D: DieSource + ?Sized>(&self, dice: &mut D) -> RollResult {
        RollResult {
            faces: (0..self.size).map(|_| dice.roll_d6()).collect(),
        }
    }
}

/// Roll `n` dice.
pub fn roll<D: DieSource + ?Sized>(n: u32, dice: &mut D) -> RollResult {
    DicePool::new(n).roll(dice)
}
