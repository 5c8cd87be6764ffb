//! Dice pool calculation.
//!
//! A side's pool is its debater's base rating plus the stance bonus,
//! event card effects, signed modifiers, and free bonus dice. However
//! negative the total, a side always rolls at least [`MIN_POOL`] dice, and
//! never more than [`MAX_POOL`].

pub mod event;

pub use event::{EventCard, EventEffect};

use serde::{Deserialize, Serialize};

/// The smallest pool a side can roll.
pub const MIN_POOL: u32 = 1;

/// The largest pool a side can roll.
pub const MAX_POOL: u32 = 40;

/// Dice granted for attacking or defending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceBonuses {
    /// Bonus for the attacking side.
    pub attacker: i32,
    /// Bonus for a defender not yet used this round.
    pub defender_fresh: i32,
    /// Bonus for a defender already committed this round.
    pub defender_committed: i32,
}

impl Default for StanceBonuses {
    fn default() -> Self {
        Self {
            attacker: 3,
            defender_fresh: 2,
            defender_committed: 1,
        }
    }
}

impl StanceBonuses {
    /// No stance bonuses at all.
    pub fn none() -> Self {
        Self {
            attacker: 0,
            defender_fresh: 0,
            defender_committed: 0,
        }
    }

    /// The bonus for a given stance.
    pub fn bonus(&self, stance: Stance) -> i32 {
        match stance {
            Stance::Attacking => self.attacker,
            Stance::Defending { committed: false } => self.defender_fresh,
            Stance::Defending { committed: true } => self.defender_committed,
            Stance::Neutral => 0,
        }
    }
}

/// A side's role in the debate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    /// The side that called the debate.
    Attacking,
    /// The side that was challenged.
    Defending {
        /// Whether the defender was already committed this round.
        committed: bool,
    },
    /// No attacker was declared.
    #[default]
    Neutral,
}

/// Situational adjustments for one side of one debate.
#[derive(Debug, Clone, Default)]
pub struct PoolModifiers {
    /// Attacking, defending, or neither.
    pub stance: Stance,
    /// Event cards that apply to this side, already evaluated.
    pub events: Vec<(EventCard, EventEffect)>,
    /// Free signed modifier.
    pub modifier: i32,
    /// Signed bonus for adjacent friendly spaces.
    pub adjacency: i32,
    /// Extra dice granted outside the listed effects.
    pub bonus_dice: u32,
}

impl PoolModifiers {
    /// No modifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stance.
    pub fn with_stance(mut self, stance: Stance) -> Self {
        self.stance = stance;
        self
    }

    /// Add an evaluated event effect.
    pub fn with_event(mut self, card: EventCard, effect: EventEffect) -> Self {
        self.events.push((card, effect));
        self
    }

    /// Set the free signed modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set the adjacency bonus.
    pub fn with_adjacency(mut self, adjacency: i32) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Set the free bonus dice.
    pub fn with_bonus_dice(mut self, bonus_dice: u32) -> Self {
        self.bonus_dice = bonus_dice;
        self
    }
}

/// Where a pool adjustment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolSource {
    /// The side's stance.
    Stance(Stance),
    /// A played event card.
    Event(EventCard),
    /// The free signed modifier.
    Modifier,
    /// The adjacency bonus.
    Adjacency,
    /// Free bonus dice.
    BonusDice,
}

impl std::fmt::Display for PoolSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stance(Stance::Attacking) => write!(f, "attacking"),
            Self::Stance(Stance::Defending { committed: false }) => write!(f, "defending"),
            Self::Stance(Stance::Defending { committed: true }) => {
                write!(f, "defending (committed)")
            }
            Self::Stance(Stance::Neutral) => write!(f, "neutral"),
            Self::Event(card) => write!(f, "{card}"),
            Self::Modifier => write!(f, "modifier"),
            Self::Adjacency => write!(f, "adjacency bonus"),
            Self::BonusDice => write!(f, "bonus dice"),
        }
    }
}

/// One line of a pool calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolContribution {
    /// What produced the adjustment.
    pub source: PoolSource,
    /// Dice added (negative for dice removed).
    pub dice: i32,
}

/// A computed pool and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolBreakdown {
    /// The debater's base rating.
    pub base: u32,
    /// Every non-zero adjustment, in application order.
    pub contributions: Vec<PoolContribution>,
    /// Dice actually rolled.
    pub size: u32,
}

impl PoolBreakdown {
    /// The total before the minimum-pool floor.
    pub fn raw_total(&self) -> i64 {
        i64::from(self.base)
            + self
                .contributions
                .iter()
                .map(|c| i64::from(c.dice))
                .sum::<i64>()
    }

    /// Whether the floor raised the pool or the ceiling lowered it.
    pub fn was_clamped(&self) -> bool {
        self.raw_total() != i64::from(self.size)
    }
}

/// Computes pool sizes under a set of stance bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolCalculator {
    bonuses: StanceBonuses,
}

impl PoolCalculator {
    /// A calculator using the given stance bonuses.
    pub fn new(bonuses: StanceBonuses) -> Self {
        Self { bonuses }
    }

    /// Compute a pool from a base rating and modifiers.
    pub fn compute(&self, base: u32, modifiers: &PoolModifiers) -> PoolBreakdown {
        let mut contributions = Vec::new();
        let mut push = |source: PoolSource, dice: i32| {
            if dice != 0 {
                contributions.push(PoolContribution { source, dice });
            }
        };

        push(
            PoolSource::Stance(modifiers.stance),
            self.bonuses.bonus(modifiers.stance),
        );
        for &(card, effect) in &modifiers.events {
            let dice = match effect {
                EventEffect::Dice(n) => n,
                EventEffect::DoubleRating => i32::try_from(base).unwrap_or(i32::MAX),
            };
            push(PoolSource::Event(card), dice);
        }
        push(PoolSource::Modifier, modifiers.modifier);
        push(PoolSource::Adjacency, modifiers.adjacency);
        push(
            PoolSource::BonusDice,
            i32::try_from(modifiers.bonus_dice).unwrap_or(i32::MAX),
        );

        let mut breakdown = PoolBreakdown {
            base,
            contributions,
            size: MIN_POOL,
        };
        let raw = breakdown.raw_total();
        let clamped = raw.clamp(i64::from(MIN_POOL), i64::from(MAX_POOL));
        breakdown.size = u32::try_from(clamped).unwrap_or(MAX_POOL);
        tracing::debug!(base, raw, size = breakdown.size, "pool computed");
        breakdown
    }
}

/// Pool size for `base` under the default stance bonuses.
pub fn compute_pool(base: u32, modifiers: &PoolModifiers) -> u32 {
    PoolCalculator::default().compute(base, modifiers).size
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn attacker_and_defender_bonuses() {
        let attack = PoolModifiers::new().with_stance(Stance::Attacking);
        let fresh = PoolModifiers::new().with_stance(Stance::Defending { committed: false });
        let tired = PoolModifiers::new().with_stance(Stance::Defending { committed: true });
        assert_eq!(compute_pool(4, &attack), 7);
        assert_eq!(compute_pool(3, &fresh), 5);
        assert_eq!(compute_pool(3, &tired), 4);
        assert_eq!(compute_pool(3, &PoolModifiers::new()), 3);
    }

    #[test]
    fn events_and_bonuses_stack() {
        let mods = PoolModifiers::new()
            .with_stance(Stance::Defending { committed: false })
            .with_event(EventCard::ThomasMore, EventEffect::Dice(1))
            .with_event(EventCard::PapalInquisition, EventEffect::Dice(1))
            .with_event(EventCard::AugsburgConfession, EventEffect::Dice(-1))
            .with_bonus_dice(2);
        let breakdown = PoolCalculator::default().compute(3, &mods);
        assert_eq!(breakdown.size, 3 + 2 + 1 + 1 - 1 + 2);
        assert_eq!(breakdown.contributions.len(), 5);
        assert!(!breakdown.was_clamped());
    }

    #[test]
    fn double_rating_adds_base_again() {
        let mods = PoolModifiers::new().with_event(EventCard::MaryI, EventEffect::DoubleRating);
        let breakdown = PoolCalculator::default().compute(3, &mods);
        assert_eq!(breakdown.size, 6);
        assert_eq!(
            breakdown.contributions,
            vec![PoolContribution {
                source: PoolSource::Event(EventCard::MaryI),
                dice: 3
            }]
        );
    }

    #[test]
    fn negative_total_floors_to_one() {
        let mods = PoolModifiers::new().with_modifier(-5).with_adjacency(-3);
        let breakdown = PoolCalculator::default().compute(1, &mods);
        assert_eq!(breakdown.raw_total(), -7);
        assert_eq!(breakdown.size, 1);
        assert!(breakdown.was_clamped());
    }

    #[test]
    fn zero_rating_still_rolls_one() {
        assert_eq!(compute_pool(0, &PoolModifiers::new()), 1);
    }

    #[test]
    fn huge_bonus_is_capped() {
        let mods = PoolModifiers::new()
            .with_stance(Stance::Attacking)
            .with_bonus_dice(4_000_000_000);
        let breakdown = PoolCalculator::default().compute(u32::MAX, &mods);
        assert_eq!(breakdown.size, MAX_POOL);
        assert!(breakdown.was_clamped());
        assert!(breakdown.raw_total() > i64::from(MAX_POOL));
    }

    #[test]
    fn no_stance_bonuses() {
        let calc = PoolCalculator::new(StanceBonuses::none());
        let mods = PoolModifiers::new().with_stance(Stance::Attacking);
        let breakdown = calc.compute(4, &mods);
        assert_eq!(breakdown.size, 4);
        assert!(breakdown.contributions.is_empty());
    }

    #[test]
    fn source_display() {
        assert_eq!(PoolSource::Stance(Stance::Attacking).to_string(), "attacking");
        assert_eq!(
            PoolSource::Stance(Stance::Defending { committed: true }).to_string(),
            "defending (committed)"
        );
        assert_eq!(
            PoolSource::Event(EventCard::PrintingPress).to_string(),
            "Printing Press"
        );
    }

    proptest! {
        #[test]
        fn pool_never_below_one(
            base in 0u32..10,
            modifier in -50i32..50,
            adjacency in -50i32..50,
            bonus in 0u32..10,
            augsburg in any::<bool>(),
        ) {
            let mut mods = PoolModifiers::new()
                .with_modifier(modifier)
                .with_adjacency(adjacency)
                .with_bonus_dice(bonus);
            if augsburg {
                mods = mods.with_event(EventCard::AugsburgConfession, EventEffect::Dice(-1));
            }
            prop_assert!(compute_pool(base, &mods) >= MIN_POOL);
        }

        #[test]
        fn pool_never_above_max(base in 0u32..1000, bonus in 0u32..1_000_000) {
            let mods = PoolModifiers::new()
                .with_stance(Stance::Attacking)
                .with_bonus_dice(bonus);
            prop_assert!(compute_pool(base, &mods) <= MAX_POOL);
        }
    }
}
