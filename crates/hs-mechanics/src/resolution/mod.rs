//! Debate resolution.
//!
//! Both sides roll their pools, optionally take a one-shot bonus re-roll
//! of one die per two hits, and compare hits. The side with more hits wins
//! by the difference; the policy then decides whether the loser is removed
//! from play and whether spaces convert.

use hs_core::Faction;
use serde::{Deserialize, Serialize};

use crate::dice::{DieSource, RollResult, roll};
use crate::modifiers::{MAX_POOL, MIN_POOL};
use crate::rules::{BurnRule, DebatePolicy};

/// What the engine needs to know about one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contestant {
    /// Dice to roll.
    pub pool: u32,
    /// The debater's base rating.
    pub rating: u32,
    /// Whether losing this debater has major consequences.
    pub leading_figure: bool,
}

impl Contestant {
    /// A contestant rolling `pool` dice with base rating `rating`.
    pub fn new(pool: u32, rating: u32) -> Self {
        Self {
            pool,
            rating,
            leading_figure: false,
        }
    }

    /// Mark the contestant as a leading figure.
    pub fn leading_figure(mut self) -> Self {
        self.leading_figure = true;
        self
    }
}

/// One side's dice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRoll {
    /// Dice rolled in the main roll.
    pub pool: u32,
    /// The main roll.
    pub initial: RollResult,
    /// The bonus re-roll, if one was granted and earned.
    pub reroll: Option<RollResult>,
}

impl SideRoll {
    /// Hits from the main roll.
    pub fn initial_hits(&self) -> u32 {
        self.initial.hits()
    }

    /// Hits gained from the bonus re-roll.
    pub fn bonus_hits(&self) -> u32 {
        self.reroll.as_ref().map_or(0, RollResult::hits)
    }

    /// Total hits.
    pub fn hits(&self) -> u32 {
        self.initial_hits() + self.bonus_hits()
    }
}

/// The result of one debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The Protestant dice.
    pub protestant: SideRoll,
    /// The Catholic dice.
    pub catholic: SideRoll,
    /// The side with more hits, or `None` on a tie.
    pub winner: Option<Faction>,
    /// Difference in hits.
    pub margin: u32,
    /// The loser is burned (Protestant) or disgraced (Catholic).
    pub burned: bool,
    /// The victory was decisive enough to convert spaces.
    pub flipped: bool,
    /// Spaces converted to the winner (the margin when flipped, else 0).
    pub spaces_converted: u32,
    /// The removed debater was a leading figure.
    pub leading_figure_triggered: bool,
}

impl Outcome {
    /// Whether the debate was a stand-off.
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }

    /// The losing side, if there was a winner.
    pub fn loser(&self) -> Option<Faction> {
        self.winner.map(Faction::opponent)
    }

    /// The dice of one side.
    pub fn side(&self, faction: Faction) -> &SideRoll {
        match faction {
            Faction::Protestant => &self.protestant,
            Faction::Catholic => &self.catholic,
        }
    }

    /// Total hits for one side.
    pub fn hits(&self, faction: Faction) -> u32 {
        self.side(faction).hits()
    }
}

/// Resolve a debate between two contestants.
pub fn resolve<D: DieSource + ?Sized>(
    protestant: &Contestant,
    catholic: &Contestant,
    policy: &DebatePolicy,
    dice: &mut D,
) -> Outcome {
    let protestant_initial = roll(protestant.pool.clamp(MIN_POOL, MAX_POOL), dice);
    let catholic_initial = roll(catholic.pool.clamp(MIN_POOL, MAX_POOL), dice);
    let protestant_roll = with_reroll(protestant_initial, policy.reroll.protestant, dice);
    let catholic_roll = with_reroll(catholic_initial, policy.reroll.catholic, dice);

    let protestant_hits = protestant_roll.hits();
    let catholic_hits = catholic_roll.hits();

    let mut outcome = Outcome {
        protestant: protestant_roll,
        catholic: catholic_roll,
        winner: None,
        margin: 0,
        burned: false,
        flipped: false,
        spaces_converted: 0,
        leading_figure_triggered: false,
    };

    let (winner, loser, losing_hits) = match protestant_hits.cmp(&catholic_hits) {
        std::cmp::Ordering::Equal => {
            tracing::info!(hits = protestant_hits, "debate tied");
            return outcome;
        }
        std::cmp::Ordering::Greater => (Faction::Protestant, catholic, catholic_hits),
        std::cmp::Ordering::Less => (Faction::Catholic, protestant, protestant_hits),
    };

    let margin = protestant_hits.abs_diff(catholic_hits);
    let burned_by_margin = match policy.burn_rule {
        BurnRule::Threshold => margin >= policy.burn_threshold,
        BurnRule::ExceedsLoserRating => margin > loser.rating,
    };
    let burned = burned_by_margin || (policy.zero_hits_auto_burn && losing_hits == 0);
    let flipped = margin >= policy.flip_threshold;

    outcome.winner = Some(winner);
    outcome.margin = margin;
    outcome.burned = burned;
    outcome.flipped = flipped;
    outcome.spaces_converted = if flipped { margin } else { 0 };
    outcome.leading_figure_triggered = burned && loser.leading_figure;

    tracing::info!(
        %winner,
        margin,
        burned,
        flipped,
        protestant_hits,
        catholic_hits,
        "debate resolved"
    );
    outcome
}

fn with_reroll<D: DieSource + ?Sized>(initial: RollResult, enabled: bool, dice: &mut D) -> SideRoll {
    let pool = initial.count() as u32;
    let bonus_dice = if enabled { initial.hits() / 2 } else { 0 };
    let reroll = (bonus_dice > 0).then(|| {
        let r = roll(bonus_dice, dice);
        tracing::debug!(dice = bonus_dice, hits = r.hits(), "bonus re-roll");
        r
    });
    SideRoll {
        pool,
        initial,
        reroll,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RandomDice, ScriptedDice};
    use crate::rules::preset;
    use crate::sides::Sides;

    fn scripted(faces: &[u32]) -> ScriptedDice {
        ScriptedDice::new(faces.iter().copied())
    }

    #[test]
    fn decisive_win_burns_the_loser() {
        // Protestant 7 dice with 3 hits, Catholic 5 dice with 1 hit.
        let mut dice = scripted(&[5, 6, 5, 1, 2, 3, 4, 6, 1, 2, 3, 4]);
        let outcome = resolve(
            &Contestant::new(7, 4),
            &Contestant::new(5, 3),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert_eq!(outcome.hits(Faction::Protestant), 3);
        assert_eq!(outcome.hits(Faction::Catholic), 1);
        assert_eq!(outcome.winner, Some(Faction::Protestant));
        assert_eq!(outcome.loser(), Some(Faction::Catholic));
        assert_eq!(outcome.margin, 2);
        assert!(outcome.burned);
        assert!(outcome.flipped);
        assert_eq!(outcome.spaces_converted, 2);
        assert!(!outcome.leading_figure_triggered);
    }

    #[test]
    fn tie_has_no_effects() {
        let mut dice = scripted(&[5, 5, 1, 6, 6, 2]);
        let outcome = resolve(
            &Contestant::new(3, 3),
            &Contestant::new(3, 3).leading_figure(),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert!(outcome.is_tie());
        assert_eq!(outcome.loser(), None);
        assert_eq!(outcome.margin, 0);
        assert!(!outcome.burned);
        assert!(!outcome.flipped);
        assert_eq!(outcome.spaces_converted, 0);
        assert!(!outcome.leading_figure_triggered);
    }

    #[test]
    fn zero_hits_auto_burn_ignores_margin() {
        let policy = DebatePolicy::default().with_zero_hits_auto_burn(true);
        let mut dice = scripted(&[5, 1, 1, 2]);
        let outcome = resolve(&Contestant::new(2, 2), &Contestant::new(2, 2), &policy, &mut dice);
        assert_eq!(outcome.margin, 1);
        assert!(outcome.burned);
        assert!(!outcome.flipped);

        let mut dice = scripted(&[5, 1, 1, 2]);
        let outcome = resolve(
            &Contestant::new(2, 2),
            &Contestant::new(2, 2),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert!(!outcome.burned);
    }

    #[test]
    fn reroll_rolls_one_die_per_two_hits() {
        let policy = DebatePolicy::default().with_reroll(Sides::new(true, false));
        // Protestant 4 of 4 hits, Catholic 1 miss, then 2 bonus dice.
        let mut dice = scripted(&[5, 5, 6, 6, 1, 2, 3]);
        let outcome = resolve(&Contestant::new(4, 4), &Contestant::new(1, 1), &policy, &mut dice);
        let reroll = outcome.protestant.reroll.as_ref().unwrap();
        assert_eq!(reroll.count(), 2);
        assert_eq!(outcome.protestant.bonus_hits(), 0);
        assert_eq!(outcome.hits(Faction::Protestant), 4);
        assert_eq!(dice.consumed(), 7);
        assert!(outcome.catholic.reroll.is_none());
    }

    #[test]
    fn reroll_hits_are_added() {
        let policy = DebatePolicy::default().with_reroll(Sides::both(true));
        // Protestant [5, 6, 1], Catholic [6, 2], Protestant re-rolls one die: 5.
        let mut dice = scripted(&[5, 6, 1, 6, 2, 5]);
        let outcome = resolve(&Contestant::new(3, 3), &Contestant::new(2, 2), &policy, &mut dice);
        assert_eq!(outcome.protestant.initial_hits(), 2);
        assert_eq!(outcome.protestant.bonus_hits(), 1);
        assert_eq!(outcome.hits(Faction::Protestant), 3);
        // One Catholic hit earns no bonus dice.
        assert!(outcome.catholic.reroll.is_none());
        assert_eq!(outcome.margin, 2);
        assert_eq!(dice.consumed(), 6);
    }

    #[test]
    fn reroll_disabled_by_default() {
        let mut dice = scripted(&[5, 5, 5, 5, 1]);
        let outcome = resolve(
            &Contestant::new(4, 4),
            &Contestant::new(1, 1),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert!(outcome.protestant.reroll.is_none());
        assert_eq!(dice.consumed(), 5);
    }

    #[test]
    fn burn_iff_margin_reaches_threshold() {
        for threshold in 1..=4 {
            for catholic_hits in 0..=3u32 {
                let policy = DebatePolicy::default()
                    .with_burn_threshold(threshold)
                    .with_flip_threshold(threshold + 1);
                let mut faces = vec![6; 4];
                faces.extend((0..4).map(|i| if i < catholic_hits { 6 } else { 1 }));
                let mut dice = ScriptedDice::new(faces);
                let outcome = resolve(
                    &Contestant::new(4, 1),
                    &Contestant::new(4, 1),
                    &policy,
                    &mut dice,
                );
                let margin = 4 - catholic_hits;
                assert_eq!(outcome.margin, margin);
                assert_eq!(outcome.burned, margin >= threshold);
                assert_eq!(outcome.flipped, margin > threshold);
            }
        }
    }

    #[test]
    fn exceeds_loser_rating_rule() {
        let policy = preset::auto_resolve();
        // Catholic wins 3 to 1: margin 2 against a rating of 2 is not enough.
        let mut dice = scripted(&[5, 1, 6, 6, 6]);
        let outcome = resolve(&Contestant::new(2, 2), &Contestant::new(3, 3), &policy, &mut dice);
        assert_eq!(outcome.winner, Some(Faction::Catholic));
        assert_eq!(outcome.margin, 2);
        assert!(!outcome.burned);
        assert!(outcome.flipped);
        assert_eq!(outcome.spaces_converted, 2);

        // Margin 2 against a rating of 1 burns.
        let mut dice = scripted(&[5, 1, 6, 6, 6]);
        let outcome = resolve(&Contestant::new(2, 1), &Contestant::new(3, 3), &policy, &mut dice);
        assert!(outcome.burned);
    }

    #[test]
    fn leading_figure_escalation() {
        let mut dice = scripted(&[1, 1, 6, 6]);
        let outcome = resolve(
            &Contestant::new(2, 4).leading_figure(),
            &Contestant::new(2, 3),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert_eq!(outcome.winner, Some(Faction::Catholic));
        assert!(outcome.burned);
        assert!(outcome.leading_figure_triggered);
    }

    #[test]
    fn leading_figure_needs_removal() {
        let mut dice = scripted(&[1, 5, 6, 6]);
        let outcome = resolve(
            &Contestant::new(2, 4).leading_figure(),
            &Contestant::new(2, 3),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert_eq!(outcome.margin, 1);
        assert!(!outcome.burned);
        assert!(!outcome.leading_figure_triggered);
    }

    #[test]
    fn empty_pool_rolls_one_die() {
        let mut dice = scripted(&[6, 1]);
        let outcome = resolve(
            &Contestant::new(0, 0),
            &Contestant::new(0, 0),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert_eq!(outcome.protestant.pool, 1);
        assert_eq!(outcome.catholic.pool, 1);
        assert_eq!(outcome.winner, Some(Faction::Protestant));
    }

    #[test]
    fn oversized_pool_rolls_at_most_max() {
        let mut dice = scripted(&[1]);
        let outcome = resolve(
            &Contestant::new(u32::MAX, 4),
            &Contestant::new(3, 3),
            &DebatePolicy::default(),
            &mut dice,
        );
        assert_eq!(outcome.protestant.pool, MAX_POOL);
        assert_eq!(outcome.protestant.initial.count(), MAX_POOL as usize);
        assert_eq!(dice.consumed(), MAX_POOL as usize + 3);
    }

    #[test]
    fn random_outcome_is_consistent() {
        let policy = DebatePolicy::default().with_reroll(Sides::both(true));
        let mut dice = RandomDice::seeded(2024);
        for _ in 0..200 {
            let o = resolve(&Contestant::new(7, 4), &Contestant::new(5, 3), &policy, &mut dice);
            let (p, c) = (o.hits(Faction::Protestant), o.hits(Faction::Catholic));
            assert_eq!(o.margin, p.abs_diff(c));
            assert_eq!(o.is_tie(), p == c);
            assert!(o.protestant.initial.count() == 7 && o.catholic.initial.count() == 5);
            if o.is_tie() {
                assert!(!o.burned && !o.flipped);
            }
        }
    }
}
