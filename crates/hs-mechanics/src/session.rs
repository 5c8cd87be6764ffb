//! Debate session management.
//!
//! `DebateSession` owns a roster and applies debate results to it. The
//! caller selects one debater per side (explicitly or at random), declares
//! the attacker, toggles event cards, and resolves. A resolve either fails
//! a precondition and changes nothing, or rolls and then updates the
//! roster: the removed loser leaves play and both participants become
//! committed.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use hs_core::{CoreError, Debater, DebaterId, Faction, Roster, Zone};

use crate::config::SessionConfig;
use crate::dice::{DieSource, RandomDice};
use crate::error::{MechError, MechResult};
use crate::modifiers::{EventCard, PoolBreakdown, PoolCalculator, PoolModifiers, Stance};
use crate::narrative;
use crate::resolution::{self, Contestant, Outcome};
use crate::rules::DebatePolicy;
use crate::sides::Sides;

/// Per-debate adjustments supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Free bonus dice per side.
    pub bonus_dice: Sides<u32>,
    /// Signed modifier per side.
    pub modifier: Sides<i32>,
    /// Signed adjacency bonus per side.
    pub adjacency: Sides<i32>,
}

/// Everything that happened in one resolved debate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateReport {
    /// Name of the Protestant debater.
    pub protestant: String,
    /// Name of the Catholic debater.
    pub catholic: String,
    /// The side that attacked, if one was declared.
    pub attacker: Option<Faction>,
    /// How the Protestant pool was built.
    pub protestant_pool: PoolBreakdown,
    /// How the Catholic pool was built.
    pub catholic_pool: PoolBreakdown,
    /// Dice and result.
    pub outcome: Outcome,
    /// Human-readable summary.
    pub summary: String,
}

impl DebateReport {
    /// The pool breakdown for one side.
    pub fn pool(&self, faction: Faction) -> &PoolBreakdown {
        match faction {
            Faction::Protestant => &self.protestant_pool,
            Faction::Catholic => &self.catholic_pool,
        }
    }

    /// The debater name for one side.
    pub fn name(&self, faction: Faction) -> &str {
        match faction {
            Faction::Protestant => &self.protestant,
            Faction::Catholic => &self.catholic,
        }
    }
}

/// An in-memory debate table.
pub struct DebateSession<D: DieSource = RandomDice> {
    roster: Roster,
    policy: DebatePolicy,
    events: BTreeSet<EventCard>,
    turn: u32,
    zone: Option<Zone>,
    selected: Sides<Option<DebaterId>>,
    attacker: Option<Faction>,
    dice: D,
    rng: StdRng,
}

impl DebateSession<RandomDice> {
    /// Create a session with random dice, seeded from the config if a seed is set.
    pub fn new(roster: Roster, config: SessionConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => RandomDice::seeded(seed.rotate_left(32) ^ 0x5eed),
            None => RandomDice::new(),
        };
        Self::with_dice(roster, config, dice)
    }
}

impl<D: DieSource> DebateSession<D> {
    /// Create a session that rolls with the given dice.
    pub fn with_dice(roster: Roster, config: SessionConfig, dice: D) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            roster,
            policy: config.policy,
            events: BTreeSet::new(),
            turn: config.current_turn,
            zone: config.zone,
            selected: Sides::default(),
            attacker: None,
            dice,
            rng,
        }
    }

    /// The roster in its current state.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The active policy.
    pub fn policy(&self) -> &DebatePolicy {
        &self.policy
    }

    /// Replace the active policy.
    pub fn set_policy(&mut self, policy: DebatePolicy) {
        self.policy = policy;
    }

    /// The current game turn.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Set the current game turn.
    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    /// The zone filter.
    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    /// Set the zone filter; `None` allows every zone.
    pub fn set_zone(&mut self, zone: Option<Zone>) {
        self.zone = zone;
    }

    /// Active event cards.
    pub fn events(&self) -> impl Iterator<Item = EventCard> + '_ {
        self.events.iter().copied()
    }

    /// Turn an event card on or off.
    pub fn toggle_event(&mut self, card: EventCard, active: bool) {
        if active {
            self.events.insert(card);
        } else {
            self.events.remove(&card);
        }
    }

    /// Put a debater into or out of play, e.g. to enable an optional debater.
    pub fn set_available(&mut self, id: DebaterId, available: bool) -> MechResult<()> {
        self.roster.set_available(id, available)?;
        Ok(())
    }

    /// The debater currently selected for a side.
    pub fn selected(&self, faction: Faction) -> Option<&Debater> {
        (*self.selected.get(faction)).and_then(|id| self.roster.get(id))
    }

    /// The declared attacking side.
    pub fn attacker(&self) -> Option<Faction> {
        self.attacker
    }

    /// Declare (or clear) the attacking side.
    pub fn set_attacker(&mut self, attacker: Option<Faction>) {
        self.attacker = attacker;
    }

    /// Debaters of `faction` who are in play and eligible under the
    /// current turn and zone. Attackers must also be uncommitted.
    pub fn candidates(&self, faction: Faction, attacking: bool) -> Vec<&Debater> {
        let mut query = self
            .roster
            .query()
            .faction(faction)
            .turn(self.turn)
            .available();
        if let Some(zone) = self.zone {
            query = query.zone(zone);
        }
        if attacking {
            query = query.uncommitted();
        }
        query.execute()
    }

    /// Select a specific debater for a side.
    pub fn select(&mut self, faction: Faction, id: DebaterId) -> MechResult<&Debater> {
        let debater = self
            .roster
            .get(id)
            .ok_or(MechError::Core(CoreError::DebaterNotFound(id)))?;
        if debater.faction != faction {
            return Err(MechError::WrongFaction {
                name: debater.name.clone(),
                expected: faction,
            });
        }
        if !debater.available {
            return Err(MechError::DebaterUnavailable(debater.name.clone()));
        }
        if !self.can_debate(debater) {
            return Err(MechError::NotEligible(debater.name.clone()));
        }

        tracing::debug!(debater = %debater.name, %faction, "selected");
        *self.selected.get_mut(faction) = Some(id);
        Ok(debater)
    }

    /// Select a debater by name for whichever side they belong to.
    pub fn select_by_name(&mut self, name: &str) -> MechResult<&Debater> {
        let debater = self
            .roster
            .find_by_name(name)
            .ok_or_else(|| MechError::UnknownDebater(name.to_string()))?;
        let (faction, id) = (debater.faction, debater.id);
        self.select(faction, id)
    }

    /// Declare `faction` the attacker and pick both debaters at random: an
    /// uncommitted attacker and any defender still in play.
    pub fn select_attacker(&mut self, faction: Faction) -> MechResult<Sides<DebaterId>> {
        let attackers: Vec<DebaterId> = self.candidates(faction, true).iter().map(|d| d.id).collect();
        let defenders: Vec<DebaterId> = self
            .candidates(faction.opponent(), false)
            .iter()
            .map(|d| d.id)
            .collect();

        let attacker = *attackers
            .choose(&mut self.rng)
            .ok_or(MechError::NoEligibleDebater {
                faction,
                role: "attacker",
            })?;
        let defender = *defenders
            .choose(&mut self.rng)
            .ok_or(MechError::NoEligibleDebater {
                faction: faction.opponent(),
                role: "defender",
            })?;

        *self.selected.get_mut(faction) = Some(attacker);
        *self.selected.get_mut(faction.opponent()) = Some(defender);
        self.attacker = Some(faction);
        tracing::debug!(%faction, ?attacker, ?defender, "random selection");

        let mut picked = Sides::new(attacker, defender);
        if faction == Faction::Catholic {
            picked = Sides::new(defender, attacker);
        }
        Ok(picked)
    }

    /// Resolve the debate between the selected debaters.
    pub fn resolve(&mut self, request: &ResolveRequest) -> MechResult<DebateReport> {
        let protestant_id = self
            .selected
            .protestant
            .ok_or(MechError::NoDebaterSelected(Faction::Protestant))?;
        let catholic_id = self
            .selected
            .catholic
            .ok_or(MechError::NoDebaterSelected(Faction::Catholic))?;
        if self.policy.require_attacker && self.attacker.is_none() {
            return Err(MechError::NoAttacker);
        }

        let protestant = self.participant(protestant_id)?.clone();
        let catholic = self.participant(catholic_id)?.clone();

        let calc = PoolCalculator::new(self.policy.stance);
        let protestant_pool = calc.compute(
            protestant.rating,
            &self.side_modifiers(Faction::Protestant, &protestant, &catholic, request),
        );
        let catholic_pool = calc.compute(
            catholic.rating,
            &self.side_modifiers(Faction::Catholic, &catholic, &protestant, request),
        );

        let mut policy = self.policy.clone();
        for card in self.events.iter().filter(|c| c.grants_reroll()) {
            *policy.reroll.get_mut(card.side()) = true;
        }

        let outcome = resolution::resolve(
            &contestant(&protestant, &protestant_pool),
            &contestant(&catholic, &catholic_pool),
            &policy,
            &mut self.dice,
        );

        if outcome.burned
            && let Some(loser) = outcome.loser()
        {
            let loser_id = match loser {
                Faction::Protestant => protestant_id,
                Faction::Catholic => catholic_id,
            };
            self.roster.set_available(loser_id, false)?;
        }
        self.roster.set_committed(protestant_id, true)?;
        self.roster.set_committed(catholic_id, true)?;

        let attacker = self.attacker.take();
        self.selected = Sides::default();

        let summary = narrative::summary(&outcome, &protestant.name, &catholic.name);
        Ok(DebateReport {
            protestant: protestant.name,
            catholic: catholic.name,
            attacker,
            protestant_pool,
            catholic_pool,
            outcome,
            summary,
        })
    }

    /// Start a new round: every debater becomes uncommitted.
    pub fn reset_round(&mut self) {
        self.roster.reset_all_committed();
    }

    /// Restore the roster to its starting state and clear the selection.
    pub fn reset_all(&mut self) {
        self.roster.reset_all();
        self.selected = Sides::default();
        self.attacker = None;
    }

    fn participant(&self, id: DebaterId) -> MechResult<&Debater> {
        let debater = self
            .roster
            .get(id)
            .ok_or(MechError::Core(CoreError::DebaterNotFound(id)))?;
        if !debater.available {
            return Err(MechError::DebaterUnavailable(debater.name.clone()));
        }
        if !self.can_debate(debater) {
            return Err(MechError::NotEligible(debater.name.clone()));
        }
        Ok(debater)
    }

    /// Entered play by the current turn and debates in the current zone.
    fn can_debate(&self, debater: &Debater) -> bool {
        debater.is_eligible(self.turn) && self.zone.is_none_or(|z| debater.debates_in(z))
    }

    fn side_modifiers(
        &self,
        side: Faction,
        own: &Debater,
        opponent: &Debater,
        request: &ResolveRequest,
    ) -> PoolModifiers {
        let stance = match self.attacker {
            None => Stance::Neutral,
            Some(attacker) if attacker == side => Stance::Attacking,
            Some(_) => Stance::Defending {
                committed: own.committed,
            },
        };
        let mut modifiers = PoolModifiers::new()
            .with_stance(stance)
            .with_modifier(*request.modifier.get(side))
            .with_adjacency(*request.adjacency.get(side))
            .with_bonus_dice(*request.bonus_dice.get(side));
        for &card in &self.events {
            if let Some(effect) = card.effect(side, own, opponent) {
                modifiers = modifiers.with_event(card, effect);
            }
        }
        modifiers
    }
}

fn contestant(debater: &Debater, pool: &PoolBreakdown) -> Contestant {
    Contestant {
        pool: pool.size,
        rating: debater.rating,
        leading_figure: debater.leading_figure,
    }
}
