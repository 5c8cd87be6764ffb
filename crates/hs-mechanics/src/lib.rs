//! Debate resolution engine for Here I Stand.
//!
//! Builds each side's dice pool from rating, stance, events and bonuses,
//! rolls it with hits on 5 or 6, and decides the winner, whether the loser
//! is burned or disgraced, and whether spaces convert. A
//! [`DebateSession`] applies results to a roster. Three debate policies
//! ship as presets: `standard`, `auto_resolve` and `house_rules`.

pub mod config;
pub mod dice;
pub mod error;
pub mod modifiers;
pub mod narrative;
pub mod resolution;
pub mod rules;
pub mod session;
pub mod sides;

pub use config::SessionConfig;
pub use dice::{DicePool, DieSource, RandomDice, RollResult, ScriptedDice};
pub use error::{MechError, MechResult};
pub use modifiers::{
    EventCard, EventEffect, MAX_POOL, MIN_POOL, PoolBreakdown, PoolCalculator, PoolModifiers,
    Stance, StanceBonuses,
};
pub use resolution::{Contestant, Outcome, SideRoll, resolve};
pub use rules::{BurnRule, DebatePolicy};
pub use session::{DebateReport, DebateSession, ResolveRequest};
pub use sides::Sides;
