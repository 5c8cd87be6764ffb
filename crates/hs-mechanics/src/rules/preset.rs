//! Pre-configured debate policies.
//!
//! These produce the same [`DebatePolicy`] that the equivalent JSON file
//! would.

use crate::error::{MechError, MechResult};
use crate::modifiers::StanceBonuses;
use crate::rules::{BurnRule, DebatePolicy};
use crate::sides::Sides;

/// Names accepted by [`by_name`].
pub fn names() -> &'static [&'static str] {
    &["standard", "auto_resolve", "house_rules"]
}

/// Look up a preset by name.
pub fn by_name(name: &str) -> MechResult<DebatePolicy> {
    match name.trim().to_lowercase().replace('-', "_").as_str() {
        "standard" => Ok(standard()),
        "auto_resolve" | "auto" => Ok(auto_resolve()),
        "house_rules" | "house" => Ok(house_rules()),
        other => Err(MechError::UnknownPreset(other.to_string())),
    }
}

/// The default rules.
///
/// Attacker +3, fresh defender +2, committed defender +1. A margin of 2
/// burns the loser and converts spaces.
pub fn standard() -> DebatePolicy {
    DebatePolicy::default()
}

/// Auto-resolve rules.
///
/// Same stance bonuses as [`standard`], but the loser is only removed when
/// the margin exceeds their own rating, and every decisive win converts as
/// many spaces as the margin.
pub fn auto_resolve() -> DebatePolicy {
    DebatePolicy {
        name: "auto_resolve".to_string(),
        stance: StanceBonuses::default(),
        require_attacker: true,
        reroll: Sides::both(false),
        burn_rule: BurnRule::ExceedsLoserRating,
        burn_threshold: 2,
        flip_threshold: 1,
        zero_hits_auto_burn: false,
    }
}

/// House rules.
///
/// No attacker or defender, no stance dice. Margin thresholds of 2 for
/// burning and flipping, and a loser who scores nothing is burned outright.
pub fn house_rules() -> DebatePolicy {
    DebatePolicy {
        name: "house_rules".to_string(),
        stance: StanceBonuses::none(),
        require_attacker: false,
        reroll: Sides::both(false),
        burn_rule: BurnRule::Threshold,
        burn_threshold: 2,
        flip_threshold: 2,
        zero_hits_auto_burn: true,
    }
}
