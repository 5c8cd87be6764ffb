//! Debate policies.
//!
//! A [`DebatePolicy`] holds every rule toggle the resolution engine reads.
//! It can be loaded from JSON via [`DebatePolicy::from_json`], or built
//! from one of the presets in [`preset`].

pub mod preset;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::modifiers::StanceBonuses;
use crate::sides::Sides;

/// When the loser of a decisive debate is removed from play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurnRule {
    /// Margin reaches the policy's `burn_threshold`.
    #[default]
    Threshold,
    /// Margin is strictly greater than the losing debater's rating.
    ExceedsLoserRating,
}

/// The full rule set for resolving debates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebatePolicy {
    /// Policy name, for display.
    pub name: String,
    /// Attacker and defender dice.
    pub stance: StanceBonuses,
    /// Refuse to resolve until an attacking side is declared.
    pub require_attacker: bool,
    /// Which sides get the bonus re-roll (one die per two hits).
    pub reroll: Sides<bool>,
    /// How removal of the loser is decided.
    pub burn_rule: BurnRule,
    /// Margin needed for removal under [`BurnRule::Threshold`].
    pub burn_threshold: u32,
    /// Margin needed to convert spaces.
    pub flip_threshold: u32,
    /// A loser who scored no hits is removed regardless of margin.
    pub zero_hits_auto_burn: bool,
}

impl Default for DebatePolicy {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            stance: StanceBonuses::default(),
            require_attacker: true,
            reroll: Sides::both(false),
            burn_rule: BurnRule::Threshold,
            burn_threshold: 2,
            flip_threshold: 2,
            zero_hits_auto_burn: false,
        }
    }
}

impl DebatePolicy {
    /// Parse a policy from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> MechResult<Self> {
        serde_json::from_str(json).map_err(|e| MechError::InvalidPolicy(e.to_string()))
    }

    /// Serialize the policy as pretty-printed JSON.
    pub fn to_json(&self) -> MechResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MechError::InvalidPolicy(e.to_string()))
    }

    /// Set the burn threshold.
    pub fn with_burn_threshold(mut self, threshold: u32) -> Self {
        self.burn_threshold = threshold;
        self
    }

    /// Set the flip threshold.
    pub fn with_flip_threshold(mut self, threshold: u32) -> Self {
        self.flip_threshold = threshold;
        self
    }

    /// Enable or disable the zero-hits auto burn.
    pub fn with_zero_hits_auto_burn(mut self, enabled: bool) -> Self {
        self.zero_hits_auto_burn = enabled;
        self
    }

    /// Set the per-side re-roll gates.
    pub fn with_reroll(mut self, reroll: Sides<bool>) -> Self {
        self.reroll = reroll;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let p = DebatePolicy::default();
        assert_eq!(p.burn_threshold, 2);
        assert_eq!(p.flip_threshold, 2);
        assert!(p.require_attacker);
        assert!(!p.zero_hits_auto_burn);
        assert_eq!(p.reroll, Sides::both(false));
        assert_eq!(p.stance, StanceBonuses::default());
    }

    #[test]
    fn json_partial_fills_defaults() {
        let p = DebatePolicy::from_json(
            r#"{"name": "harsh", "burn_threshold": 1, "reroll": {"protestant": true, "catholic": false}}"#,
        )
        .unwrap();
        assert_eq!(p.name, "harsh");
        assert_eq!(p.burn_threshold, 1);
        assert_eq!(p.flip_threshold, 2);
        assert!(p.reroll.protestant);
        assert_eq!(p.burn_rule, BurnRule::Threshold);
    }

    #[test]
    fn json_burn_rule() {
        let p = DebatePolicy::from_json(r#"{"burn_rule": "exceeds_loser_rating"}"#).unwrap();
        assert_eq!(p.burn_rule, BurnRule::ExceedsLoserRating);
    }

    #[test]
    fn json_roundtrip_preserves_policy() {
        let p = DebatePolicy::default()
            .with_zero_hits_auto_burn(true)
            .with_flip_threshold(3);
        let back = DebatePolicy::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn invalid_json() {
        let err = DebatePolicy::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, MechError::InvalidPolicy(_)));
    }
}
