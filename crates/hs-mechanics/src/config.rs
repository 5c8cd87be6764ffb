//! Configuration for a debate session.

use hs_core::Zone;

use crate::rules::DebatePolicy;

/// Configuration for a debate session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible selection and dice; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// The rules to resolve debates under.
    pub policy: DebatePolicy,
    /// Current game turn.
    pub current_turn: u32,
    /// Language zone the debates take place in; `None` for any zone.
    pub zone: Option<Zone>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            policy: DebatePolicy::default(),
            current_turn: 1,
            zone: None,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the policy.
    pub fn with_policy(mut self, policy: DebatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the current game turn.
    pub fn with_turn(mut self, turn: u32) -> Self {
        self.current_turn = turn;
        self
    }

    /// Restrict debates to a language zone.
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }
}
