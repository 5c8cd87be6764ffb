//! Error types for the debate engine.

use hs_core::{CoreError, Faction};

/// Errors that can occur during debate operations.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A side has no debater selected.
    #[error("no {0} debater selected")]
    NoDebaterSelected(Faction),

    /// The policy requires an attacker and none was declared.
    #[error("no attacker declared")]
    NoAttacker,

    /// Nobody on the requested side passes the current filters.
    #[error("no eligible {faction} {role} found")]
    NoEligibleDebater {
        /// The side that was searched.
        faction: Faction,
        /// "attacker" or "defender".
        role: &'static str,
    },

    /// A selected debater has been removed from play.
    #[error("{0} is not available")]
    DebaterUnavailable(String),

    /// A debater was selected for the wrong side.
    #[error("{name} is not a {expected} debater")]
    WrongFaction {
        /// The debater's name.
        name: String,
        /// The side they were selected for.
        expected: Faction,
    },

    /// A debater is not eligible under the current turn or zone filter.
    #[error("{0} cannot debate under the current turn and zone")]
    NotEligible(String),

    /// No debater with this name exists.
    #[error("unknown debater: {0}")]
    UnknownDebater(String),

    /// No event card with this name exists.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// No preset with this name exists.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A policy could not be parsed or serialized.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// A roster operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl MechError {
    /// Whether the error is a caller mistake that left all state untouched.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoDebaterSelected(_)
                | Self::NoAttacker
                | Self::NoEligibleDebater { .. }
                | Self::DebaterUnavailable(_)
                | Self::WrongFaction { .. }
                | Self::NotEligible(_)
        )
    }
}

/// Convenience result type for debate operations.
pub type MechResult<T> = Result<T, MechError>;
