//! Core types for Here I Stand debates: factions, zones, debaters, and the roster.
//!
//! This crate defines the reference data the debate engine works against.
//! A [`Roster`] is fixed in size once loaded; only each debater's
//! availability and committed flags change, through the tracker methods.

/// Factions, language zones, and individual debaters.
pub mod debater;
/// Error types used throughout the crate.
pub mod error;
/// Query builder for filtering the roster.
pub mod query;
/// The roster that owns every debater.
pub mod roster;
/// The bundled standard roster.
pub mod standard;
/// Availability and committed-state mutation.
pub mod tracker;

/// Re-export debater types.
pub use debater::{Debater, DebaterId, Faction, Zone};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the query builder.
pub use query::RosterQuery;
/// Re-export the roster.
pub use roster::Roster;
