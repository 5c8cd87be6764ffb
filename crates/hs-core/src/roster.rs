use std::collections::HashMap;

use serde::Deserialize;

use crate::debater::{Debater, DebaterId, Faction, Zone};
use crate::error::{CoreError, CoreResult};
use crate::query::RosterQuery;

/// Every debater available to a game.
///
/// Debaters are addressed by [`DebaterId`], which is their index here.
/// A roster never shrinks, so ids stay valid for its whole lifetime.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub(crate) debaters: Vec<Debater>,
    by_name_lower: HashMap<String, DebaterId>,
}

/// One entry of a JSON roster file.
#[derive(Debug, Deserialize)]
struct DebaterRecord {
    name: String,
    faction: Faction,
    zone: Zone,
    rating: u32,
    turn: u32,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    leading_figure: bool,
}

impl From<DebaterRecord> for Debater {
    fn from(r: DebaterRecord) -> Self {
        let mut debater = Debater::new(r.name, r.faction, r.zone, r.rating, r.turn);
        if r.optional {
            debater = debater.optional();
        }
        if r.leading_figure {
            debater = debater.leading_figure();
        }
        debater
    }
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a list of debaters, assigning ids in order.
    pub fn from_debaters(debaters: impl IntoIterator<Item = Debater>) -> CoreResult<Self> {
        let mut roster = Self::new();
        for debater in debaters {
            roster.add(debater)?;
        }
        Ok(roster)
    }

    /// Parse a roster from a JSON array of debater records.
    ///
    /// `optional` and `leading_figure` may be omitted and default to false.
    /// Every rating must be at least 1.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let records: Vec<DebaterRecord> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidRoster(e.to_string()))?;
        if let Some(r) = records.iter().find(|r| r.rating == 0) {
            return Err(CoreError::InvalidRoster(format!(
                "{}: rating must be at least 1",
                r.name
            )));
        }
        Self::from_debaters(records.into_iter().map(Debater::from))
    }

    /// Add a debater, returning its assigned id.
    pub fn add(&mut self, mut debater: Debater) -> CoreResult<DebaterId> {
        let name_lower = debater.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName(debater.name));
        }

        let id = DebaterId(self.debaters.len());
        debater.id = id;
        self.by_name_lower.insert(name_lower, id);
        self.debaters.push(debater);
        Ok(id)
    }

    /// Get a debater by id.
    pub fn get(&self, id: DebaterId) -> Option<&Debater> {
        self.debaters.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: DebaterId) -> CoreResult<&mut Debater> {
        self.debaters
            .get_mut(id.0)
            .ok_or(CoreError::DebaterNotFound(id))
    }

    /// Find a debater by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Debater> {
        self.find_id_by_name(name).and_then(|id| self.get(id))
    }

    /// Find a debater id by name (case-insensitive).
    pub fn find_id_by_name(&self, name: &str) -> Option<DebaterId> {
        self.by_name_lower.get(&name.trim().to_lowercase()).copied()
    }

    /// Iterate over all debaters in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Debater> {
        self.debaters.iter()
    }

    /// Number of debaters.
    pub fn len(&self) -> usize {
        self.debaters.len()
    }

    /// Whether the roster has no debaters.
    pub fn is_empty(&self) -> bool {
        self.debaters.is_empty()
    }

    /// Start a filtered query over the roster.
    pub fn query(&self) -> RosterQuery<'_> {
        RosterQuery::new(self)
    }
}
