use crate::debater::{Debater, Faction, Zone};
use crate::roster::Roster;

/// A builder for filtering debaters in a roster. All filters must match.
pub struct RosterQuery<'r> {
    roster: &'r Roster,
    faction: Option<Faction>,
    zone: Option<Zone>,
    turn: Option<u32>,
    available_only: bool,
    uncommitted_only: bool,
}

impl<'r> RosterQuery<'r> {
    /// Start an unfiltered query.
    pub fn new(roster: &'r Roster) -> Self {
        Self {
            roster,
            faction: None,
            zone: None,
            turn: None,
            available_only: false,
            uncommitted_only: false,
        }
    }

    /// Filter by faction.
    pub fn faction(mut self, faction: Faction) -> Self {
        self.faction = Some(faction);
        self
    }

    /// Filter to debaters who can debate in `zone`. Papal debaters always pass.
    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Filter to debaters who have entered play by game turn `turn`.
    pub fn turn(mut self, turn: u32) -> Self {
        self.turn = Some(turn);
        self
    }

    /// Filter to debaters still in play.
    pub fn available(mut self) -> Self {
        self.available_only = true;
        self
    }

    /// Filter to debaters not yet used this round.
    pub fn uncommitted(mut self) -> Self {
        self.uncommitted_only = true;
        self
    }

    /// Execute the query, returning matches in roster order.
    pub fn execute(self) -> Vec<&'r Debater> {
        self.roster.iter().filter(|d| self.matches(d)).collect()
    }

    /// Count matching debaters without collecting them.
    pub fn count(self) -> usize {
        self.roster.iter().filter(|d| self.matches(d)).count()
    }

    fn matches(&self, debater: &Debater) -> bool {
        if let Some(faction) = self.faction
            && debater.faction != faction
        {
            return false;
        }

        if let Some(zone) = self.zone
            && !debater.debates_in(zone)
        {
            return false;
        }

        if let Some(turn) = self.turn
            && !debater.is_eligible(turn)
        {
            return false;
        }

        if self.available_only && !debater.available {
            return false;
        }

        !(self.uncommitted_only && debater.committed)
    }
}
