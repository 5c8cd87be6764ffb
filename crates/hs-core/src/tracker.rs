use crate::debater::DebaterId;
use crate::error::CoreResult;
use crate::roster::Roster;

impl Roster {
    /// Put a debater into or out of play.
    pub fn set_available(&mut self, id: DebaterId, available: bool) -> CoreResult<()> {
        let debater = self.get_mut(id)?;
        if debater.available != available {
            debater.available = available;
            tracing::debug!(debater = %debater.name, available, "availability changed");
        }
        Ok(())
    }

    /// Mark a debater as used (or fresh) for this round.
    pub fn set_committed(&mut self, id: DebaterId, committed: bool) -> CoreResult<()> {
        let debater = self.get_mut(id)?;
        if debater.committed != committed {
            debater.committed = committed;
            tracing::debug!(debater = %debater.name, committed, "committed changed");
        }
        Ok(())
    }

    /// Clear the committed flag on every debater (start of a new round).
    pub fn reset_all_committed(&mut self) {
        let mut cleared = 0usize;
        for debater in self.debaters.iter_mut().filter(|d| d.committed) {
            debater.committed = false;
            cleared += 1;
        }
        tracing::debug!(cleared, "reset all committed");
    }

    /// Return every debater to its starting state: optional debaters out
    /// of play, everyone else available, nobody committed.
    pub fn reset_all(&mut self) {
        for debater in &mut self.debaters {
            debater.available = !debater.optional;
            debater.committed = false;
        }
        tracing::debug!(debaters = self.debaters.len(), "roster reset");
    }
}

#[cfg(test)]
mod tests {
    use crate::debater::{Debater, DebaterId, Faction, Zone};
    use crate::error::CoreError;
    use crate::roster::Roster;

    fn roster() -> Roster {
        Roster::from_debaters([
            Debater::new("Zwingli", Faction::Protestant, Zone::German, 3, 2),
            Debater::new("Coverdale", Faction::Protestant, Zone::English, 2, 4).optional(),
            Debater::new("Tetzel", Faction::Catholic, Zone::Papal, 1, 1),
        ])
        .unwrap()
    }

    #[test]
    fn set_available_is_idempotent() {
        let mut r = roster();
        let id = DebaterId(0);
        r.set_available(id, false).unwrap();
        r.set_available(id, false).unwrap();
        assert!(!r.get(id).unwrap().available);
        r.set_available(id, true).unwrap();
        assert!(r.get(id).unwrap().available);
    }

    #[test]
    fn set_committed_and_reset() {
        let mut r = roster();
        r.set_committed(DebaterId(0), true).unwrap();
        r.set_committed(DebaterId(2), true).unwrap();
        assert_eq!(r.iter().filter(|d| d.committed).count(), 2);

        r.reset_all_committed();
        assert!(r.iter().all(|d| !d.committed));
    }

    #[test]
    fn reset_all_committed_leaves_availability() {
        let mut r = roster();
        r.set_available(DebaterId(2), false).unwrap();
        r.set_committed(DebaterId(2), true).unwrap();
        r.reset_all_committed();
        assert!(!r.get(DebaterId(2)).unwrap().available);
    }

    #[test]
    fn reset_all_restores_starting_state() {
        let mut r = roster();
        r.set_available(DebaterId(0), false).unwrap();
        r.set_available(DebaterId(1), true).unwrap();
        r.set_committed(DebaterId(2), true).unwrap();

        r.reset_all();
        assert!(r.get(DebaterId(0)).unwrap().available);
        assert!(!r.get(DebaterId(1)).unwrap().available);
        assert!(!r.get(DebaterId(2)).unwrap().committed);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut r = roster();
        let err = r.set_available(DebaterId(99), false).unwrap_err();
        assert!(matches!(err, CoreError::DebaterNotFound(DebaterId(99))));
        assert!(r.set_committed(DebaterId(3), true).is_err());
    }
}
