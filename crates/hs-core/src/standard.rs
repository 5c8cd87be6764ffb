use crate::debater::{Debater, Faction, Zone};
use crate::roster::Roster;

/// The debater cards of the base game.
pub fn debaters() -> Vec<Debater> {
    use Faction::{Catholic, Protestant};
    use Zone::{English, French, German, Papal};

    vec![
        // German reformers
        Debater::new("Oekolampadius", Protestant, German, 2, 2),
        Debater::new("Zwingli", Protestant, German, 3, 2),
        Debater::new("Carlstadt", Protestant, German, 1, 1),
        Debater::new("Luther", Protestant, German, 4, 1).leading_figure(),
        Debater::new("Bullinger", Protestant, German, 2, 3),
        Debater::new("Melanchthon", Protestant, German, 3, 1),
        Debater::new("Bucer", Protestant, German, 2, 1),
        // Papal debaters
        Debater::new("Campeggio", Catholic, Papal, 2, 1),
        Debater::new("Eck", Catholic, Papal, 3, 1).leading_figure(),
        Debater::new("Tetzel", Catholic, Papal, 1, 1),
        Debater::new("Contarini", Catholic, Papal, 2, 2),
        Debater::new("Cajetan", Catholic, Papal, 1, 1).leading_figure(),
        Debater::new("Aleander", Catholic, Papal, 2, 1),
        Debater::new("Caraffa", Catholic, Papal, 2, 5),
        Debater::new("Canisius", Catholic, Papal, 3, 6),
        Debater::new("Loyola", Catholic, Papal, 4, 6),
        Debater::new("Pole", Catholic, Papal, 3, 5),
        Debater::new("Faber", Catholic, Papal, 3, 6),
        Debater::new("Gardiner", Catholic, Papal, 3, 7),
        // English reformers
        Debater::new("Knox", Protestant, English, 3, 6),
        Debater::new("Tyndale", Protestant, English, 2, 2),
        Debater::new("Wishart", Protestant, English, 1, 6),
        Debater::new("Latimer", Protestant, English, 1, 4).optional(),
        Debater::new("Cranmer", Protestant, English, 3, 4).optional(),
        Debater::new("Coverdale", Protestant, English, 2, 4).optional(),
        // French reformers
        Debater::new("Cop", Protestant, French, 2, 4),
        Debater::new("Calvin", Protestant, French, 4, 4).leading_figure(),
        Debater::new("Olivetan", Protestant, French, 1, 4),
        Debater::new("Farel", Protestant, French, 2, 4),
    ]
}

impl Roster {
    /// The roster of the base game.
    pub fn standard() -> Self {
        let mut roster = Self::new();
        for debater in debaters() {
            if let Err(e) = roster.add(debater) {
                tracing::warn!("skipping standard debater: {e}");
            }
        }
        roster
    }
}
