//! Event cards that adjust a debate.

use hs_core::{Debater, Faction, Zone};
use serde::{Deserialize, Serialize};

/// Catholic debaters who benefit from [`EventCard::EckGardiner`].
///
/// A roster rejects names that differ only in case, so a Catholic debater
/// with one of these names is that debater.
pub const ECK_GARDINER_NAMES: [&str; 2] = ["Eck", "Gardiner"];

/// A played event that changes one side's dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCard {
    /// Catholic side rolls one die fewer.
    AugsburgConfession,
    /// Catholic debater's rating counts double against an English reformer.
    MaryI,
    /// Catholic side rolls one extra die.
    ThomasMore,
    /// Catholic side rolls one extra die.
    PapalInquisition,
    /// Eck or Gardiner rolls one extra die.
    EckGardiner,
    /// Protestant side rolls one extra die and may re-roll.
    PrintingPress,
    /// Catholic side rolls one extra die and may re-roll.
    JesuitUniversity,
}

/// What an event does to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventEffect {
    /// Add (or remove) a fixed number of dice.
    Dice(i32),
    /// Add the debater's base rating a second time.
    DoubleRating,
}

impl EventCard {
    /// Every event card.
    pub const ALL: [EventCard; 7] = [
        EventCard::AugsburgConfession,
        EventCard::MaryI,
        EventCard::ThomasMore,
        EventCard::PapalInquisition,
        EventCard::EckGardiner,
        EventCard::PrintingPress,
        EventCard::JesuitUniversity,
    ];

    /// The side whose pool this card adjusts.
    pub fn side(self) -> Faction {
        match self {
            Self::PrintingPress => Faction::Protestant,
            _ => Faction::Catholic,
        }
    }

    /// Short key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::AugsburgConfession => "augsburg",
            Self::MaryI => "mary",
            Self::ThomasMore => "more",
            Self::PapalInquisition => "inquisition",
            Self::EckGardiner => "eck-gardiner",
            Self::PrintingPress => "printing-press",
            Self::JesuitUniversity => "jesuit",
        }
    }

    /// Card title.
    pub fn label(self) -> &'static str {
        match self {
            Self::AugsburgConfession => "Augsburg Confession",
            Self::MaryI => "Mary I",
            Self::ThomasMore => "Thomas More",
            Self::PapalInquisition => "Papal Inquisition",
            Self::EckGardiner => "Eck/Gardiner",
            Self::PrintingPress => "Printing Press",
            Self::JesuitUniversity => "Jesuit University",
        }
    }

    /// Parse a card from its key or title, ignoring case and separators.
    pub fn parse(s: &str) -> Option<Self> {
        let norm = normalize(s);
        Self::ALL
            .into_iter()
            .find(|card| normalize(card.key()) == norm || normalize(card.label()) == norm)
    }

    /// Whether the card unlocks the re-roll for its side.
    pub fn grants_reroll(self) -> bool {
        matches!(self, Self::PrintingPress | Self::JesuitUniversity)
    }

    /// Evaluate the card for `side`, whose debater is `own`, facing `opponent`.
    ///
    /// Returns `None` when the card does not apply to this side or its
    /// condition is not met.
    pub fn effect(self, side: Faction, own: &Debater, opponent: &Debater) -> Option<EventEffect> {
        if side != self.side() {
            return None;
        }
        match self {
            Self::AugsburgConfession => Some(EventEffect::Dice(-1)),
            Self::MaryI => (opponent.zone == Zone::English).then_some(EventEffect::DoubleRating),
            Self::EckGardiner => is_eck_or_gardiner(own).then_some(EventEffect::Dice(1)),
            Self::ThomasMore
            | Self::PapalInquisition
            | Self::PrintingPress
            | Self::JesuitUniversity => Some(EventEffect::Dice(1)),
        }
    }
}

impl std::fmt::Display for EventCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn is_eck_or_gardiner(debater: &Debater) -> bool {
    debater.faction == Faction::Catholic
        && ECK_GARDINER_NAMES
            .iter()
            .any(|n| n.eq_ignore_ascii_case(&debater.name))
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
