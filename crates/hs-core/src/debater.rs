use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a debater: its index in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DebaterId(pub usize);

impl fmt::Display for DebaterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the two sides of a debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    /// The reformers.
    Protestant,
    /// The papacy.
    #[serde(alias = "papal")]
    Catholic,
}

impl Faction {
    /// Both factions, Protestant first.
    pub const ALL: [Faction; 2] = [Faction::Protestant, Faction::Catholic];

    /// The opposing faction.
    pub fn opponent(self) -> Self {
        match self {
            Self::Protestant => Self::Catholic,
            Self::Catholic => Self::Protestant,
        }
    }

    /// Parse a faction name (case-insensitive). `papal` is accepted for Catholic.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "protestant" | "p" => Some(Self::Protestant),
            "catholic" | "papal" | "c" => Some(Self::Catholic),
            _ => None,
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Protestant => write!(f, "Protestant"),
            Self::Catholic => write!(f, "Catholic"),
        }
    }
}

/// A language zone of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// German-speaking lands.
    German,
    /// England and Scotland.
    English,
    /// French-speaking lands.
    French,
    /// The Italian states.
    Italian,
    /// Spain and its possessions.
    Spanish,
    /// The papal debaters, who may debate in any zone.
    #[serde(alias = "catholic")]
    Papal,
}

impl Zone {
    /// Every zone, in display order.
    pub const ALL: [Zone; 6] = [
        Zone::German,
        Zone::English,
        Zone::French,
        Zone::Italian,
        Zone::Spanish,
        Zone::Papal,
    ];

    /// Parse a zone name (case-insensitive). `catholic` is accepted for Papal.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "german" => Some(Self::German),
            "english" => Some(Self::English),
            "french" => Some(Self::French),
            "italian" => Some(Self::Italian),
            "spanish" => Some(Self::Spanish),
            "papal" | "catholic" => Some(Self::Papal),
            _ => None,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::German => write!(f, "German"),
            Self::English => write!(f, "English"),
            Self::French => write!(f, "French"),
            Self::Italian => write!(f, "Italian"),
            Self::Spanish => write!(f, "Spanish"),
            Self::Papal => write!(f, "Papal"),
        }
    }
}

/// A debater card.
///
/// Everything but `available` and `committed` is fixed once the debater
/// joins a roster; those two flags are changed through the tracker methods
/// on [`Roster`](crate::Roster).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debater {
    /// Roster index, assigned when the debater is added.
    pub id: DebaterId,
    /// Display name, unique within a roster (case-insensitive).
    pub name: String,
    /// Which side the debater argues for.
    pub faction: Faction,
    /// Home language zone.
    pub zone: Zone,
    /// Unmodified debate strength.
    pub rating: u32,
    /// First game turn on which the debater may be used.
    pub turn: u32,
    /// Optional debaters start out of play until explicitly enabled.
    pub optional: bool,
    /// Removal of a leading figure carries major consequences.
    pub leading_figure: bool,
    /// False once burned or disgraced.
    pub available: bool,
    /// True once used this round.
    pub committed: bool,
}

impl Debater {
    /// Create a non-optional, available, uncommitted debater.
    pub fn new(
        name: impl Into<String>,
        faction: Faction,
        zone: Zone,
        rating: u32,
        turn: u32,
    ) -> Self {
        Self {
            id: DebaterId(0),
            name: name.into(),
            faction,
            zone,
            rating,
            turn,
            optional: false,
            leading_figure: false,
            available: true,
            committed: false,
        }
    }

    /// Mark the debater optional; an optional debater starts unavailable.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.available = false;
        self
    }

    /// Mark the debater as a leading figure.
    pub fn leading_figure(mut self) -> Self {
        self.leading_figure = true;
        self
    }

    /// Whether the debater has entered play by the given game turn.
    pub fn is_eligible(&self, turn: u32) -> bool {
        self.turn <= turn
    }

    /// Whether the debater can be offered in a debate held in `zone`.
    pub fn debates_in(&self, zone: Zone) -> bool {
        self.zone == zone || self.zone == Zone::Papal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faction_opponent() {
        assert_eq!(Faction::Protestant.opponent(), Faction::Catholic);
        assert_eq!(Faction::Catholic.opponent(), Faction::Protestant);
    }

    #[test]
    fn faction_parse_accepts_papal() {
        assert_eq!(Faction::parse("PROTESTANT"), Some(Faction::Protestant));
        assert_eq!(Faction::parse("papal"), Some(Faction::Catholic));
        assert_eq!(Faction::parse(" catholic "), Some(Faction::Catholic));
        assert_eq!(Faction::parse("ottoman"), None);
    }

    #[test]
    fn zone_parse_and_display() {
        assert_eq!(Zone::parse("english"), Some(Zone::English));
        assert_eq!(Zone::parse("Catholic"), Some(Zone::Papal));
        assert_eq!(Zone::parse("atlantis"), None);
        assert_eq!(Zone::French.to_string(), "French");
    }

    #[test]
    fn optional_debater_starts_unavailable() {
        let d = Debater::new("Cranmer", Faction::Protestant, Zone::English, 3, 4).optional();
        assert!(d.optional);
        assert!(!d.available);
        assert!(!d.committed);
    }

    #[test]
    fn eligibility_by_turn() {
        let d = Debater::new("Calvin", Faction::Protestant, Zone::French, 4, 4);
        assert!(!d.is_eligible(3));
        assert!(d.is_eligible(4));
        assert!(d.is_eligible(9));
    }

    #[test]
    fn papal_debaters_debate_everywhere() {
        let eck = Debater::new("Eck", Faction::Catholic, Zone::Papal, 3, 1);
        let knox = Debater::new("Knox", Faction::Protestant, Zone::English, 3, 6);
        assert!(eck.debates_in(Zone::German));
        assert!(eck.debates_in(Zone::English));
        assert!(knox.debates_in(Zone::English));
        assert!(!knox.debates_in(Zone::German));
    }

    #[test]
    fn faction_serde_alias() {
        let f: Faction = serde_json::from_str("\"papal\"").unwrap();
        assert_eq!(f, Faction::Catholic);
        assert_eq!(serde_json::to_string(&Faction::Protestant).unwrap(), "\"protestant\"");
    }
}
