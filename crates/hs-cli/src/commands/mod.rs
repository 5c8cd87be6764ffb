pub mod policy;
pub mod raw;
pub mod resolve;
pub mod roster;
pub mod session;

use std::path::{Path, PathBuf};

use clap::builder::RangedI64ValueParser;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use hs_core::{Debater, Faction, Roster, Zone};
use hs_mechanics::narrative::pool_lines;
use hs_mechanics::rules::preset;
use hs_mechanics::{
    DebatePolicy, EventCard, MechError, Outcome, PoolBreakdown, RollResult, Sides,
};

/// The last turn of a full game.
pub const FINAL_TURN: u32 = 9;

/// Most free bonus dice a side may be given.
pub const MAX_BONUS_DICE: i64 = 10;

/// Largest signed modifier or adjacency bonus, in either direction.
pub const MAX_MODIFIER: i64 = 5;

/// Highest rating accepted for a bare-rating debate.
pub const MAX_RATING: i64 = 10;

/// Parser for a signed modifier or adjacency bonus.
pub fn modifier_parser() -> RangedI64ValueParser<i32> {
    clap::value_parser!(i32).range(-MAX_MODIFIER..=MAX_MODIFIER)
}

/// Parse a bonus dice count, as given to the console's `resolve`.
pub fn parse_bonus_dice(s: &str) -> Result<u32, String> {
    let dice: u32 = s
        .parse()
        .map_err(|_| format!("invalid bonus dice '{s}'"))?;
    if i64::from(dice) > MAX_BONUS_DICE {
        return Err(format!("bonus dice must be between 0 and {MAX_BONUS_DICE}, got {dice}"));
    }
    Ok(dice)
}

/// Where a debate policy comes from: a preset name, a JSON file, or neither
/// (the standard rules).
pub struct PolicySource {
    preset: Option<String>,
    file: Option<PathBuf>,
}

impl PolicySource {
    pub fn new(preset: Option<String>, file: Option<PathBuf>) -> Self {
        Self { preset, file }
    }

    pub fn load(&self) -> Result<DebatePolicy, String> {
        let policy = if let Some(path) = &self.file {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            DebatePolicy::from_json(&json).map_err(|e| e.to_string())?
        } else {
            match &self.preset {
                Some(name) => preset::by_name(name).map_err(|e| e.to_string())?,
                None => preset::standard(),
            }
        };
        tracing::debug!(policy = %policy.name, "loaded policy");
        Ok(policy)
    }
}

/// Load a roster file, or the base game debaters when no file is given.
pub fn load_roster(path: Option<&Path>) -> Result<Roster, String> {
    let Some(path) = path else {
        return Ok(Roster::standard());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let roster = Roster::from_json(&json).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), debaters = roster.len(), "loaded roster");
    Ok(roster)
}

pub fn parse_faction(s: &str) -> Result<Faction, String> {
    Faction::parse(s).ok_or_else(|| format!("unknown side '{s}' (expected protestant or catholic)"))
}

pub fn parse_zone(s: &str) -> Result<Zone, String> {
    Zone::parse(s).ok_or_else(|| {
        let zones: Vec<String> = Zone::ALL.iter().map(|z| z.to_string().to_lowercase()).collect();
        format!("unknown zone '{s}' (expected one of: {})", zones.join(", "))
    })
}

pub fn parse_event(s: &str) -> Result<EventCard, String> {
    EventCard::parse(s).ok_or_else(|| {
        let keys: Vec<&str> = EventCard::ALL.iter().map(|c| c.key()).collect();
        format!(
            "{} (expected one of: {})",
            MechError::UnknownEvent(s.to_string()),
            keys.join(", ")
        )
    })
}

fn status(debater: &Debater) -> &'static str {
    if !debater.available {
        if debater.optional { "optional" } else { "out" }
    } else if debater.committed {
        "committed"
    } else {
        "ready"
    }
}

/// Render debaters as a table.
pub fn roster_table<'a>(debaters: impl IntoIterator<Item = &'a Debater>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Side", "Zone", "Rating", "Turn", "Status", "Leader"]);
    for d in debaters {
        table.add_row(vec![
            d.name.clone(),
            d.faction.to_string(),
            d.zone.to_string(),
            d.rating.to_string(),
            d.turn.to_string(),
            status(d).to_string(),
            if d.leading_figure { "yes" } else { "" }.to_string(),
        ]);
    }
    table
}

/// Faces of a roll separated by spaces.
pub fn faces(roll: &RollResult) -> String {
    let faces: Vec<String> = roll.faces.iter().map(u32::to_string).collect();
    faces.join(" ")
}

/// Print the dice of both sides, the pool adjustments, and the summary.
pub fn print_outcome(
    names: Sides<&str>,
    pools: Sides<&PoolBreakdown>,
    outcome: &Outcome,
    summary: &str,
) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Side", "Debater", "Dice", "Roll", "Re-roll", "Hits"]);
    for faction in Faction::ALL {
        let side = outcome.side(faction);
        table.add_row(vec![
            faction.to_string(),
            names.get(faction).to_string(),
            side.pool.to_string(),
            faces(&side.initial),
            side.reroll.as_ref().map_or_else(|| "-".to_string(), faces),
            side.hits().to_string(),
        ]);
    }
    println!("{table}");

    for faction in Faction::ALL {
        for line in pool_lines(faction, pools.get(faction)) {
            println!("  {}", line.dimmed());
        }
    }
    println!();

    let summary = if outcome.is_tie() {
        summary.yellow()
    } else if outcome.burned {
        summary.red().bold()
    } else {
        summary.green()
    };
    println!("  {summary}");
}
