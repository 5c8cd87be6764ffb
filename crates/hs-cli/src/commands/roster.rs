use std::path::Path;

use hs_core::{Faction, Zone};

pub fn run(
    roster: Option<&Path>,
    faction: Option<Faction>,
    zone: Option<Zone>,
    turn: Option<u32>,
) -> Result<(), String> {
    let roster = super::load_roster(roster)?;

    let mut query = roster.query();
    if let Some(faction) = faction {
        query = query.faction(faction);
    }
    if let Some(zone) = zone {
        query = query.zone(zone);
    }
    if let Some(turn) = turn {
        query = query.turn(turn);
    }
    let results = query.execute();

    if results.is_empty() {
        println!("  No debaters found.");
        return Ok(());
    }

    println!("{}", super::roster_table(results.iter().copied()));
    println!();
    println!("  {} debaters", results.len());

    Ok(())
}
