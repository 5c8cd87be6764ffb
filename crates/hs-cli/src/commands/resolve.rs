use std::path::PathBuf;

use hs_core::Faction;
use hs_mechanics::{DebateSession, EventCard, ResolveRequest, SessionConfig, Sides};

use super::PolicySource;

pub struct Args {
    pub protestant: String,
    pub catholic: String,
    pub attacker: Option<Faction>,
    pub turn: u32,
    pub events: Vec<EventCard>,
    pub bonus_dice: (u32, u32),
    pub modifier: (i32, i32),
    pub adjacency: (i32, i32),
    pub policy: PolicySource,
    pub seed: Option<u64>,
    pub roster: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: &Args) -> Result<(), String> {
    let roster = super::load_roster(args.roster.as_deref())?;
    let mut config = SessionConfig::default()
        .with_policy(args.policy.load()?)
        .with_turn(args.turn);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = DebateSession::new(roster, config);

    for &card in &args.events {
        session.toggle_event(card, true);
    }
    for (faction, name) in [
        (Faction::Protestant, &args.protestant),
        (Faction::Catholic, &args.catholic),
    ] {
        let id = session
            .roster()
            .find_id_by_name(name)
            .ok_or_else(|| format!("unknown debater: {name}"))?;
        session.select(faction, id).map_err(|e| e.to_string())?;
    }
    session.set_attacker(args.attacker);

    let request = ResolveRequest {
        bonus_dice: Sides::new(args.bonus_dice.0, args.bonus_dice.1),
        modifier: Sides::new(args.modifier.0, args.modifier.1),
        adjacency: Sides::new(args.adjacency.0, args.adjacency.1),
    };
    let report = session.resolve(&request).map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    super::print_outcome(
        Sides::new(report.protestant.as_str(), report.catholic.as_str()),
        Sides::new(&report.protestant_pool, &report.catholic_pool),
        &report.outcome,
        &report.summary,
    );
    Ok(())
}
