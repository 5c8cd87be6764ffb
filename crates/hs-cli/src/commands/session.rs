use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use hs_core::Faction;
use hs_mechanics::narrative::pool_lines;
use hs_mechanics::{
    DebateReport, DebateSession, DieSource, EventCard, ResolveRequest, SessionConfig, Sides,
};

use super::{PolicySource, faces, parse_bonus_dice, parse_event, parse_faction, parse_zone};

const HELP: &str = "\
Debate Console Commands:
  attack <side>            pick a random attacker of <side> and a defender
  pick <name>              select a debater for their side
  attacker <side|none>     declare the attacking side
  event [<card> [on|off]]  list event cards, or toggle one
  turn [<n>]               show or set the game turn
  zone [<zone>|any]        show or set the language zone
  enable <name>            bring a debater into play
  disable <name>           take a debater out of play
  roster [<side>]          show the roster
  status                   show the current selection
  resolve [p=N] [c=N]      resolve, with optional bonus dice per side
  reset                    start a new round (everyone uncommitted)
  reset all                restore the starting roster
  quit                     leave the console";

/// Line-oriented front end over a [`DebateSession`].
pub struct Console<D: DieSource> {
    session: DebateSession<D>,
}

impl<D: DieSource> Console<D> {
    pub fn new(session: DebateSession<D>) -> Self {
        Self { session }
    }

    /// Run one command and return its output.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let rest = rest.trim();

        match cmd.to_lowercase().as_str() {
            "attack" => self.do_attack(rest),
            "pick" => self.do_pick(rest),
            "attacker" => self.do_attacker(rest),
            "event" | "events" => self.do_event(rest),
            "turn" => self.do_turn(rest),
            "zone" => self.do_zone(rest),
            "enable" => self.do_set_available(rest, true),
            "disable" => self.do_set_available(rest, false),
            "roster" => self.do_roster(rest),
            "status" => Ok(self.status()),
            "resolve" => self.do_resolve(rest),
            "reset" => self.do_reset(rest),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(format!("unknown command '{other}' (type 'help')")),
        }
    }

    fn do_attack(&mut self, rest: &str) -> Result<String, String> {
        let side = parse_faction(rest)?;
        let picked = self
            .session
            .select_attacker(side)
            .map_err(|e| e.to_string())?;
        let roster = self.session.roster();
        let describe = |faction: Faction| {
            roster
                .get(*picked.get(faction))
                .map(|d| format!("{} ({})", d.name, d.rating))
                .unwrap_or_default()
        };
        Ok(format!(
            "{side} attacks: {} vs {}",
            describe(side),
            describe(side.opponent())
        ))
    }

    fn do_pick(&mut self, rest: &str) -> Result<String, String> {
        if rest.is_empty() {
            return Err("usage: pick <name>".into());
        }
        let debater = self
            .session
            .select_by_name(rest)
            .map_err(|e| e.to_string())?;
        Ok(format!(
            "Selected {} for the {} side.",
            debater.name, debater.faction
        ))
    }

    fn do_attacker(&mut self, rest: &str) -> Result<String, String> {
        if rest.eq_ignore_ascii_case("none") {
            self.session.set_attacker(None);
            return Ok("No attacker declared.".to_string());
        }
        let side = parse_faction(rest)?;
        self.session.set_attacker(Some(side));
        Ok(format!("{side} side attacks."))
    }

    fn do_event(&mut self, rest: &str) -> Result<String, String> {
        if rest.is_empty() {
            let lines: Vec<String> = EventCard::ALL
                .iter()
                .map(|&card| {
                    let on = self.session.events().any(|c| c == card);
                    format!(
                        "  [{}] {card} ({}, {})",
                        if on { "x" } else { " " },
                        card.key(),
                        card.side()
                    )
                })
                .collect();
            return Ok(lines.join("\n"));
        }

        let (name, state) = match rest.rsplit_once(' ') {
            Some((name, state)) if state.eq_ignore_ascii_case("on") => (name, Some(true)),
            Some((name, state)) if state.eq_ignore_ascii_case("off") => (name, Some(false)),
            _ => (rest, None),
        };
        let card = parse_event(name.trim())?;
        let active = state.unwrap_or_else(|| !self.session.events().any(|c| c == card));
        self.session.toggle_event(card, active);
        Ok(format!("{card}: {}", if active { "on" } else { "off" }))
    }

    fn do_turn(&mut self, rest: &str) -> Result<String, String> {
        if !rest.is_empty() {
            let turn: u32 = rest
                .parse()
                .map_err(|_| format!("invalid turn '{rest}'"))?;
            self.session.set_turn(turn);
        }
        Ok(format!("Turn {}.", self.session.turn()))
    }

    fn do_zone(&mut self, rest: &str) -> Result<String, String> {
        if rest.eq_ignore_ascii_case("any") || rest.eq_ignore_ascii_case("all") {
            self.session.set_zone(None);
        } else if !rest.is_empty() {
            self.session.set_zone(Some(parse_zone(rest)?));
        }
        Ok(match self.session.zone() {
            Some(zone) => format!("Zone: {zone}."),
            None => "Zone: any.".to_string(),
        })
    }

    fn do_set_available(&mut self, rest: &str, available: bool) -> Result<String, String> {
        let id = self
            .session
            .roster()
            .find_id_by_name(rest)
            .ok_or_else(|| format!("unknown debater: {rest}"))?;
        self.session
            .set_available(id, available)
            .map_err(|e| e.to_string())?;
        let name = self
            .session
            .roster()
            .get(id)
            .map(|d| d.name.clone())
            .unwrap_or_default();
        Ok(if available {
            format!("{name} is in play.")
        } else {
            format!("{name} is out of play.")
        })
    }

    fn do_roster(&self, rest: &str) -> Result<String, String> {
        let faction = if rest.is_empty() {
            None
        } else {
            Some(parse_faction(rest)?)
        };
        let debaters = self
            .session
            .roster()
            .iter()
            .filter(|d| faction.is_none_or(|f| d.faction == f));
        Ok(super::roster_table(debaters).to_string())
    }

    fn status(&self) -> String {
        let selected = |faction: Faction| {
            self.session
                .selected(faction)
                .map_or_else(|| "-".to_string(), |d| d.name.clone())
        };
        let events: Vec<String> = self.session.events().map(|c| c.to_string()).collect();
        let zone = self
            .session
            .zone()
            .map_or_else(|| "any".to_string(), |z| z.to_string());
        let attacker = self
            .session
            .attacker()
            .map_or_else(|| "none".to_string(), |f| f.to_string());
        [
            format!(
                "Turn: {} | Zone: {zone} | Policy: {}",
                self.session.turn(),
                self.session.policy().name
            ),
            format!("Protestant: {}", selected(Faction::Protestant)),
            format!("Catholic: {}", selected(Faction::Catholic)),
            format!("Attacker: {attacker}"),
            format!(
                "Events: {}",
                if events.is_empty() {
                    "none".to_string()
                } else {
                    events.join(", ")
                }
            ),
        ]
        .join("\n")
    }

    fn do_resolve(&mut self, rest: &str) -> Result<String, String> {
        let mut bonus = Sides::both(0u32);
        for token in rest.split_whitespace() {
            let (side, value) = token
                .split_once('=')
                .ok_or_else(|| format!("expected p=N or c=N, got '{token}'"))?;
            let faction = parse_faction(side)?;
            *bonus.get_mut(faction) = parse_bonus_dice(value)?;
        }
        let request = ResolveRequest {
            bonus_dice: bonus,
            ..ResolveRequest::default()
        };
        let report = self
            .session
            .resolve(&request)
            .map_err(|e| e.to_string())?;
        Ok(report_text(&report))
    }

    fn do_reset(&mut self, rest: &str) -> Result<String, String> {
        match rest.to_lowercase().as_str() {
            "" => {
                self.session.reset_round();
                Ok("New round: every debater is uncommitted.".to_string())
            }
            "all" => {
                self.session.reset_all();
                Ok("Roster restored to its starting state.".to_string())
            }
            other => Err(format!("unknown reset target '{other}'")),
        }
    }
}

fn report_text(report: &DebateReport) -> String {
    let mut lines = Vec::new();
    for faction in Faction::ALL {
        let side = report.outcome.side(faction);
        let mut line = format!(
            "{} ({faction}): {} dice [{}]",
            report.name(faction),
            side.pool,
            faces(&side.initial)
        );
        if let Some(reroll) = &side.reroll {
            line.push_str(&format!(" + re-roll [{}]", faces(reroll)));
        }
        line.push_str(&format!(" => {} hits", side.hits()));
        lines.push(line);
        lines.extend(
            pool_lines(faction, report.pool(faction))
                .into_iter()
                .map(|l| format!("  {l}")),
        );
    }
    lines.push(report.summary.clone());
    lines.join("\n")
}

pub fn run(
    seed: Option<u64>,
    turn: u32,
    policy: &PolicySource,
    roster: Option<&Path>,
) -> Result<(), String> {
    let roster = super::load_roster(roster)?;
    let mut config = SessionConfig::default()
        .with_policy(policy.load()?)
        .with_turn(turn);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let policy_name = config.policy.name.clone();
    let mut console = Console::new(DebateSession::new(roster, config));

    println!("  {} Debate Console", "Starting".bold());
    println!("  Policy: {policy_name} | Turn: {turn}");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    Ok(())
}
