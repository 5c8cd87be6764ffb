//! CLI frontend for the Here I Stand debate engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hs_core::{Faction, Zone};
use hs_mechanics::EventCard;
use tracing_subscriber::EnvFilter;

use commands::{PolicySource, parse_event, parse_faction, parse_zone};

#[derive(Parser)]
#[command(
    name = "hs",
    about = "Here I Stand: theological debate resolution",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List debaters and their status
    Roster {
        /// Only debaters of this side (protestant, catholic)
        #[arg(short, long, value_parser = parse_faction)]
        faction: Option<Faction>,

        /// Only debaters who debate in this zone (papal debaters always do)
        #[arg(short, long, value_parser = parse_zone)]
        zone: Option<Zone>,

        /// Only debaters who have entered play by this turn
        #[arg(short, long)]
        turn: Option<u32>,

        /// JSON roster file (default: the base game debaters)
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },

    /// Resolve one debate between two named debaters
    Resolve {
        /// Protestant debater
        #[arg(short, long)]
        protestant: String,

        /// Catholic debater
        #[arg(short, long)]
        catholic: String,

        /// Attacking side (protestant, catholic)
        #[arg(short, long, value_parser = parse_faction)]
        attacker: Option<Faction>,

        /// Current game turn (default: the last turn, so every debater is eligible)
        #[arg(short, long, default_value_t = commands::FINAL_TURN)]
        turn: u32,

        /// Active event card; repeat for several
        #[arg(short, long, value_parser = parse_event)]
        event: Vec<EventCard>,

        /// Free extra dice for the Protestant side
        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u32).range(0..=commands::MAX_BONUS_DICE)
        )]
        protestant_bonus: u32,

        /// Free extra dice for the Catholic side
        #[arg(
            long,
            default_value_t = 0,
            value_parser = clap::value_parser!(u32).range(0..=commands::MAX_BONUS_DICE)
        )]
        catholic_bonus: u32,

        /// Signed modifier for the Protestant side
        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            value_parser = commands::modifier_parser()
        )]
        protestant_modifier: i32,

        /// Signed modifier for the Catholic side
        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            value_parser = commands::modifier_parser()
        )]
        catholic_modifier: i32,

        /// Adjacency bonus for the Protestant side
        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            value_parser = commands::modifier_parser()
        )]
        protestant_adjacency: i32,

        /// Adjacency bonus for the Catholic side
        #[arg(
            long,
            default_value_t = 0,
            allow_negative_numbers = true,
            value_parser = commands::modifier_parser()
        )]
        catholic_adjacency: i32,

        /// Preset policy (standard, auto_resolve, house_rules)
        #[arg(long, conflicts_with = "policy")]
        preset: Option<String>,

        /// JSON policy file
        #[arg(long)]
        policy: Option<PathBuf>,

        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON roster file (default: the base game debaters)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a debate from bare ratings
    Raw {
        /// Protestant debater rating
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=commands::MAX_RATING)
        )]
        protestant: u32,

        /// Catholic debater rating
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=commands::MAX_RATING)
        )]
        catholic: u32,

        /// Attacking side (protestant, catholic)
        #[arg(short, long, value_parser = parse_faction)]
        attacker: Option<Faction>,

        /// The defender has already debated this round
        #[arg(long)]
        defender_committed: bool,

        /// Preset policy (standard, auto_resolve, house_rules)
        #[arg(long, conflicts_with = "policy")]
        preset: Option<String>,

        /// JSON policy file
        #[arg(long)]
        policy: Option<PathBuf>,

        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive debate console
    Session {
        /// RNG seed for reproducible selection and dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting game turn
        #[arg(short, long, default_value_t = 1)]
        turn: u32,

        /// Preset policy (standard, auto_resolve, house_rules)
        #[arg(long, conflicts_with = "policy")]
        preset: Option<String>,

        /// JSON policy file
        #[arg(long)]
        policy: Option<PathBuf>,

        /// JSON roster file (default: the base game debaters)
        #[arg(short, long)]
        roster: Option<PathBuf>,
    },

    /// List policy presets, or print one as JSON
    Policy {
        /// Preset to print
        name: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            process::exit(1);
        }
        e.exit()
    });
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roster {
            faction,
            zone,
            turn,
            roster,
        } => commands::roster::run(roster.as_deref(), faction, zone, turn),
        Commands::Resolve {
            protestant,
            catholic,
            attacker,
            turn,
            event,
            protestant_bonus,
            catholic_bonus,
            protestant_modifier,
            catholic_modifier,
            protestant_adjacency,
            catholic_adjacency,
            preset,
            policy,
            seed,
            roster,
            json,
        } => commands::resolve::run(&commands::resolve::Args {
            protestant,
            catholic,
            attacker,
            turn,
            events: event,
            bonus_dice: (protestant_bonus, catholic_bonus),
            modifier: (protestant_modifier, catholic_modifier),
            adjacency: (protestant_adjacency, catholic_adjacency),
            policy: PolicySource::new(preset, policy),
            seed,
            roster,
            json,
        }),
        Commands::Raw {
            protestant,
            catholic,
            attacker,
            defender_committed,
            preset,
            policy,
            seed,
            json,
        } => commands::raw::run(
            (protestant, catholic),
            attacker,
            defender_committed,
            &PolicySource::new(preset, policy),
            seed,
            json,
        ),
        Commands::Session {
            seed,
            turn,
            preset,
            policy,
            roster,
        } => commands::session::run(
            seed,
            turn,
            &PolicySource::new(preset, policy),
            roster.as_deref(),
        ),
        Commands::Policy { name } => commands::policy::run(name.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
