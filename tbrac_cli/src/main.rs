//! Command-line tools for bowling brackets, sidepots and payouts.
//!
//! Every command reads its input from flags or JSON files, runs one library
//! computation and prints the resulting record as JSON.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Error, Result, bail};
use log::{info, warn};
use pico_args::Arguments;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tbrac::{
    Bracket, BracketSize, BowlerId, CoreConfig, GameScore, Money, Pins, ScoringType,
    config::parse_bracket_size, payout::BracketPurchase,
};

const HELP: &str = "\
Bracket, sidepot and payout calculations for bowling events

USAGE:
  tbrac <COMMAND> [OPTIONS]

COMMANDS:
  bracket       Draw a bracket, optionally playing it from a score sheet
                  --ids 1,2,3         Entrant IDs (or --entrants N for 1..=N)
                  --size N            Bracket size: 4, 8, 12, 16, 32 or 64
                  --previous FILE     Bracket JSON whose pairings should not repeat
                  --scores FILE       Score sheet JSON; round N is decided by game N
  payouts       Payout tiers for a prize pool
                  --pool AMOUNT       Prize pool in whole dollars
                  --entrants N        Number of entrants
                  --ratios 0.6,0.4    Custom ratios instead of the standard table
  refunds       Refunds for bracket entries that did not fill a bracket
                  --purchases FILE    JSON list of {bowler_id, brackets_paid}
                  --fee AMOUNT        Fee per bracket entry
                  --size N            Bracket size
                  --entries N         Entries sold [default: sum of purchases]
  financials    Collected money, lineage and prize pool for an event
                  --entrants N --fee AMOUNT [--lineage AMOUNT] [--expenses AMOUNT]
  sidepot       Resolve a sidepot from a score sheet
                  --format NAME       high_game, high_series, mystery_doubles,
                                      love_doubles, eliminator or sweeper
                  --scores FILE       Score sheet JSON
                  --games N           Games bowled [default: 3]
                  --teams 1-2,3-4     Love doubles teams
                  --scratch           Use raw pins instead of handicap totals
  handicap      Handicaps for rolling averages
                  --averages 150,185  Averages in pins

OPTIONS:
  --seed N                 Fixed shuffle seed  [default: env TBRAC_SEED or random]
  --compact                Print JSON on one line

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  TBRAC_HANDICAP_BASE          Handicap base in pins [default: 220]
  TBRAC_HANDICAP_PERCENTAGE    Handicap percentage [default: 0.9]
  TBRAC_MAX_HANDICAP           Optional handicap cap
  TBRAC_ELIMINATION_PERCENTAGE Eliminator cut [default: 0.5]
  TBRAC_REMATCH_ATTEMPTS       Draws tried to avoid rematches [default: 100]
  TBRAC_BRACKET_SIZE           Default bracket size [default: 8]
  TBRAC_SEED                   Fixed shuffle seed
  RUST_LOG                     Log filter (e.g. debug)
";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

fn bracket_size(pargs: &mut Arguments, config: &CoreConfig) -> Result<BracketSize> {
    Ok(pargs
        .opt_value_from_fn("--size", parse_bracket_size)?
        .unwrap_or(config.bracket_size))
}

fn run_bracket(pargs: &mut Arguments, config: &CoreConfig, compact: bool) -> Result<()> {
    let size = bracket_size(pargs, config)?;
    let ids: Option<Vec<BowlerId>> = pargs.opt_value_from_fn("--ids", commands::parse_list)?;
    let count: Option<usize> = pargs.opt_value_from_str("--entrants")?;
    let previous: Option<PathBuf> = pargs.opt_value_from_str("--previous")?;
    let scores: Option<PathBuf> = pargs.opt_value_from_str("--scores")?;

    let entrants = match (ids, count) {
        (Some(ids), _) => ids,
        (None, Some(n)) => (1..=n as BowlerId).collect(),
        (None, None) => bail!("bracket needs --ids or --entrants"),
    };

    let previous: Option<Bracket> = previous.as_deref().map(read_json).transpose()?;
    let mut bracket = commands::draw_bracket(&entrants, size, previous.as_ref(), config)?;
    info!(
        "Drew {}-entrant bracket of size {} ({} matches)",
        entrants.len(),
        size,
        bracket.matches.len()
    );

    if let Some(path) = scores {
        let sheet: Vec<GameScore> = read_json(&path)?;
        bracket = commands::play_bracket(&bracket, &sheet)?;
        if let Some(champion) = bracket.champion() {
            info!("Champion: bowler {}", champion);
        }
    }

    print_json(&bracket, compact)
}

fn run_payouts(pargs: &mut Arguments, compact: bool) -> Result<()> {
    let pool: Money = pargs.value_from_str("--pool")?;
    let entrants: usize = pargs.value_from_str("--entrants")?;
    let ratios: Option<Vec<f64>> = pargs.opt_value_from_fn("--ratios", commands::parse_list)?;

    let structure = commands::payouts(pool, entrants, ratios.as_deref())?;
    print_json(&structure, compact)
}

fn run_refunds(pargs: &mut Arguments, config: &CoreConfig, compact: bool) -> Result<()> {
    let path: PathBuf = pargs.value_from_str("--purchases")?;
    let fee: Money = pargs.value_from_str("--fee")?;
    let size = bracket_size(pargs, config)?;
    let entries: Option<usize> = pargs.opt_value_from_str("--entries")?;

    let purchases: Vec<BracketPurchase> = read_json(&path)?;
    let refunds = commands::refunds(&purchases, fee, size, entries)?;
    print_json(&refunds, compact)
}

fn run_financials(pargs: &mut Arguments, compact: bool) -> Result<()> {
    let entrants: usize = pargs.value_from_str("--entrants")?;
    let fee: Money = pargs.value_from_str("--fee")?;
    let lineage: Money = pargs.opt_value_from_str("--lineage")?.unwrap_or(0);
    let expenses: Money = pargs.opt_value_from_str("--expenses")?.unwrap_or(0);

    let financials = commands::financials(entrants, fee, lineage, expenses)?;
    print_json(&financials, compact)
}

fn run_sidepot(pargs: &mut Arguments, config: &CoreConfig, compact: bool) -> Result<()> {
    let format: String = pargs.value_from_str("--format")?;
    let path: PathBuf = pargs.value_from_str("--scores")?;
    let games: u32 = pargs.opt_value_from_str("--games")?.unwrap_or(3);
    let teams = pargs
        .opt_value_from_fn("--teams", commands::parse_teams)?
        .unwrap_or_default();
    let scoring_type = if pargs.contains("--scratch") {
        ScoringType::Scratch
    } else {
        ScoringType::Handicap
    };

    let competition = commands::competition(&format, games, teams, config)?;
    let sheet: Vec<GameScore> = read_json(&path)?;
    let outcome = commands::resolve_sidepot(competition, scoring_type, &sheet, config)?;
    print_json(&outcome, compact)
}

fn run_handicap(pargs: &mut Arguments, config: &CoreConfig, compact: bool) -> Result<()> {
    let averages: Vec<Pins> = pargs.value_from_fn("--averages", commands::parse_list)?;
    let handicaps = commands::handicaps(&averages, config);
    print_json(&handicaps, compact)
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let Some(command) = pargs.subcommand()? else {
        print!("{HELP}");
        std::process::exit(2);
    };

    env_logger::builder().format_target(false).init();

    let mut config = CoreConfig::from_env()?;
    if let Some(seed) = pargs.opt_value_from_str("--seed")? {
        config.seed = Some(seed);
    }
    let compact = pargs.contains("--compact");

    match command.as_str() {
        "bracket" => run_bracket(&mut pargs, &config, compact)?,
        "payouts" => run_payouts(&mut pargs, compact)?,
        "refunds" => run_refunds(&mut pargs, &config, compact)?,
        "financials" => run_financials(&mut pargs, compact)?,
        "sidepot" => run_sidepot(&mut pargs, &config, compact)?,
        "handicap" => run_handicap(&mut pargs, &config, compact)?,
        other => bail!("Unknown command '{}'; see --help", other),
    }

    let unused = pargs.finish();
    if !unused.is_empty() {
        warn!("Ignored arguments: {:?}", unused);
    }

    Ok(())
}
