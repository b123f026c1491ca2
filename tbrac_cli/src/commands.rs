//! Command implementations.
//!
//! Each function takes already-parsed input and hands back a library record;
//! `main` handles argument parsing, file reading and printing.

use anyhow::{Context, Result, anyhow, bail};
use log::{info, warn};
use std::str::FromStr;
use tbrac::{
    Bracket, BracketSize, BowlerId, CoreConfig, GameScore, Money, Pins, ScoringType,
    bracket::generate_with_history,
    payout::{
        BracketPurchase, EventFinancials, PayoutStructure, RefundResult, calculate_bracket_refunds,
        event_financials, payout_structure,
    },
    scoring::{calculate_handicap, ensure_valid},
    sidepot::{
        Competition, Eliminator, HighGame, HighSeries, LoveDoubles, MysteryDoubles, Pair, Sidepot,
        SidepotKind, SidepotOutcome, Sweeper, bowler_totals,
    },
};

/// Parse a comma-separated list such as `1,2,3` or `0.6,0.4`
pub fn parse_list<T>(raw: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<T>()
                .map_err(|e| anyhow!("Invalid list item '{}': {}", item, e))
        })
        .collect()
}

/// Parse doubles teams written as `1-2,3-4`
pub fn parse_teams(raw: &str) -> Result<Vec<Pair>> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| -> Result<Pair> {
            let (a, b) = item
                .split_once('-')
                .ok_or_else(|| anyhow!("Team '{}' must look like A-B", item))?;
            Ok((a.trim().parse()?, b.trim().parse()?))
        })
        .collect()
}

/// Sidepot format names accepted on the command line
pub const SIDEPOT_FORMATS: [&str; 6] = [
    "high_game",
    "high_series",
    "mystery_doubles",
    "love_doubles",
    "eliminator",
    "sweeper",
];

/// Build a competition from its command-line name
pub fn competition(
    format: &str,
    games: u32,
    teams: Vec<Pair>,
    config: &CoreConfig,
) -> Result<Competition> {
    let competition = match format {
        "high_game" => HighGame { games }.into(),
        "high_series" => HighSeries {}.into(),
        "mystery_doubles" => MysteryDoubles::default().into(),
        "love_doubles" => LoveDoubles { teams }.into(),
        "eliminator" => Eliminator {
            games,
            elimination_percentage: config.elimination_percentage,
        }
        .into(),
        "sweeper" => Sweeper {}.into(),
        other => bail!(
            "Unknown sidepot format '{}' (expected one of {})",
            other,
            SIDEPOT_FORMATS.join(", ")
        ),
    };
    Ok(competition)
}

/// Draw a bracket, redrawing to dodge pairings from `previous` when given
pub fn draw_bracket(
    entrants: &[BowlerId],
    size: BracketSize,
    previous: Option<&Bracket>,
    config: &CoreConfig,
) -> Result<Bracket> {
    let mut shuffler = config.shuffler();

    let drawn = match previous {
        Some(previous) => {
            let outcome = generate_with_history(
                entrants,
                size,
                &previous.matches,
                config.rematch_attempts,
                &mut shuffler,
            )?;
            info!(
                "Drew bracket in {} attempt(s) with {} rematch(es)",
                outcome.attempts, outcome.collisions
            );
            outcome.bracket
        }
        None => Bracket::generate(entrants, size, &mut shuffler)?,
    };

    Ok(drawn.advance_byes()?.bracket)
}

fn game_total(scores: &[GameScore], bowler_id: BowlerId, game: u32) -> Result<Pins> {
    scores
        .iter()
        .find(|s| s.bowler_id == bowler_id && s.game_number == game)
        .map(|s| s.total)
        .ok_or_else(|| anyhow!("No score for bowler {} in game {}", bowler_id, game))
}

/// Play a bracket from a score sheet, deciding round N with game N
///
/// Stops at the first match that cannot be decided (missing score or tie)
/// and reports it; results recorded up to then are kept.
pub fn play_bracket(bracket: &Bracket, scores: &[GameScore]) -> Result<Bracket> {
    for score in scores {
        ensure_valid(score)?;
    }

    let mut bracket = bracket.clone();
    while let Some((match_id, round, (a, b))) = bracket
        .matches
        .iter()
        .find(|m| m.is_ready())
        .and_then(|m| m.pairing().map(|pair| (m.id, m.round, pair)))
    {
        let decided = game_total(scores, a, round)
            .and_then(|score_a| Ok((score_a, game_total(scores, b, round)?)))
            .and_then(|(score_a, score_b)| {
                bracket
                    .record_result(match_id, score_a, score_b)
                    .with_context(|| format!("Match {} (round {})", match_id, round))
            });

        match decided {
            Ok(advance) => bracket = advance.bracket,
            Err(e) => {
                warn!("Bracket stopped: {:#}", e);
                break;
            }
        }
    }

    Ok(bracket)
}

/// Payout tiers for a pool, standard or custom
pub fn payouts(pool: Money, entrants: usize, ratios: Option<&[f64]>) -> Result<PayoutStructure> {
    Ok(payout_structure(pool, entrants, ratios)?)
}

/// Refunds for entries beyond the last full bracket
pub fn refunds(
    purchases: &[BracketPurchase],
    fee: Money,
    size: BracketSize,
    entries: Option<usize>,
) -> Result<Vec<RefundResult>> {
    let sold = purchases.iter().map(|p| p.brackets_paid as usize).sum();
    Ok(calculate_bracket_refunds(
        purchases,
        fee,
        size,
        entries.unwrap_or(sold),
    )?)
}

/// Event totals
pub fn financials(
    entrants: usize,
    fee: Money,
    lineage: Money,
    expenses: Money,
) -> Result<EventFinancials> {
    Ok(event_financials(entrants, fee, lineage, expenses)?)
}

/// Handicap for each average under the configured base and percentage
pub fn handicaps(averages: &[Pins], config: &CoreConfig) -> Vec<(Pins, Pins)> {
    averages
        .iter()
        .map(|&average| (average, calculate_handicap(average, &config.handicap)))
        .collect()
}

/// Resolve a sidepot over a score sheet
///
/// Every bowler on the sheet is entered. The sheet must cover a single event.
pub fn resolve_sidepot(
    competition: Competition,
    scoring_type: ScoringType,
    scores: &[GameScore],
    config: &CoreConfig,
) -> Result<SidepotOutcome> {
    let Some(first) = scores.first() else {
        bail!("Score sheet is empty");
    };
    if let Some(other) = scores.iter().find(|s| s.event_id != first.event_id) {
        bail!(
            "Score sheet mixes events {} and {}",
            first.event_id,
            other.event_id
        );
    }
    for score in scores {
        ensure_valid(score)?;
    }

    let mut sidepot = Sidepot::new(0, first.event_id, "cli", competition, 0, scoring_type)?;
    for (bowler_id, _) in bowler_totals(scores) {
        sidepot = sidepot.add_entry(bowler_id, None)?;
    }
    if sidepot.kind() == SidepotKind::MysteryDoubles {
        sidepot = sidepot.draw_mystery_pairs(&mut config.shuffler())?;
    }

    Ok(sidepot.resolve(scores)?)
}
