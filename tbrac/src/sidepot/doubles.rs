//! Mystery and love doubles.

use super::errors::{SidepotError, SidepotResult};
use super::models::{DoublesTeam, Pair, Pairings};
use super::totals::{bowler_totals, total_for};
use crate::scoring::GameScore;
use crate::shuffle::Shuffler;
use crate::types::BowlerId;
use std::collections::HashSet;

/// Fewest bowlers that can form a doubles team
pub const MIN_DOUBLES_ENTRANTS: usize = 2;

/// Draw random doubles partners
///
/// Bowlers are shuffled and consecutive bowlers paired. With an odd count the
/// last bowler after the shuffle sits out.
///
/// # Errors
///
/// * `SidepotError::InsufficientEntrants` - Fewer than two bowlers
pub fn mystery_pairings(bowlers: &[BowlerId], shuffler: &mut Shuffler) -> SidepotResult<Pairings> {
    if bowlers.len() < MIN_DOUBLES_ENTRANTS {
        return Err(SidepotError::InsufficientEntrants {
            needed: MIN_DOUBLES_ENTRANTS,
            current: bowlers.len(),
        });
    }

    let shuffled = shuffler.shuffled(bowlers);
    let teams = shuffled
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();
    let unpaired = shuffled.chunks_exact(2).remainder().first().copied();

    Ok(Pairings { teams, unpaired })
}

/// Reject teams with a bowler paired with themselves or on two teams
pub fn validate_teams(teams: &[Pair]) -> SidepotResult<()> {
    let mut seen = HashSet::with_capacity(teams.len() * 2);
    for &(a, b) in teams {
        if a == b {
            return Err(SidepotError::SelfPairing(a));
        }
        for id in [a, b] {
            if !seen.insert(id) {
                return Err(SidepotError::DuplicatePartner(id));
            }
        }
    }
    Ok(())
}

/// Rank teams by combined total, highest first
///
/// Equal teams keep the order they were given in. A bowler with no scores
/// contributes zero.
pub fn doubles_standings(teams: &[Pair], scores: &[GameScore]) -> Vec<DoublesTeam> {
    let totals = bowler_totals(scores);

    let mut standings: Vec<DoublesTeam> = teams
        .iter()
        .map(|&(bowler_a, bowler_b)| DoublesTeam {
            bowler_a,
            bowler_b,
            combined_score: total_for(&totals, bowler_a) + total_for(&totals, bowler_b),
        })
        .collect();

    standings.sort_by(|a, b| b.combined_score.cmp(&a.combined_score));
    standings
}

/// Standings for partners chosen by the bowlers themselves
pub fn love_doubles_standings(teams: &[Pair], scores: &[GameScore]) -> SidepotResult<Vec<DoublesTeam>> {
    validate_teams(teams)?;
    Ok(doubles_standings(teams, scores))
}
