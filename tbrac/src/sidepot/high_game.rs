//! High game and high series.

use super::errors::{SidepotError, SidepotResult};
use super::models::{HighGameResult, Leader};
use super::totals::{bowler_totals, leader};
use crate::scoring::GameScore;

/// Highest total in one game
///
/// # Errors
///
/// * `SidepotError::NoScores` - Nobody has a score for `game_number`
pub fn high_game_winner(scores: &[GameScore], game_number: u32) -> SidepotResult<HighGameResult> {
    let leader = leader(
        scores
            .iter()
            .filter(|s| s.game_number == game_number)
            .map(|s| (s.bowler_id, s.total)),
    )
    .ok_or(SidepotError::NoScores(game_number))?;

    Ok(HighGameResult {
        game_number,
        leader,
    })
}

/// High game winners for games `1..=games`
pub fn all_high_game_winners(scores: &[GameScore], games: u32) -> SidepotResult<Vec<HighGameResult>> {
    (1..=games)
        .map(|game| high_game_winner(scores, game))
        .collect()
}

/// Highest cumulative total across all games
///
/// # Errors
///
/// * `SidepotError::EmptyScoreSet` - No scores at all
pub fn high_series_winner(scores: &[GameScore]) -> SidepotResult<Leader> {
    leader(bowler_totals(scores)).ok_or(SidepotError::EmptyScoreSet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores() -> Vec<GameScore> {
        vec![
            GameScore::new(1, 1, 1, 200, 20),
            GameScore::new(2, 1, 1, 230, 0),
            GameScore::new(3, 1, 1, 190, 30),
            GameScore::new(1, 1, 2, 180, 20),
            GameScore::new(2, 1, 2, 170, 0),
            GameScore::new(3, 1, 2, 210, 30),
        ]
    }

    #[test]
    fn test_high_game_outright() {
        let result = high_game_winner(&scores(), 2).unwrap();
        assert_eq!(result.leader.winner(), Some(3));
        assert_eq!(result.leader.score(), 240);
    }

    #[test]
    fn test_high_game_tie_reports_all() {
        // Game 1 totals: 220, 230, 220
        let mut scores = scores();
        scores[1] = GameScore::new(2, 1, 1, 200, 0);
        let result = high_game_winner(&scores, 1).unwrap();
        assert_eq!(
            result.leader,
            Leader::Tie {
                bowler_ids: vec![1, 3],
                score: 220
            }
        );
    }

    #[test]
    fn test_high_game_no_scores() {
        assert_eq!(
            high_game_winner(&scores(), 3).unwrap_err(),
            SidepotError::NoScores(3)
        );
    }

    #[test]
    fn test_all_high_game_winners() {
        let results = all_high_game_winners(&scores(), 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].leader.winner(), Some(2));
    }

    #[test]
    fn test_high_series() {
        // Totals: 420, 400, 460
        let leader = high_series_winner(&scores()).unwrap();
        assert_eq!(
            leader,
            Leader::Outright {
                bowler_id: 3,
                score: 460
            }
        );
    }

    #[test]
    fn test_high_series_empty() {
        assert_eq!(
            high_series_winner(&[]).unwrap_err(),
            SidepotError::EmptyScoreSet
        );
    }
}
