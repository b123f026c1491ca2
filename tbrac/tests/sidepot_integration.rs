//! Sidepot lifecycle tests over a shared event score sheet.

use tbrac::scoring::{GameScore, ScoringType};
use tbrac::sidepot::{
    Competition, Eliminator, HighGame, HighSeries, LoveDoubles, MysteryDoubles, Sidepot,
    SidepotError, SidepotKind, SidepotOutcome, SidepotStatus, Sweeper,
};
use tbrac::{BowlerId, Pins, Shuffler};

const EVENT: i64 = 42;

/// Three games for four bowlers, handicap 10 for bowler 4
fn score_sheet() -> Vec<GameScore> {
    let games: [(BowlerId, [Pins; 3], Pins); 4] = [
        (1, [200, 180, 220], 0),
        (2, [190, 210, 170], 0),
        (3, [150, 240, 160], 0),
        (4, [205, 150, 200], 10),
    ];

    let mut scores: Vec<GameScore> = games
        .iter()
        .flat_map(|&(bowler_id, pins, handicap)| {
            pins.into_iter().enumerate().map(move |(idx, p)| {
                GameScore::new(bowler_id, EVENT, idx as u32 + 1, p, handicap)
            })
        })
        .collect();
    // Another event's score must never leak in
    scores.push(GameScore::new(1, EVENT + 1, 1, 300, 0));
    scores
}

fn pot(competition: impl Into<Competition>, scoring_type: ScoringType) -> Sidepot {
    [1, 2, 3, 4]
        .into_iter()
        .fold(
            Sidepot::new(7, EVENT, "Thursday pot", competition.into(), 5, scoring_type).unwrap(),
            |pot, id| pot.add_entry(id, None).unwrap(),
        )
}

#[test]
fn test_high_game_per_game_with_handicap() {
    let pot = pot(HighGame { games: 3 }, ScoringType::Handicap);
    let SidepotOutcome::HighGame(results) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected high game results");
    };

    assert_eq!(results.len(), 3);
    // Game 1: bowler 4 shoots 205 + 10
    assert_eq!(results[0].leader.winner(), Some(4));
    assert_eq!(results[0].leader.score(), 215);
    assert_eq!(results[1].leader.winner(), Some(3));
    assert_eq!(results[2].leader.winner(), Some(1));
}

#[test]
fn test_scratch_strips_handicap() {
    let pot = pot(HighGame { games: 1 }, ScoringType::Scratch);
    let SidepotOutcome::HighGame(results) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected high game results");
    };
    assert_eq!(results[0].leader.winner(), Some(4));
    assert_eq!(results[0].leader.score(), 205);
}

#[test]
fn test_high_series_ignores_other_events() {
    let pot = pot(HighSeries {}, ScoringType::Handicap);
    let SidepotOutcome::HighSeries(leader) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected high series leader");
    };
    // 600 for bowler 1; the 300 from the other event is not counted
    assert_eq!(leader.winner(), Some(1));
    assert_eq!(leader.score(), 600);
}

#[test]
fn test_sweeper_standings_rank_totals() {
    let pot = pot(Sweeper {}, ScoringType::Handicap);
    let SidepotOutcome::Sweeper(standings) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected sweeper standings");
    };

    let order: Vec<(BowlerId, Pins, u32)> = standings
        .iter()
        .map(|s| (s.bowler_id, s.total_pins, s.position))
        .collect();
    assert_eq!(
        order,
        vec![(1, 600, 1), (4, 585, 2), (2, 570, 3), (3, 550, 4)]
    );
}

#[test]
fn test_eliminator_cuts_each_game() {
    let pot = pot(Eliminator::new(3), ScoringType::Handicap);
    let SidepotOutcome::Eliminator(rounds) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected eliminator rounds");
    };

    // Game 1 totals 200, 190, 150, 215: cut at rank 2 is 190
    assert_eq!(rounds[0].cut_score, 190);
    assert_eq!(rounds[0].still_in, vec![1, 2, 4]);
    assert_eq!(rounds[0].eliminated, vec![3]);
    // Game 2 totals 180, 210, 160: cut at rank 1 is 180
    assert_eq!(rounds[1].still_in, vec![1, 2]);
    // Game 3 totals 220, 170: cut at rank 1 is 170
    assert_eq!(rounds[2].still_in, vec![1, 2]);

    let pot = pot.begin().unwrap().apply_eliminator(&rounds).unwrap();
    assert_eq!(pot.still_in(), vec![1, 2]);
    assert_eq!(pot.entry(3).and_then(|e| e.eliminated_in()), Some(1));
    assert_eq!(pot.entry(4).and_then(|e| e.eliminated_in()), Some(2));
}

#[test]
fn test_mystery_doubles_draw_then_resolve() {
    let pot = pot(MysteryDoubles::default(), ScoringType::Handicap);
    assert_eq!(
        pot.resolve(&score_sheet()).unwrap_err(),
        SidepotError::PairingsNotDrawn
    );

    let pot = pot.draw_mystery_pairs(&mut Shuffler::seeded(5)).unwrap();
    assert_eq!(pot.status, SidepotStatus::InProgress);
    for entry in &pot.entries {
        let partner = entry.partner_id.unwrap();
        assert_eq!(pot.entry(partner).and_then(|e| e.partner_id), Some(entry.bowler_id));
    }

    let SidepotOutcome::Doubles(teams) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected doubles standings");
    };
    assert_eq!(teams.len(), 2);
    // Every pin of the four series lands on exactly one team
    let combined: Pins = teams.iter().map(|t| t.combined_score).sum();
    assert_eq!(combined, 600 + 570 + 550 + 585);
    assert!(teams[0].combined_score >= teams[1].combined_score);
}

#[test]
fn test_love_doubles_rejects_bad_teams() {
    let pot = pot(
        LoveDoubles {
            teams: vec![(1, 2), (2, 3)],
        },
        ScoringType::Handicap,
    );
    assert_eq!(
        pot.resolve(&score_sheet()).unwrap_err(),
        SidepotError::DuplicatePartner(2)
    );

    let pot = pot_with_teams(vec![(1, 3), (2, 4)]);
    let SidepotOutcome::Doubles(teams) = pot.resolve(&score_sheet()).unwrap() else {
        panic!("expected doubles standings");
    };
    assert_eq!((teams[0].bowler_a, teams[0].bowler_b), (2, 4));
    assert_eq!(teams[0].combined_score, 1155);
}

fn pot_with_teams(teams: Vec<(BowlerId, BowlerId)>) -> Sidepot {
    pot(LoveDoubles { teams }, ScoringType::Handicap)
}

#[test]
fn test_wrong_kind_operations() {
    let pot = pot(Sweeper {}, ScoringType::Handicap);
    assert_eq!(
        pot.draw_mystery_pairs(&mut Shuffler::seeded(1)).unwrap_err(),
        SidepotError::WrongKind {
            expected: SidepotKind::MysteryDoubles,
            got: SidepotKind::Sweeper,
        }
    );
    assert!(matches!(
        pot.eliminate(1, 1),
        Err(SidepotError::WrongKind { .. })
    ));
}

#[test]
fn test_completed_sidepot_is_frozen() {
    let pot = pot(Sweeper {}, ScoringType::Handicap)
        .sync_scores(&score_sheet())
        .unwrap();
    assert_eq!(pot.entry(1).map(|e| e.scores.clone()), Some(vec![200, 180, 220]));
    assert_eq!(pot.entry(4).map(|e| e.total()), Some(585));

    let done = pot.complete().unwrap();
    assert_eq!(done.prize_pool(), 20);
    assert_eq!(done.complete().unwrap_err(), SidepotError::Completed);
    assert_eq!(done.sync_scores(&score_sheet()).unwrap_err(), SidepotError::Completed);
    assert!(done.add_entry(9, None).is_err());
}

#[test]
fn test_sidepot_serde_shape() {
    let pot = pot(HighGame { games: 2 }, ScoringType::Scratch);
    let json = serde_json::to_value(&pot).unwrap();
    assert_eq!(json["competition"]["type"], "high_game");
    assert_eq!(json["scoring_type"], "scratch");
    assert_eq!(json["entries"][0]["status"]["state"], "active");

    let back: Sidepot = serde_json::from_value(json).unwrap();
    assert_eq!(back, pot);
}
