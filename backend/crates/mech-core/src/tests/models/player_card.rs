use crate::{PlayerCard, ProgressSummary};

use googletest::prelude::*;

#[test]
fn given_demo_card_when_built_then_stats_and_achievements_present() {
    let card = PlayerCard::demo();

    assert_that!(card.position, eq("Shortstop"));
    assert_that!(card.stats.total_analyses, eq(24));
    assert_that!(card.stats.average_score, eq(8.2));
    assert_that!(card.achievements.len(), eq(4));
}

#[test]
fn given_demo_card_when_reading_monthly_progress_then_scores_rise_in_order() {
    let months: Vec<&str> = PlayerCard::demo()
        .monthly_progress
        .iter()
        .map(|m| m.month)
        .collect();
    let scores: Vec<f64> = PlayerCard::demo()
        .monthly_progress
        .iter()
        .map(|m| m.score)
        .collect();

    assert_eq!(months, vec!["Mar", "Apr", "May"]);
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn given_demo_progress_when_built_then_dashboard_tiles() {
    let progress = ProgressSummary::demo();

    assert_that!(progress.videos_analyzed, eq(12));
    assert_that!(progress.average_rating, eq(8.5));
}
