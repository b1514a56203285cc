use crate::{AnalysisReport, UploadKind, verdict};

use googletest::prelude::*;

#[test]
fn given_score_at_thresholds_when_judged_then_verdict_matches_band() {
    assert_that!(verdict(10.0), eq("Excellent technique!"));
    assert_that!(verdict(8.5), eq("Excellent technique!"));
    assert_that!(verdict(8.4), eq("Good form with room for improvement"));
    assert_that!(verdict(7.0), eq("Good form with room for improvement"));
    assert_that!(verdict(6.9), eq("Focus on fundamentals"));
}

#[test]
fn given_demo_catalogue_when_listed_then_swing_then_pitch() {
    let reports = AnalysisReport::demo_reports();

    assert_that!(reports.len(), eq(2));
    assert_that!(reports[0].kind, eq(UploadKind::Swing));
    assert_that!(reports[0].score, eq(8.5));
    assert_that!(reports[0].verdict(), eq("Excellent technique!"));
    assert_that!(reports[1].kind, eq(UploadKind::Pitch));
    assert_that!(reports[1].verdict(), eq("Good form with room for improvement"));
}

#[test]
fn given_demo_report_when_inspected_then_has_drills_and_mechanics() {
    for report in AnalysisReport::demo_reports() {
        assert_that!(report.drills.len(), eq(3));
        assert_that!(report.mechanics.len(), eq(4));
        assert!(!report.strengths.is_empty());
        assert!(!report.improvements.is_empty());
    }
}
