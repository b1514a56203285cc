use crate::error::AppError;
use crate::handlers::analysis;

use googletest::prelude::*;

#[test]
fn given_no_index_when_listing_analysis_then_all_reports_with_verdicts() {
    let value = analysis(None).unwrap();

    let reports = value.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["kind"], "swing");
    assert_eq!(reports[0]["verdict"], "Excellent technique!");
    assert_eq!(reports[1]["kind"], "pitch");
    assert_eq!(reports[1]["verdict"], "Good form with room for improvement");
}

#[test]
fn given_index_when_showing_analysis_then_single_report_with_mechanics() {
    let value = analysis(Some(0)).unwrap();

    assert_that!(value["mechanics"].as_array().map(Vec::len), some(eq(4)));
    assert_eq!(value["mechanics"][0]["name"], "Stance");
}

#[test]
fn given_out_of_range_index_when_showing_analysis_then_not_found() {
    let err = analysis(Some(9)).unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert!(err.user_message().contains("index 9"));
}
