//! Insights and per-person recommendations.

use chrono::{TimeZone, Utc};
use muster_core::{
    alerts::Severity,
    clock::ManualClock,
    engine::Desk,
    error::MusterError,
    insights::{generate_insights, recommend, RecommendationLevel},
    seed_roster::seed_roster,
    types::Timestamp,
};

fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

#[test]
fn five_insights_in_fixed_order() {
    let insights = generate_insights(&seed_roster());
    let ids: Vec<_> = insights.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["attrition", "training", "health", "deployment", "skills"]);

    assert_eq!(insights[0].severity, Severity::Info);
    assert_eq!(insights[3].severity, Severity::Warning);
    assert_eq!(insights[3].description, "70% deployment capacity currently available");
    assert_eq!(insights[4].severity, Severity::Warning);
    assert_eq!(
        insights[4].impact,
        "Night Ops: 1 qualified, Emergency Medicine: 1 qualified, Electronic Warfare: 1 qualified"
    );
}

#[test]
fn empty_roster_still_yields_insights() {
    let insights = generate_insights(&[]);
    assert_eq!(insights.len(), 5);
}

#[test]
fn recommendations_pick_the_most_pressing_issue() {
    let roster = seed_roster();
    let thompson = &roster[0];
    assert_eq!(recommend(thompson, t0()).level, RecommendationLevel::OnTrack);

    // Davis last trained 2024-10-15, more than 90 days before t0.
    let davis = &roster[4];
    assert_eq!(recommend(davis, t0()).level, RecommendationLevel::DueSoon);

    let mut weak = thompson.clone();
    weak.training_score = 60;
    weak.recompute_readiness();
    let rec = recommend(&weak, t0());
    assert_eq!(rec.level, RecommendationLevel::ActionRequired);
    assert!(rec.text.starts_with("Immediate training required"));
}

#[test]
fn insights_are_gated() {
    let mut desk = Desk::build_test(Box::new(ManualClock::new(t0()))).expect("build test desk");
    desk.login("hr", "hr123").unwrap();
    assert_eq!(desk.insights().unwrap().len(), 5);

    desk.login("medical", "med123").unwrap();
    assert!(matches!(desk.insights(), Err(MusterError::PermissionDenied { .. })));
    assert_eq!(
        desk.recommendation("005").unwrap().level,
        RecommendationLevel::DueSoon
    );
}
