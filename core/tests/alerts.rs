//! Alert generation, directly and as the desk keeps it current.

use chrono::{TimeZone, Utc};
use muster_core::{
    alerts::{generate_alerts, Severity},
    clock::ManualClock,
    engine::Desk,
    personnel::{Availability, PersonnelUpdate},
    seed_roster::seed_roster,
    types::Timestamp,
};

fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
}

fn ids(alerts: &[muster_core::alerts::Alert]) -> Vec<&str> {
    alerts.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn seed_roster_is_quiet() {
    assert!(generate_alerts(&seed_roster(), t0()).is_empty());
}

#[test]
fn empty_roster_has_no_alerts() {
    assert!(generate_alerts(&[], t0()).is_empty());
}

#[test]
fn training_alert_escalates_past_three() {
    let mut roster = seed_roster();
    for p in roster.iter_mut().take(2) {
        p.training_score = 70;
    }
    let alerts = generate_alerts(&roster, t0());
    assert_eq!(ids(&alerts), vec!["training-alert"]);
    assert_eq!(alerts[0].severity, Severity::Warning);
    assert_eq!(alerts[0].description, "2 personnel require immediate training updates");

    for p in roster.iter_mut().take(4) {
        p.training_score = 70;
    }
    let alerts = generate_alerts(&roster, t0());
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[0].timestamp, t0());
}

#[test]
fn health_alert_counts_scores_below_75() {
    let mut roster = seed_roster();
    roster[0].health_score = 74;
    roster[1].health_score = 75;
    let alerts = generate_alerts(&roster, t0());
    assert_eq!(ids(&alerts), vec!["health-alert"]);
    assert_eq!(alerts[0].description, "1 personnel have health scores below 75");
}

#[test]
fn heavy_deployment_raises_readiness_and_rotation_alerts() {
    let mut roster = seed_roster();
    for id in ["001", "002", "004", "006"] {
        roster.iter_mut().find(|p| p.id == id).unwrap().availability = Availability::Deployed;
    }
    let alerts = generate_alerts(&roster, t0());
    assert_eq!(ids(&alerts), vec!["readiness-alert", "deployment-alert"]);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(
        alerts[0].description,
        "70% of personnel are unavailable, impacting unit readiness"
    );
    assert_eq!(
        alerts[1].description,
        "5 of 10 personnel deployed; rotation planning may be required"
    );
}

#[test]
fn desk_regenerates_alerts_on_every_update() {
    let clock = ManualClock::new(t0());
    let mut desk = Desk::build_test(Box::new(clock)).expect("build test desk");
    desk.login("commander", "admin123").unwrap();
    assert!(desk.alerts().is_empty());

    let update = PersonnelUpdate { health_score: Some(60), ..Default::default() };
    desk.update_personnel("004", &update).unwrap();
    assert_eq!(ids(desk.alerts()), vec!["health-alert"]);

    let update = PersonnelUpdate { health_score: Some(89), ..Default::default() };
    desk.update_personnel("004", &update).unwrap();
    assert!(desk.alerts().is_empty());
}
