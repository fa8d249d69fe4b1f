//! Roster queries and the readiness invariant across every mutation path.

use chrono::{TimeZone, Utc};
use muster_core::{
    clock::ManualClock,
    engine::Desk,
    error::MusterError,
    personnel::{readiness_of, Availability, PersonnelUpdate},
    roster::{Roster, RosterFilter},
    seed_roster::seed_roster,
};

fn assert_readiness_derived(roster: &Roster) {
    for p in roster.all() {
        assert_eq!(
            p.readiness,
            readiness_of(p.health_score, p.training_score),
            "readiness drifted for {}",
            p.id
        );
    }
}

#[test]
fn stats_summarise_the_seed_roster() {
    let stats = Roster::new(seed_roster()).stats();
    assert_eq!(stats.total, 10);
    assert_eq!(
        (stats.available, stats.deployed, stats.on_leave, stats.medical),
        (7, 1, 1, 1)
    );
    assert_eq!(stats.mean_readiness, 88);
    assert_eq!(stats.mean_health, 86);
    assert_eq!(stats.mean_training, 90);
    assert_eq!(stats.role_distribution[0], ("Pilot".to_string(), 3));
    assert_eq!(stats.training_bands.excellent, 5);
    assert_eq!(stats.training_bands.good, 5);
    assert_eq!(stats.training_bands.fair + stats.training_bands.poor, 0);
}

#[test]
fn empty_roster_stats_are_zero() {
    let stats = Roster::default().stats();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.mean_readiness, 0);
    assert!(stats.role_distribution.is_empty());
}

#[test]
fn filter_combines_search_role_and_availability() {
    let roster = Roster::new(seed_roster());

    let by_skill = RosterFilter { search: "RADAR".into(), ..Default::default() };
    let ids: Vec<_> = roster.filter(&by_skill).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["007"]);

    let pilots_available = RosterFilter {
        role: Some("Pilot".into()),
        availability: Some(Availability::Available),
        ..Default::default()
    };
    let ids: Vec<_> = roster.filter(&pilots_available).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["001", "008"]);

    assert_eq!(roster.filter(&RosterFilter::default()).len(), 10);
}

#[test]
fn distinct_values_keep_first_seen_order() {
    let roster = Roster::new(seed_roster());
    assert_eq!(&roster.roles()[..3], ["Pilot", "Engineer", "Medic"]);
    assert_eq!(
        roster.availabilities(),
        vec![
            Availability::Available,
            Availability::Deployed,
            Availability::Leave,
            Availability::Medical,
        ]
    );
    assert_eq!(roster.skills().len(), 30);
}

#[test]
fn manual_updates_keep_readiness_derived() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
    let mut desk = Desk::build_test(Box::new(clock)).expect("build test desk");
    desk.login("commander", "admin123").unwrap();

    let update = PersonnelUpdate {
        health_score: Some(140),
        training_score: Some(71),
        ..Default::default()
    };
    desk.update_personnel("006", &update).unwrap();
    let p = desk.roster().get("006").unwrap();
    assert_eq!(p.health_score, 100);
    assert_eq!(p.readiness, 86);
    assert_readiness_derived(desk.roster());

    let log = desk.activity_log().unwrap();
    assert_eq!(log[0].action, "Update Personnel");
    assert_eq!(log[0].details, "Updated personnel 006");
}

#[test]
fn simulated_state_never_reaches_the_store() {
    let mut roster = Roster::new(seed_roster());
    roster
        .apply_update("001", &PersonnelUpdate::availability(Availability::SimulatedUnavailable))
        .unwrap();
    assert_eq!(roster.get("001").unwrap().availability, Availability::Available);

    let mut records = seed_roster();
    records[1].availability = Availability::SimulatedUnavailable;
    records[1].readiness = 3;
    roster.replace_all(records);
    assert_eq!(roster.get("002").unwrap().availability, Availability::Available);
    assert_readiness_derived(&roster);
}

#[test]
fn updating_an_unknown_id_fails() {
    let mut roster = Roster::new(seed_roster());
    let err = roster
        .apply_update("nope", &PersonnelUpdate::availability(Availability::Leave))
        .unwrap_err();
    assert!(matches!(err, MusterError::PersonnelNotFound { .. }));
}
