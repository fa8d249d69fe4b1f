//! What-if readiness simulation.

use chrono::{TimeZone, Utc};
use muster_core::{
    clock::ManualClock,
    engine::Desk,
    seed_roster::seed_roster,
    simulation::{max_unavailable, simulate, CapabilityStatus, SimulationParams},
};

fn params(n: usize, role: Option<&str>) -> SimulationParams {
    SimulationParams { unavailable_count: n, role: role.map(String::from) }
}

#[test]
fn zero_unavailable_changes_nothing() {
    let roster = seed_roster();
    let result = simulate(&roster, &params(0, None));
    assert_eq!(result.readiness_impact, 0);
    assert_eq!(result.capacity_impact, 0);
    assert_eq!(result.affected_personnel, 0);
    assert!(result.selected.is_empty());
    assert_eq!(result.remaining_capable, 7);
    assert!(result.role_impact.iter().all(|r| r.impact == 0 && !r.critical));
}

#[test]
fn most_ready_available_people_are_taken_first() {
    let roster = seed_roster();
    let result = simulate(&roster, &params(3, None));

    // 004 (93), 008 (92), then the first of three 90s in roster order.
    assert_eq!(result.selected, vec!["004", "008", "001"]);
    assert_eq!(result.affected_personnel, 3);
    assert_eq!(result.capacity_impact, 30);
    assert_eq!(result.remaining_capable, 4);
    assert_eq!(result.original_readiness, 88);
    assert_eq!(result.new_readiness, 89);

    let pilots = result.role_impact.iter().find(|r| r.role == "Pilot").unwrap();
    assert_eq!((pilots.original_count, pilots.new_count), (2, 0));
    assert_eq!(pilots.impact, 100);
    assert!(pilots.critical);
}

#[test]
fn selection_is_clamped_to_half_the_roster() {
    let roster = seed_roster();
    assert_eq!(max_unavailable(roster.len()), 5);
    let result = simulate(&roster, &params(50, None));
    assert_eq!(result.affected_personnel, 5);
    assert!(result.selected.len() <= max_unavailable(roster.len()));
}

#[test]
fn role_filter_limits_the_pool() {
    let roster = seed_roster();
    let result = simulate(&roster, &params(5, Some("Pilot")));
    assert_eq!(result.selected, vec!["008", "001"]);

    let pilot = result.mission_impact.iter().find(|m| m.role == "Pilot").unwrap();
    assert_eq!((pilot.available, pilot.total), (0, 3));
    assert_eq!(pilot.capability, 0);
    assert_eq!(pilot.status, CapabilityStatus::Critical);

    let medic = result.mission_impact.iter().find(|m| m.role == "Medic").unwrap();
    assert_eq!((medic.available, medic.total), (0, 1));
}

#[test]
fn critical_roles_are_always_reported() {
    let result = simulate(&[], &params(3, None));
    let roles: Vec<_> = result.mission_impact.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["Pilot", "Medic", "Engineer"]);
    assert!(result.mission_impact.iter().all(|m| m.capability == 100));
    assert_eq!(result.affected_personnel, 0);
}

#[test]
fn simulation_never_touches_the_roster() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
    let mut desk = Desk::build_test(Box::new(clock)).expect("build test desk");
    desk.login("commander", "admin123").unwrap();

    let before = desk.roster().all().to_vec();
    let result = desk.simulate(&params(5, None)).unwrap();
    assert_eq!(result.affected_personnel, 5);
    assert_eq!(desk.roster().all(), before.as_slice());
}
