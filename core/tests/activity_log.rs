//! Activity logging through the desk.

use chrono::{TimeZone, Utc};
use muster_core::{
    activity_log::ACTIVITY_LOG_CAPACITY,
    clock::ManualClock,
    engine::Desk,
    error::MusterError,
    exchange::ACTIVITY_COLUMNS,
    permission::Section,
};

fn build() -> (Desk, ManualClock) {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
    let desk = Desk::build_test(Box::new(clock.clone())).expect("build test desk");
    (desk, clock)
}

#[test]
fn nothing_is_logged_without_a_user() {
    let (mut desk, _) = build();
    desk.view_personnel("001").unwrap();
    desk.log_activity("Manual", "should be dropped");
    assert_eq!(desk.activity_log_len(), 0);
}

#[test]
fn log_is_newest_first_and_capped() {
    let (mut desk, clock) = build();
    desk.login("commander", "admin123").unwrap();
    for i in 0..150 {
        clock.advance_secs(1);
        desk.log_activity("Tick", &format!("entry {i}"));
    }

    let entries = desk.activity_log().unwrap();
    assert_eq!(entries.len(), ACTIVITY_LOG_CAPACITY);
    assert_eq!(entries[0].details, "entry 149");
    assert_eq!(entries[99].details, "entry 50");
    assert!(entries.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    assert_eq!(entries[0].user_id, "1");
    assert_eq!(entries[0].username, "Col. Sarah Johnson");
}

#[test]
fn navigation_and_logout_are_recorded() {
    let (mut desk, _) = build();
    desk.login("hr", "hr123").unwrap();
    desk.navigate(Section::Personnel).unwrap();
    {
        let entries = desk.activity_log().unwrap();
        assert_eq!(entries[0].action, "Navigation");
        assert_eq!(entries[0].details, "Accessed personnel page");
    }

    desk.logout().unwrap();
    desk.login("commander", "admin123").unwrap();
    let entries = desk.activity_log().unwrap();
    assert_eq!(entries[0].action, "Authentication");
    assert_eq!(entries[0].details, "User logged out");
    assert_eq!(entries[0].username, "Maj. David Chen");
}

#[test]
fn medical_officer_cannot_read_the_log() {
    let (mut desk, _) = build();
    desk.login("medical", "med123").unwrap();
    let err = desk.activity_log().unwrap_err();
    assert!(matches!(err, MusterError::PermissionDenied { .. }), "got {err:?}");
}

#[test]
fn filtered_log_exports_as_csv() {
    let (mut desk, _) = build();
    desk.login("commander", "admin123").unwrap();
    desk.log_activity("Mission Search", "Searched candidates for Pilot with skills: Night Ops");
    desk.log_activity("Export Data", "Exported 10 personnel records");

    let csv = desk.export_activity_csv("mission", "johnson").unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], ACTIVITY_COLUMNS.join(","));
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with(",Col. Sarah Johnson,Mission Search,Searched candidates for Pilot with skills: Night Ops"));
}
