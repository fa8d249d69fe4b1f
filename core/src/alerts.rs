//! Threshold alerts over the current roster.
//!
//! Regenerated wholesale on every roster change. One alert per rule at
//! most; ids are per category so the UI can key on them.

use crate::{
    personnel::{Availability, PersonnelRecord},
    types::{Score, Timestamp},
};
use serde::{Deserialize, Serialize};

pub const TRAINING_THRESHOLD: Score = 80;
pub const TRAINING_CRITICAL_COUNT: usize = 3;
pub const HEALTH_THRESHOLD: Score = 75;
pub const UNAVAILABLE_PCT_THRESHOLD: i64 = 30;
pub const DEPLOYED_SHARE_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id:          String,
    pub severity:    Severity,
    pub title:       String,
    pub description: String,
    pub timestamp:   Timestamp,
}

impl Alert {
    fn new(id: &str, severity: Severity, title: &str, description: String, now: Timestamp) -> Self {
        Self {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            description,
            timestamp: now,
        }
    }
}

pub fn generate_alerts(personnel: &[PersonnelRecord], now: Timestamp) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let total = personnel.len();
    if total == 0 {
        return alerts;
    }

    let needs_training = personnel.iter().filter(|p| p.training_score < TRAINING_THRESHOLD).count();
    if needs_training > 0 {
        let severity = if needs_training > TRAINING_CRITICAL_COUNT {
            Severity::Critical
        } else {
            Severity::Warning
        };
        alerts.push(Alert::new(
            "training-alert",
            severity,
            "Training Requirements",
            format!("{needs_training} personnel require immediate training updates"),
            now,
        ));
    }

    let health_issues = personnel.iter().filter(|p| p.health_score < HEALTH_THRESHOLD).count();
    if health_issues > 0 {
        alerts.push(Alert::new(
            "health-alert",
            Severity::Warning,
            "Health & Fitness",
            format!("{health_issues} personnel have health scores below {HEALTH_THRESHOLD}"),
            now,
        ));
    }

    let unavailable = personnel.iter().filter(|p| !p.is_available()).count();
    let unavailable_pct = (unavailable as f64 / total as f64 * 100.0).round() as i64;
    if unavailable_pct > UNAVAILABLE_PCT_THRESHOLD {
        alerts.push(Alert::new(
            "readiness-alert",
            Severity::Critical,
            "Readiness Impact",
            format!("{unavailable_pct}% of personnel are unavailable, impacting unit readiness"),
            now,
        ));
    }

    let deployed = personnel
        .iter()
        .filter(|p| p.availability == Availability::Deployed)
        .count();
    if deployed as f64 > total as f64 * DEPLOYED_SHARE_THRESHOLD {
        alerts.push(Alert::new(
            "deployment-alert",
            Severity::Warning,
            "Deployment Rotation",
            format!("{deployed} of {total} personnel deployed; rotation planning may be required"),
            now,
        ));
    }

    alerts
}
