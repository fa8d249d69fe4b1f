//! Predictive insights and per-person recommendations.
//!
//! Unlike alerts, every insight is always produced; its severity moves
//! with the roster.

use crate::{
    alerts::Severity,
    personnel::{Availability, PersonnelRecord},
    types::{Score, Timestamp},
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Skills the unit should never run short of.
pub const CRITICAL_SKILLS: [&str; 3] = ["Night Ops", "Emergency Medicine", "Electronic Warfare"];
const MIN_SKILL_HOLDERS: usize = 3;
const SENIOR_YEARS: u32 = 15;
const TRAINING_DUE_DAYS: i64 = 90;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub id:             String,
    pub severity:       Severity,
    pub title:          String,
    pub description:    String,
    pub impact:         String,
    pub recommendation: String,
    pub timeline:       String,
}

fn pct(part: usize, total: usize) -> i64 {
    if total == 0 {
        0
    } else {
        (part as f64 / total as f64 * 100.0).round() as i64
    }
}

fn count_where(personnel: &[PersonnelRecord], pred: impl Fn(&PersonnelRecord) -> bool) -> usize {
    personnel.iter().filter(|p| pred(p)).count()
}

pub fn generate_insights(personnel: &[PersonnelRecord]) -> Vec<Insight> {
    let total = personnel.len();
    let senior = count_where(personnel, |p| p.years_of_service >= SENIOR_YEARS);
    let attrition = pct(senior, total);
    let attrition_insight = Insight {
        id:             "attrition".into(),
        severity:       if attrition > 30 {
            Severity::Critical
        } else if attrition > 20 {
            Severity::Warning
        } else {
            Severity::Info
        },
        title:          "Attrition Risk Analysis".into(),
        description:    format!(
            "{attrition}% of personnel have {SENIOR_YEARS}+ years service and may retire within 2 years"
        ),
        impact:         format!("Potential loss of {senior} experienced personnel"),
        recommendation: "Implement knowledge transfer programs and recruitment initiatives".into(),
        timeline:       "24 months".into(),
    };

    let needs_training = count_where(personnel, |p| p.training_score < 80);
    let urgent = count_where(personnel, |p| p.training_score < 70);
    let training_insight = Insight {
        id:             "training".into(),
        severity:       if urgent > 3 {
            Severity::Critical
        } else if needs_training > 5 {
            Severity::Warning
        } else {
            Severity::Info
        },
        title:          "Training Requirements Forecast".into(),
        description:    format!("{needs_training} personnel need training updates, {urgent} urgently"),
        impact:         format!(
            "{}% of force requires training intervention",
            pct(needs_training, total)
        ),
        recommendation: "Schedule immediate training for critical cases, plan quarterly updates for others".into(),
        timeline:       "3-6 months".into(),
    };

    let health_risk = count_where(personnel, |p| p.health_score < 75);
    let avg_health = if total == 0 {
        0
    } else {
        (personnel.iter().map(|p| p.health_score as f64).sum::<f64>() / total as f64).round() as i64
    };
    let health_insight = Insight {
        id:             "health".into(),
        severity:       if health_risk > 3 { Severity::Warning } else { Severity::Info },
        title:          "Health & Fitness Trends".into(),
        description:    format!("{health_risk} personnel below optimal fitness levels"),
        impact:         format!("Unit fitness average: {avg_health}%"),
        recommendation: "Implement unit-wide fitness improvement program".into(),
        timeline:       "6 months".into(),
    };

    let available = count_where(personnel, |p| p.availability == Availability::Available);
    let capacity = pct(available, total);
    let deployment_insight = Insight {
        id:             "deployment".into(),
        severity:       if capacity < 60 {
            Severity::Critical
        } else if capacity < 75 {
            Severity::Warning
        } else {
            Severity::Info
        },
        title:          "Deployment Capacity Forecast".into(),
        description:    format!("{capacity}% deployment capacity currently available"),
        impact:         format!("{available} personnel ready for immediate deployment"),
        recommendation: if capacity < 60 {
            "Consider rotation schedule adjustments".into()
        } else {
            "Maintain current deployment tempo".into()
        },
        timeline:       "1-3 months".into(),
    };

    let gaps: Vec<(&str, usize)> = CRITICAL_SKILLS
        .iter()
        .map(|skill| (*skill, count_where(personnel, |p| p.has_skill(skill))))
        .filter(|(_, holders)| *holders < MIN_SKILL_HOLDERS)
        .collect();
    let skills_insight = Insight {
        id:             "skills".into(),
        severity:       if gaps.is_empty() { Severity::Info } else { Severity::Warning },
        title:          "Critical Skills Analysis".into(),
        description:    if gaps.is_empty() {
            "Critical skills adequately covered".into()
        } else {
            "Shortages detected in critical skill areas".into()
        },
        impact:         gaps
            .iter()
            .map(|(skill, n)| format!("{skill}: {n} qualified"))
            .collect::<Vec<_>>()
            .join(", "),
        recommendation: if gaps.is_empty() {
            "Continue skill development programs".into()
        } else {
            "Prioritize training for critical skill gaps".into()
        },
        timeline:       "6-12 months".into(),
    };

    vec![
        attrition_insight,
        training_insight,
        health_insight,
        deployment_insight,
        skills_insight,
    ]
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationLevel {
    ActionRequired,
    DueSoon,
    OnTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub level: RecommendationLevel,
    pub text:  String,
}

fn training_overdue(last_training_date: &str, now: Timestamp) -> bool {
    NaiveDate::parse_from_str(last_training_date, "%Y-%m-%d")
        .map(|d| d < (now - Duration::days(TRAINING_DUE_DAYS)).date_naive())
        .unwrap_or(false)
}

/// The single most pressing recommendation for one person.
pub fn recommend(person: &PersonnelRecord, now: Timestamp) -> Recommendation {
    const READINESS_FLOOR: Score = 80;
    let (level, text) = if person.training_score < 70 {
        (
            RecommendationLevel::ActionRequired,
            "Immediate training required. Schedule refresher course within 30 days.",
        )
    } else if person.health_score < 75 {
        (
            RecommendationLevel::ActionRequired,
            "Health assessment recommended. Consider fitness improvement program.",
        )
    } else if person.readiness < READINESS_FLOOR {
        (
            RecommendationLevel::ActionRequired,
            "Overall readiness below optimal. Review training and health metrics.",
        )
    } else if training_overdue(&person.last_training_date, now) {
        (
            RecommendationLevel::DueSoon,
            "Training update due soon. Schedule within 60 days to maintain proficiency.",
        )
    } else {
        (
            RecommendationLevel::OnTrack,
            "Personnel performing well. Continue current training schedule.",
        )
    };
    Recommendation { level, text: text.to_string() }
}
