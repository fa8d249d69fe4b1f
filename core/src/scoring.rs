//! Candidate scoring for mission assignment.
//!
//! Fixed weights, not configurable:
//!   role match   40
//!   skills       30  (share of required skills held)
//!   readiness    20  (readiness × 0.2)
//!   experience   10  (2 per year of service, capped)
//!
//! Anyone not Available scores 0 and never reaches the ranking.

use crate::{
    personnel::PersonnelRecord,
    types::Score,
};
use serde::{Deserialize, Serialize};

pub const ROLE_MATCH_POINTS: Score = 40;
pub const SKILL_MATCH_POINTS: f64 = 30.0;
pub const READINESS_WEIGHT: f64 = 0.2;
pub const POINTS_PER_YEAR: Score = 2;
pub const EXPERIENCE_CAP: Score = 10;
pub const MAX_RANKED_CANDIDATES: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MissionRequirement {
    #[serde(default)]
    pub required_role:   Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl MissionRequirement {
    /// Neither a role nor a skill was chosen.
    pub fn is_empty(&self) -> bool {
        self.role().is_none() && self.required_skills.is_empty()
    }

    /// The required role, treating an empty string as "any role".
    pub fn role(&self) -> Option<&str> {
        self.required_role.as_deref().filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub person:    PersonnelRecord,
    pub score:     Score,
    pub rationale: String,
}

/// Score one person against the requirement.
pub fn score_candidate(requirement: &MissionRequirement, person: &PersonnelRecord) -> Candidate {
    if !person.is_available() {
        return Candidate {
            person:    person.clone(),
            score:     0,
            rationale: format!("Not available ({})", person.availability),
        };
    }

    let mut score = 0;
    let mut factors = Vec::with_capacity(4);

    if requirement.role() == Some(person.role.as_str()) {
        score += ROLE_MATCH_POINTS;
        factors.push(format!("Role match (+{ROLE_MATCH_POINTS})"));
    }

    // An empty skill list contributes nothing: the denominator floors at 1
    // but so does the numerator at 0.
    let required = requirement.required_skills.len();
    let held = requirement
        .required_skills
        .iter()
        .filter(|s| person.has_skill(s))
        .count();
    let skill_points = (held as f64 / required.max(1) as f64 * SKILL_MATCH_POINTS).round() as Score;
    if skill_points > 0 {
        score += skill_points;
        factors.push(format!("Skills match: {held}/{required} (+{skill_points})"));
    }

    let readiness_points = (person.readiness as f64 * READINESS_WEIGHT).round() as Score;
    score += readiness_points;
    factors.push(format!("Readiness {}% (+{readiness_points})", person.readiness));

    let experience_points = (person.years_of_service.saturating_mul(POINTS_PER_YEAR)).min(EXPERIENCE_CAP);
    score += experience_points;
    factors.push(format!(
        "Experience {} years (+{experience_points})",
        person.years_of_service
    ));

    Candidate {
        person:    person.clone(),
        score:     score.min(100),
        rationale: factors.join(", "),
    }
}

/// Score everyone, drop zero scores, stable-sort descending, keep the top five.
pub fn rank_candidates(
    requirement: &MissionRequirement,
    personnel:   &[PersonnelRecord],
) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = personnel
        .iter()
        .map(|p| score_candidate(requirement, p))
        .filter(|c| c.score > 0)
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_RANKED_CANDIDATES);
    ranked
}
