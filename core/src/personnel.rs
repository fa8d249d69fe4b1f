//! Personnel records and the readiness invariant.
//!
//! RULE: readiness is derived. Every path that changes health or
//! training must end in `recompute_readiness()`; nothing stores a
//! readiness value that disagrees with round((health + training) / 2).

use crate::types::{PersonnelId, Score};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Deployed,
    Leave,
    Medical,
    /// Only ever produced on the simulator's working copy.
    #[serde(rename = "Simulated Unavailable")]
    SimulatedUnavailable,
}

impl Availability {
    /// States a stored record may hold.
    pub const STORED: [Availability; 4] = [
        Availability::Available,
        Availability::Deployed,
        Availability::Leave,
        Availability::Medical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available            => "Available",
            Self::Deployed             => "Deployed",
            Self::Leave                => "Leave",
            Self::Medical              => "Medical",
            Self::SimulatedUnavailable => "Simulated Unavailable",
        }
    }

    /// Parse a stored state by its label. The simulation-only state is
    /// never accepted from outside.
    pub fn parse(label: &str) -> Option<Self> {
        Self::STORED.into_iter().find(|a| a.label() == label.trim())
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRecord {
    pub id:                   PersonnelId,
    pub name:                 String,
    pub rank:                 String,
    pub role:                 String,
    pub skills:               Vec<String>,
    pub health_score:         Score,
    pub training_score:       Score,
    pub readiness:            Score,
    pub availability:         Availability,
    pub years_of_service:     u32,
    pub deployment_status:    String,
    pub last_training_date:   String,
    pub medical_restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location:             Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number:         Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email:                Option<String>,
}

pub const MAX_SCORE: Score = 100;

/// round((health + training) / 2), halves rounding up.
pub fn readiness_of(health: Score, training: Score) -> Score {
    ((health as u64 + training as u64 + 1) / 2) as Score
}

impl PersonnelRecord {
    /// Clamp both scores into 0–100, then re-derive readiness.
    pub fn normalize_scores(&mut self) {
        self.health_score = self.health_score.min(MAX_SCORE);
        self.training_score = self.training_score.min(MAX_SCORE);
        self.recompute_readiness();
    }

    pub fn recompute_readiness(&mut self) {
        self.readiness = readiness_of(self.health_score, self.training_score);
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelUpdate {
    #[serde(default)] pub name:                 Option<String>,
    #[serde(default)] pub rank:                 Option<String>,
    #[serde(default)] pub role:                 Option<String>,
    #[serde(default)] pub skills:               Option<Vec<String>>,
    #[serde(default)] pub health_score:         Option<Score>,
    #[serde(default)] pub training_score:       Option<Score>,
    #[serde(default)] pub availability:         Option<Availability>,
    #[serde(default)] pub years_of_service:     Option<u32>,
    #[serde(default)] pub deployment_status:    Option<String>,
    #[serde(default)] pub last_training_date:   Option<String>,
    #[serde(default)] pub medical_restrictions: Option<Vec<String>>,
    #[serde(default)] pub location:             Option<String>,
    #[serde(default)] pub phone_number:         Option<String>,
    #[serde(default)] pub email:                Option<String>,
}

impl PersonnelUpdate {
    pub fn availability(availability: Availability) -> Self {
        Self { availability: Some(availability), ..Self::default() }
    }

    /// Names of the fields this update touches, for log details.
    pub fn touched_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("rank", self.rank.is_some()),
            ("role", self.role.is_some()),
            ("skills", self.skills.is_some()),
            ("health_score", self.health_score.is_some()),
            ("training_score", self.training_score.is_some()),
            ("availability", self.availability.is_some()),
            ("years_of_service", self.years_of_service.is_some()),
            ("deployment_status", self.deployment_status.is_some()),
            ("last_training_date", self.last_training_date.is_some()),
            ("medical_restrictions", self.medical_restrictions.is_some()),
            ("location", self.location.is_some()),
            ("phone_number", self.phone_number.is_some()),
            ("email", self.email.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, set)| set.then_some(field))
        .collect()
    }

    /// Apply to `record`. Scores are clamped to 0–100 and readiness is
    /// re-derived whenever health or training changed.
    pub fn apply_to(&self, record: &mut PersonnelRecord) {
        if let Some(v) = &self.name { record.name = v.clone(); }
        if let Some(v) = &self.rank { record.rank = v.clone(); }
        if let Some(v) = &self.role { record.role = v.clone(); }
        if let Some(v) = &self.skills { record.skills = v.clone(); }
        if let Some(v) = self.availability {
            // The simulation-only state never reaches the store.
            if v != Availability::SimulatedUnavailable {
                record.availability = v;
            }
        }
        if let Some(v) = self.years_of_service { record.years_of_service = v; }
        if let Some(v) = &self.deployment_status { record.deployment_status = v.clone(); }
        if let Some(v) = &self.last_training_date { record.last_training_date = v.clone(); }
        if let Some(v) = &self.medical_restrictions { record.medical_restrictions = v.clone(); }
        if let Some(v) = &self.location { record.location = Some(v.clone()); }
        if let Some(v) = &self.phone_number { record.phone_number = Some(v.clone()); }
        if let Some(v) = &self.email { record.email = Some(v.clone()); }

        if let Some(v) = self.health_score { record.health_score = v.min(MAX_SCORE); }
        if let Some(v) = self.training_score { record.training_score = v.min(MAX_SCORE); }
        if self.health_score.is_some() || self.training_score.is_some() {
            record.recompute_readiness();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_rounds_half_up() {
        assert_eq!(readiness_of(92, 88), 90);
        assert_eq!(readiness_of(85, 94), 90); // 89.5
        assert_eq!(readiness_of(76, 92), 84);
        assert_eq!(readiness_of(0, 1), 1);
        assert_eq!(readiness_of(Score::MAX, Score::MAX), Score::MAX);
    }

    #[test]
    fn availability_labels_round_trip_for_stored_states() {
        for a in Availability::STORED {
            assert_eq!(Availability::parse(a.label()), Some(a));
        }
        assert_eq!(Availability::parse("Simulated Unavailable"), None);
        assert_eq!(Availability::parse("Retired"), None);
    }
}
