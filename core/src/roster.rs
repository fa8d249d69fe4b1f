//! The personnel store.
//!
//! RULE: only two mutation paths exist.
//!   - `apply_update`: patch one record, matched by id.
//!   - `replace_all`:  swap the whole collection (import, restore).
//! Manual edits, mission assignment and the live feed all go through
//! `apply_update`, so the readiness invariant is enforced in one place.

use crate::{
    error::{MusterError, MusterResult},
    event::RosterEvent,
    personnel::{Availability, PersonnelRecord, PersonnelUpdate},
    types::Score,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<PersonnelRecord>,
}

impl Roster {
    pub fn new(records: Vec<PersonnelRecord>) -> Self {
        let mut roster = Self::default();
        roster.replace_all(records);
        roster
    }

    pub fn all(&self) -> &[PersonnelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PersonnelRecord> {
        self.records.iter().find(|p| p.id == id)
    }

    /// Patch the record whose id matches. Last write wins.
    pub fn apply_update(&mut self, id: &str, update: &PersonnelUpdate) -> MusterResult<RosterEvent> {
        let record = self
            .records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| MusterError::PersonnelNotFound { id: id.to_string() })?;
        update.apply_to(record);
        Ok(RosterEvent::PersonnelUpdated {
            id:     id.to_string(),
            fields: update.touched_fields().into_iter().map(String::from).collect(),
        })
    }

    /// Replace the whole collection, clamping scores and re-deriving
    /// readiness on the way in.
    pub fn replace_all(&mut self, mut records: Vec<PersonnelRecord>) {
        for record in &mut records {
            if record.availability == Availability::SimulatedUnavailable {
                record.availability = Availability::Available;
            }
            record.normalize_scores();
        }
        self.records = records;
    }

    pub fn count_where(&self, pred: impl Fn(&PersonnelRecord) -> bool) -> usize {
        self.records.iter().filter(|p| pred(p)).count()
    }

    /// Distinct roles in first-seen order.
    pub fn roles(&self) -> Vec<String> {
        distinct(self.records.iter().map(|p| p.role.as_str()))
    }

    /// Distinct skills in first-seen order.
    pub fn skills(&self) -> Vec<String> {
        distinct(self.records.iter().flat_map(|p| p.skills.iter().map(String::as_str)))
    }

    /// Distinct availability states in first-seen order.
    pub fn availabilities(&self) -> Vec<Availability> {
        let mut seen = Vec::new();
        for p in &self.records {
            if !seen.contains(&p.availability) {
                seen.push(p.availability);
            }
        }
        seen
    }

    pub fn filter(&self, filter: &RosterFilter) -> Vec<&PersonnelRecord> {
        self.records.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn stats(&self) -> RosterStats {
        let total = self.records.len();
        let mean = |f: fn(&PersonnelRecord) -> Score| -> Score {
            if total == 0 {
                return 0;
            }
            let sum: u64 = self.records.iter().map(|p| f(p) as u64).sum();
            (sum as f64 / total as f64).round() as Score
        };

        let mut role_distribution: Vec<(String, usize)> = Vec::new();
        for p in &self.records {
            match role_distribution.iter_mut().find(|(r, _)| *r == p.role) {
                Some((_, n)) => *n += 1,
                None => role_distribution.push((p.role.clone(), 1)),
            }
        }

        let training_band = |lo: Score, hi: Score| {
            self.count_where(|p| p.training_score >= lo && p.training_score < hi)
        };

        RosterStats {
            total,
            available:      self.count_where(|p| p.availability == Availability::Available),
            deployed:       self.count_where(|p| p.availability == Availability::Deployed),
            on_leave:       self.count_where(|p| p.availability == Availability::Leave),
            medical:        self.count_where(|p| p.availability == Availability::Medical),
            mean_readiness: mean(|p| p.readiness),
            mean_health:    mean(|p| p.health_score),
            mean_training:  mean(|p| p.training_score),
            role_distribution,
            training_bands: TrainingBands {
                excellent: training_band(90, Score::MAX),
                good:      training_band(80, 90),
                fair:      training_band(70, 80),
                poor:      training_band(0, 70),
            },
        }
    }
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|s| s == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Roster list filter. Empty / `None` fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFilter {
    /// Case-insensitive substring over name, rank and skills.
    #[serde(default)]
    pub search:       String,
    #[serde(default)]
    pub role:         Option<String>,
    #[serde(default)]
    pub availability: Option<Availability>,
}

impl RosterFilter {
    pub fn matches(&self, p: &PersonnelRecord) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = p.name.to_lowercase().contains(&needle)
            || p.rank.to_lowercase().contains(&needle)
            || p.skills.iter().any(|s| s.to_lowercase().contains(&needle));
        let matches_role = self.role.as_deref().map_or(true, |r| r.is_empty() || p.role == r);
        let matches_availability = self.availability.map_or(true, |a| p.availability == a);
        matches_search && matches_role && matches_availability
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterStats {
    pub total:             usize,
    pub available:         usize,
    pub deployed:          usize,
    pub on_leave:          usize,
    pub medical:           usize,
    pub mean_readiness:    Score,
    pub mean_health:       Score,
    pub mean_training:     Score,
    pub role_distribution: Vec<(String, usize)>,
    pub training_bands:    TrainingBands,
}

/// Head counts by training score: ≥90, 80–89, 70–79, <70.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingBands {
    pub excellent: usize,
    pub good:      usize,
    pub fair:      usize,
    pub poor:      usize,
}
