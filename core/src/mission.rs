//! Missions and the checks that guard search and assignment.

use crate::{
    error::{MusterError, MusterResult},
    scoring::MissionRequirement,
    types::{PersonnelId, Timestamp},
};
use serde::{Deserialize, Serialize};

pub const UNNAMED_MISSION: &str = "Unnamed Mission";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MissionStatus {
    Planning,
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mission {
    pub id:                 String,
    pub name:               String,
    pub requirement:        MissionRequirement,
    pub assigned_personnel: Vec<PersonnelId>,
    pub status:             MissionStatus,
    pub created_at:         Timestamp,
}

impl Mission {
    pub fn new(name: &str, requirement: MissionRequirement, now: Timestamp) -> Self {
        let name = name.trim();
        Self {
            id:                 uuid::Uuid::new_v4().to_string(),
            name:               if name.is_empty() { UNNAMED_MISSION.to_string() } else { name.to_string() },
            requirement,
            assigned_personnel: Vec::new(),
            status:             MissionStatus::Planning,
            created_at:         now,
        }
    }
}

/// A search needs a role or at least one skill.
pub fn validate_search(requirement: &MissionRequirement) -> MusterResult<()> {
    if requirement.is_empty() {
        return Err(MusterError::EmptyRequirement);
    }
    Ok(())
}

/// An assignment needs at least one selected candidate.
pub fn validate_selection(selected: &[PersonnelId]) -> MusterResult<()> {
    if selected.is_empty() {
        return Err(MusterError::NoCandidatesSelected);
    }
    Ok(())
}

/// Log line for a candidate search.
pub fn search_details(requirement: &MissionRequirement) -> String {
    format!(
        "Searched candidates for {} with skills: {}",
        requirement.role().unwrap_or("any role"),
        requirement.required_skills.join(", ")
    )
}
