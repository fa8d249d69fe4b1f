//! Role-based section visibility.
//!
//! Roles are a closed set; sections are mostly closed with an `Other`
//! escape hatch so a new screen can be gated without touching this enum.

use crate::{
    personnel::{Availability, PersonnelRecord},
    types::{PersonnelId, Score},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Commander,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Medical Officer")]
    MedicalOfficer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commander      => "Commander",
            Self::Hr             => "HR",
            Self::MedicalOfficer => "Medical Officer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Dashboard,
    Personnel,
    Missions,
    Simulator,
    Insights,
    Logs,
    Settings,
    Export,
    MedicalDetails,
    HealthScores,
    Other(String),
}

impl Section {
    pub fn from_id(id: &str) -> Self {
        match id {
            "dashboard"       => Self::Dashboard,
            "personnel"       => Self::Personnel,
            "missions"        => Self::Missions,
            "simulator"       => Self::Simulator,
            "insights"        => Self::Insights,
            "logs"            => Self::Logs,
            "settings"        => Self::Settings,
            "export"          => Self::Export,
            "medical-details" => Self::MedicalDetails,
            "health-scores"   => Self::HealthScores,
            other             => Self::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Dashboard      => "dashboard",
            Self::Personnel      => "personnel",
            Self::Missions       => "missions",
            Self::Simulator      => "simulator",
            Self::Insights       => "insights",
            Self::Logs           => "logs",
            Self::Settings       => "settings",
            Self::Export         => "export",
            Self::MedicalDetails => "medical-details",
            Self::HealthScores   => "health-scores",
            Self::Other(id)      => id,
        }
    }

    fn is_medical(&self) -> bool {
        matches!(self, Self::MedicalDetails | Self::HealthScores)
    }
}

impl From<String> for Section {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.id().to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Whether `role` may see `section`. No user sees nothing.
pub fn has_permission(role: Option<Role>, section: &Section) -> bool {
    match role {
        None                       => false,
        Some(Role::Commander)      => true,
        Some(Role::Hr)             => !section.is_medical(),
        Some(Role::MedicalOfficer) => section.is_medical() || *section == Section::Dashboard,
    }
}

/// String-keyed convenience for callers holding raw section ids.
pub fn has_permission_id(role: Option<Role>, section_id: &str) -> bool {
    has_permission(role, &Section::from_id(section_id))
}

/// A record as a given role is allowed to see it. Health scores and
/// medical restrictions are withheld unless the role holds the matching
/// section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelView {
    pub id:                   PersonnelId,
    pub name:                 String,
    pub rank:                 String,
    pub role:                 String,
    pub skills:               Vec<String>,
    pub readiness:            Score,
    pub training_score:       Score,
    pub availability:         Availability,
    pub years_of_service:     u32,
    pub deployment_status:    String,
    pub last_training_date:   String,
    pub health_score:         Option<Score>,
    pub medical_restrictions: Option<Vec<String>>,
}

impl PersonnelView {
    pub fn of(record: &PersonnelRecord, role: Option<Role>) -> Self {
        Self {
            id:                   record.id.clone(),
            name:                 record.name.clone(),
            rank:                 record.rank.clone(),
            role:                 record.role.clone(),
            skills:               record.skills.clone(),
            readiness:            record.readiness,
            training_score:       record.training_score,
            availability:         record.availability,
            years_of_service:     record.years_of_service,
            deployment_status:    record.deployment_status.clone(),
            last_training_date:   record.last_training_date.clone(),
            health_score:         has_permission(role, &Section::HealthScores)
                .then_some(record.health_score),
            medical_restrictions: has_permission(role, &Section::MedicalDetails)
                .then(|| record.medical_restrictions.clone()),
        }
    }
}
