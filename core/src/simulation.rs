//! What-if readiness simulation.
//!
//! Takes the N most ready Available people offline on a working copy
//! (worst-case operational impact) and reports how readiness, capacity,
//! per-role availability and mission capability move. The roster itself
//! is never touched.

use crate::{
    personnel::{Availability, PersonnelRecord},
    types::{PersonnelId, Score},
};
use serde::{Deserialize, Serialize};

/// Roles whose coverage decides mission capability.
pub const CRITICAL_ROLES: [&str; 3] = ["Pilot", "Medic", "Engineer"];

/// Largest share of the roster the simulator may take offline.
pub const MAX_UNAVAILABLE_SHARE: f64 = 0.5;

const OPERATIONAL_THRESHOLD: Score = 75;
const LIMITED_THRESHOLD: Score = 50;
const CRITICAL_ROLE_IMPACT: f64 = 50.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimulationParams {
    pub unavailable_count: usize,
    #[serde(default)]
    pub role:              Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CapabilityStatus {
    Operational,
    Limited,
    Critical,
}

impl CapabilityStatus {
    pub fn from_capability(capability: Score) -> Self {
        if capability >= OPERATIONAL_THRESHOLD {
            Self::Operational
        } else if capability >= LIMITED_THRESHOLD {
            Self::Limited
        } else {
            Self::Critical
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleImpact {
    pub role:           String,
    pub original_count: usize,
    pub new_count:      usize,
    pub impact:         i64,
    pub critical:       bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissionCapability {
    pub role:       String,
    pub available:  usize,
    pub total:      usize,
    pub capability: Score,
    pub status:     CapabilityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationResult {
    pub original_readiness: i64,
    pub new_readiness:      i64,
    pub readiness_impact:   i64,
    pub capacity_impact:    i64,
    pub role_impact:        Vec<RoleImpact>,
    pub mission_impact:     Vec<MissionCapability>,
    pub affected_personnel: usize,
    pub remaining_capable:  usize,
    pub selected:           Vec<PersonnelId>,
}

/// floor(total × 0.5): the simulator's upper bound on N.
pub fn max_unavailable(total: usize) -> usize {
    (total as f64 * MAX_UNAVAILABLE_SHARE).floor() as usize
}

/// Halves round towards +∞, so -2.5 → -2. The impact is usually negative
/// and `f64::round` would push those halves the other way.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

fn mean_readiness<'a>(people: impl Iterator<Item = &'a PersonnelRecord>) -> f64 {
    let (sum, n) = people.fold((0u64, 0usize), |(s, n), p| (s + p.readiness as u64, n + 1));
    if n == 0 { 0.0 } else { sum as f64 / n as f64 }
}

fn available_with_role(people: &[PersonnelRecord], role: &str) -> usize {
    people
        .iter()
        .filter(|p| p.role == role && p.availability == Availability::Available)
        .count()
}

pub fn simulate(personnel: &[PersonnelRecord], params: &SimulationParams) -> SimulationResult {
    let total = personnel.len();
    let n = params.unavailable_count.min(max_unavailable(total));
    let role_filter = params.role.as_deref().filter(|r| !r.is_empty());

    // 1–2. Available pool, optionally by role, most ready first (stable).
    let mut pool: Vec<&PersonnelRecord> = personnel
        .iter()
        .filter(|p| p.is_available())
        .filter(|p| role_filter.map_or(true, |r| p.role == r))
        .collect();
    pool.sort_by(|a, b| b.readiness.cmp(&a.readiness));

    // 3. Mark on a working copy only.
    let selected: Vec<PersonnelId> = pool.iter().take(n).map(|p| p.id.clone()).collect();
    let simulated: Vec<PersonnelRecord> = personnel
        .iter()
        .map(|p| {
            let mut p = p.clone();
            if selected.contains(&p.id) {
                p.availability = Availability::SimulatedUnavailable;
            }
            p
        })
        .collect();

    // 4. Readiness.
    let original = mean_readiness(personnel.iter());
    let new = mean_readiness(simulated.iter().filter(|p| p.is_available()));
    let readiness_impact = if selected.is_empty() { 0 } else { round_half_up(original - new) };

    // 5. Capacity.
    let available_before = personnel.iter().filter(|p| p.is_available()).count();
    let available_after = simulated.iter().filter(|p| p.is_available()).count();
    let capacity_impact = if total == 0 {
        0
    } else {
        ((available_before - available_after) as f64 / total as f64 * 100.0).round() as i64
    };

    // 6. Per-role impact, roles in first-seen order.
    let mut roles: Vec<&str> = Vec::new();
    for p in personnel {
        if !roles.contains(&p.role.as_str()) {
            roles.push(&p.role);
        }
    }
    let role_impact = roles
        .iter()
        .map(|role| {
            let before = available_with_role(personnel, role);
            let after = available_with_role(&simulated, role);
            let impact = if before > 0 {
                (before - after) as f64 / before as f64 * 100.0
            } else {
                0.0
            };
            RoleImpact {
                role:           role.to_string(),
                original_count: before,
                new_count:      after,
                impact:         impact.round() as i64,
                critical:       impact > CRITICAL_ROLE_IMPACT,
            }
        })
        .collect();

    // 7. Mission capability for the critical roles.
    let mission_impact = CRITICAL_ROLES
        .iter()
        .map(|role| {
            let available = available_with_role(&simulated, role);
            let role_total = personnel.iter().filter(|p| p.role == *role).count();
            let capability = if role_total > 0 {
                (available as f64 / role_total as f64 * 100.0).round() as Score
            } else {
                100
            };
            MissionCapability {
                role: role.to_string(),
                available,
                total: role_total,
                capability,
                status: CapabilityStatus::from_capability(capability),
            }
        })
        .collect();

    log::debug!(
        "what-if: n={n} role={role_filter:?} selected={} readiness {original:.1} -> {new:.1}",
        selected.len()
    );

    SimulationResult {
        original_readiness: original.round() as i64,
        new_readiness:      new.round() as i64,
        readiness_impact,
        capacity_impact,
        role_impact,
        mission_impact,
        affected_personnel: selected.len(),
        remaining_capable:  available_after,
        selected,
    }
}
