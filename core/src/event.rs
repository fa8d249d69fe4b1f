//! Roster change events.
//!
//! RULE: every mutation of the roster produces an event.
//! The desk queues them; the runner drains them so the UI can
//! refresh exactly what changed instead of polling the whole roster.

use crate::{
    personnel::Availability,
    types::{PersonnelId, Score, Timestamp},
};
use serde::{Deserialize, Serialize};

/// Variants are appended only. Never remove or reorder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterEvent {
    PersonnelUpdated {
        id:     PersonnelId,
        fields: Vec<String>,
    },
    RosterReplaced {
        count:  usize,
        source: String,
    },
    LiveFeedFired {
        at:     Timestamp,
        id:     PersonnelId,
        change: FeedChange,
    },
    MissionAssigned {
        mission_id: String,
        personnel:  Vec<PersonnelId>,
    },
    AlertsRegenerated {
        count: usize,
    },
}

/// What one live-feed firing did to its chosen record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedChange {
    Health       { from: Score, to: Score },
    Training     { from: Score, to: Score },
    Availability { from: Availability, to: Availability },
    Idle,
}

/// Stable name for a variant, used in log lines.
pub fn event_type_name(event: &RosterEvent) -> &'static str {
    match event {
        RosterEvent::PersonnelUpdated { .. }  => "personnel_updated",
        RosterEvent::RosterReplaced { .. }    => "roster_replaced",
        RosterEvent::LiveFeedFired { .. }     => "live_feed_fired",
        RosterEvent::MissionAssigned { .. }   => "mission_assigned",
        RosterEvent::AlertsRegenerated { .. } => "alerts_regenerated",
    }
}
