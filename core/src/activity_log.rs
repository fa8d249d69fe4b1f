//! Bounded, newest-first activity log.
//!
//! Entries are immutable once recorded. When the log is full the oldest
//! entry is dropped; nothing is archived.

use crate::{
    auth::User,
    permission::{has_permission, Role, Section},
    types::{Timestamp, UserId},
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const ACTIVITY_LOG_CAPACITY: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLogEntry {
    pub id:        String,
    pub timestamp: Timestamp,
    pub user_id:   UserId,
    pub username:  String,
    pub action:    String,
    pub details:   String,
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityLogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action. Without an actor this is a no-op and returns `None`.
    pub fn record(
        &mut self,
        actor:   Option<&User>,
        action:  &str,
        details: &str,
        now:     Timestamp,
    ) -> Option<&ActivityLogEntry> {
        let actor = actor?;
        self.entries.push_front(ActivityLogEntry {
            id:        uuid::Uuid::new_v4().to_string(),
            timestamp: now,
            user_id:   actor.id.clone(),
            username:  actor.name.clone(),
            action:    action.to_string(),
            details:   details.to_string(),
        });
        self.entries.truncate(ACTIVITY_LOG_CAPACITY);
        log::debug!("activity: {} {action}: {details}", actor.username);
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first, if `role` may read the log.
    pub fn entries_for(&self, role: Option<Role>) -> Option<Vec<&ActivityLogEntry>> {
        has_permission(role, &Section::Logs).then(|| self.entries.iter().collect())
    }

    /// Case-insensitive substring filter on action and username.
    /// Empty needles match everything.
    pub fn filter<'a>(
        entries: &[&'a ActivityLogEntry],
        action:  &str,
        user:    &str,
    ) -> Vec<&'a ActivityLogEntry> {
        let action = action.to_lowercase();
        let user = user.to_lowercase();
        entries
            .iter()
            .copied()
            .filter(|e| action.is_empty() || e.action.to_lowercase().contains(&action))
            .filter(|e| user.is_empty() || e.username.to_lowercase().contains(&user))
            .collect()
    }

    /// Distinct actions, newest first.
    pub fn actions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.entries {
            if !out.contains(&e.action) {
                out.push(e.action.clone());
            }
        }
        out
    }

    /// Distinct usernames, newest first.
    pub fn users(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for e in &self.entries {
            if !out.contains(&e.username) {
                out.push(e.username.clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::authenticate;
    use chrono::{TimeZone, Utc};

    #[test]
    fn filter_matches_action_and_user_substrings() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let hr = authenticate("hr", "hr123").unwrap();
        let cmd = authenticate("commander", "admin123").unwrap();
        let mut log = ActivityLog::new();
        log.record(Some(&hr), "Export Data", "Exported 10 personnel records", now);
        log.record(Some(&cmd), "Mission Search", "Searched candidates", now);
        log.record(Some(&cmd), "Export Data", "Exported 10 personnel records", now);

        let all = log.entries_for(Some(Role::Commander)).unwrap();
        assert_eq!(ActivityLog::filter(&all, "export", "").len(), 2);
        assert_eq!(ActivityLog::filter(&all, "export", "chen").len(), 1);
        assert_eq!(ActivityLog::filter(&all, "", "").len(), 3);
        assert_eq!(log.actions(), vec!["Export Data", "Mission Search"]);
        assert_eq!(log.users(), vec!["Col. Sarah Johnson", "Maj. David Chen"]);
    }
}
