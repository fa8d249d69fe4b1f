//! Full-fidelity roster backup to/from JSON.
//!
//! A backup captures every field of every record plus a format version
//! and the export instant, so a roster can be restored exactly after the
//! session (which keeps the roster in memory only) is gone.

use crate::{
    error::{MusterError, MusterResult},
    personnel::PersonnelRecord,
    types::Timestamp,
};
use serde::{Deserialize, Serialize};

pub const BACKUP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterBackup {
    pub timestamp: Timestamp,
    pub personnel: Vec<PersonnelRecord>,
    pub version:   String,
}

impl RosterBackup {
    pub fn capture(personnel: &[PersonnelRecord], now: Timestamp) -> Self {
        Self {
            timestamp: now,
            personnel: personnel.to_vec(),
            version:   BACKUP_VERSION.to_string(),
        }
    }

    pub fn to_json(&self) -> MusterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and version-check a backup document.
    pub fn from_json(json: &str) -> MusterResult<Self> {
        let backup: Self = serde_json::from_str(json)?;
        if backup.version != BACKUP_VERSION {
            return Err(MusterError::UnsupportedBackupVersion { version: backup.version });
        }
        Ok(backup)
    }
}
