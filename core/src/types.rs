//! Shared primitive types used across the desk.

use chrono::{DateTime, Utc};

/// A stable, unique identifier for a personnel record.
pub type PersonnelId = String;

/// Identifier of an authenticated desk user.
pub type UserId = String;

/// Wall-clock instant as seen by the desk's injected clock.
pub type Timestamp = DateTime<Utc>;

/// Integer score on the 0–100 scale (health, training, readiness, match).
pub type Score = u32;
