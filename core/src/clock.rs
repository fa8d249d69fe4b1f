//! Time sources and the live-feed schedule.
//!
//! RULE: Nothing in the desk reads the platform clock directly.
//! All "now" values flow through a `Clock`, so tests can drive time
//! with a `ManualClock` and get fully reproducible schedules.

use crate::types::Timestamp;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Injectable time source.
pub trait Clock: Send {
    fn now(&self) -> Timestamp;
}

/// Real wall-clock time. Used by the runner.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Cloning shares the underlying instant, so a test can hand one clone
/// to the desk and keep another to advance time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.millis.fetch_add(secs * 1000, Ordering::SeqCst);
    }

    pub fn set(&self, at: Timestamp) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

/// Fixed-period schedule for the live feed.
///
/// Disabled schedules never fire. Enabling (or re-enabling) restarts the
/// period from the toggle instant, mirroring an interval timer that is
/// cancelled and recreated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedSchedule {
    pub period_secs: i64,
    pub enabled:     bool,
    pub next_due:    Option<Timestamp>,
    pub firings:     u64,
}

impl FeedSchedule {
    pub fn new(period_secs: i64, enabled: bool, now: Timestamp) -> Self {
        let period_secs = period_secs.max(1);
        Self {
            period_secs,
            enabled,
            next_due: enabled.then(|| now + Duration::seconds(period_secs)),
            firings: 0,
        }
    }

    /// Cancel the pending firing and, if enabling, restart from `now`.
    pub fn set_enabled(&mut self, enabled: bool, now: Timestamp) {
        self.enabled = enabled;
        self.next_due = enabled.then(|| now + Duration::seconds(self.period_secs));
    }

    /// Number of whole periods that elapsed up to `now`.
    /// Consumes them: the next call only counts later periods.
    pub fn take_due(&mut self, now: Timestamp) -> u64 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let period = Duration::seconds(self.period_secs);
        let mut count = 0;
        while due <= now {
            count += 1;
            due += period;
        }
        self.next_due = Some(due);
        self.firings += count;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(t0());
        let handle = clock.clone();
        handle.advance_secs(45);
        assert_eq!(clock.now(), t0() + Duration::seconds(45));
    }

    #[test]
    fn schedule_fires_once_per_elapsed_period() {
        let mut schedule = FeedSchedule::new(30, true, t0());
        assert_eq!(schedule.take_due(t0() + Duration::seconds(29)), 0);
        assert_eq!(schedule.take_due(t0() + Duration::seconds(30)), 1);
        assert_eq!(schedule.take_due(t0() + Duration::seconds(95)), 2);
        assert_eq!(schedule.firings, 3);
    }

    #[test]
    fn toggling_restarts_the_period() {
        let mut schedule = FeedSchedule::new(30, true, t0());
        schedule.set_enabled(false, t0() + Duration::seconds(20));
        assert_eq!(schedule.take_due(t0() + Duration::seconds(300)), 0);

        schedule.set_enabled(true, t0() + Duration::seconds(300));
        assert_eq!(schedule.take_due(t0() + Duration::seconds(329)), 0);
        assert_eq!(schedule.take_due(t0() + Duration::seconds(330)), 1);
    }
}
