//! Live feed: a local stand-in for a real-time personnel feed.
//!
//! Each firing picks one record uniformly and rolls one branch:
//!   [0.0, 0.4)  health   ± up to 5
//!   [0.4, 0.7)  training ± up to 4
//!   [0.7, 0.9)  availability reassigned among Available/Deployed/Leave
//!   [0.9, 1.0)  idle
//! Health and training stay in [50, 100]; readiness is re-derived by the
//! store's update path.

use crate::{
    error::MusterResult,
    event::{FeedChange, RosterEvent},
    personnel::{Availability, PersonnelUpdate},
    rng::FeedRng,
    roster::Roster,
    subsystem::DeskTask,
    types::{Score, Timestamp},
};

pub const FEED_SCORE_FLOOR: f64 = 50.0;
pub const FEED_SCORE_CEILING: f64 = 100.0;
const HEALTH_SPAN: f64 = 10.0;
const TRAINING_SPAN: f64 = 8.0;
const FEED_STATES: [Availability; 3] = [
    Availability::Available,
    Availability::Deployed,
    Availability::Leave,
];

#[derive(Debug, Default)]
pub struct LiveFeedSubsystem;

impl LiveFeedSubsystem {
    pub fn new() -> Self {
        Self
    }
}

fn nudge(current: Score, roll: f64, span: f64) -> Score {
    let next = current as f64 + (roll - 0.5) * span;
    next.clamp(FEED_SCORE_FLOOR, FEED_SCORE_CEILING).round() as Score
}

impl DeskTask for LiveFeedSubsystem {
    fn name(&self) -> &'static str {
        "live_feed"
    }

    fn fire(
        &mut self,
        now:    Timestamp,
        roster: &mut Roster,
        rng:    &mut FeedRng,
    ) -> MusterResult<Vec<RosterEvent>> {
        if roster.is_empty() {
            return Ok(vec![]);
        }
        let target = roster.all()[rng.next_index(roster.len())].clone();
        let branch = rng.next_f64();

        let (update, change) = if branch < 0.4 {
            let to = nudge(target.health_score, rng.next_f64(), HEALTH_SPAN);
            (
                PersonnelUpdate { health_score: Some(to), ..Default::default() },
                FeedChange::Health { from: target.health_score, to },
            )
        } else if branch < 0.7 {
            let to = nudge(target.training_score, rng.next_f64(), TRAINING_SPAN);
            (
                PersonnelUpdate { training_score: Some(to), ..Default::default() },
                FeedChange::Training { from: target.training_score, to },
            )
        } else if branch < 0.9 {
            let to = FEED_STATES[rng.next_index(FEED_STATES.len())];
            (
                PersonnelUpdate::availability(to),
                FeedChange::Availability { from: target.availability, to },
            )
        } else {
            (PersonnelUpdate::default(), FeedChange::Idle)
        };

        let mut events = Vec::with_capacity(2);
        if change != FeedChange::Idle {
            events.push(roster.apply_update(&target.id, &update)?);
        }
        log::debug!("live feed: {} {:?}", target.id, change);
        events.push(RosterEvent::LiveFeedFired { at: now, id: target.id, change });
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_clamps_into_feed_band() {
        assert_eq!(nudge(52, 0.0, HEALTH_SPAN), 50);
        assert_eq!(nudge(98, 0.999, HEALTH_SPAN), 100);
        assert_eq!(nudge(30, 0.5, HEALTH_SPAN), 50);
        assert_eq!(nudge(80, 0.75, TRAINING_SPAN), 82);
    }
}
