//! Scheduled task trait.
//!
//! RULE: a task only mutates the roster through `Roster::apply_update`
//! and reports every change as a `RosterEvent`. The desk fires tasks
//! from `Desk::poll`; firings never overlap.

use crate::{
    error::MusterResult,
    event::RosterEvent,
    rng::FeedRng,
    roster::Roster,
    types::Timestamp,
};

pub trait DeskTask: Send {
    /// Unique stable name for this task.
    fn name(&self) -> &'static str;

    /// Run one firing.
    ///
    /// - `now`:    the instant the firing is attributed to
    /// - `roster`: the single mutable store
    /// - `rng`:    this task's deterministic stream
    fn fire(
        &mut self,
        now:    Timestamp,
        roster: &mut Roster,
        rng:    &mut FeedRng,
    ) -> MusterResult<Vec<RosterEvent>>;
}
