//! muster-core: role-gated personnel readiness desk.
//!
//! Every piece of mutable state lives in `engine::Desk`. The remaining
//! modules are pure computations over the roster plus the session store.

pub mod activity_log;
pub mod alerts;
pub mod auth;
pub mod clock;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod exchange;
pub mod insights;
pub mod live_feed_subsystem;
pub mod mission;
pub mod permission;
pub mod personnel;
pub mod rng;
pub mod roster;
pub mod scoring;
pub mod seed_roster;
pub mod simulation;
pub mod snapshot;
pub mod store;
pub mod subsystem;
pub mod types;
