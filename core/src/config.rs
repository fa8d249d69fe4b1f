//! Desk configuration.
//!
//! Operational knobs only. Scoring weights and alert thresholds are fixed
//! constants in their modules and deliberately not configurable.

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEED_PERIOD_SECS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeskConfig {
    /// Master seed for every RNG stream.
    #[serde(default = "default_seed")]
    pub seed:              u64,
    #[serde(default = "default_feed_period")]
    pub feed_period_secs:  i64,
    #[serde(default = "default_true")]
    pub live_feed_enabled: bool,
    /// SQLite path (or `file:` URI) for the session store.
    #[serde(default = "default_session_db")]
    pub session_db:        String,
    /// Optional roster CSV loaded instead of the built-in roster.
    #[serde(default)]
    pub roster_csv:        Option<String>,
}

fn default_seed() -> u64 { 42 }
fn default_feed_period() -> i64 { DEFAULT_FEED_PERIOD_SECS }
fn default_true() -> bool { true }
fn default_session_db() -> String { "muster-session.db".into() }

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            seed:              default_seed(),
            feed_period_secs:  default_feed_period(),
            live_feed_enabled: default_true(),
            session_db:        default_session_db(),
            roster_csv:        None,
        }
    }
}

impl DeskConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    /// In tests, use `DeskConfig::default_test()`.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {path}"))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Cannot parse {path}"))?;
        if config.feed_period_secs <= 0 {
            anyhow::bail!("feed_period_secs must be positive, got {}", config.feed_period_secs);
        }
        Ok(config)
    }

    /// Deterministic, file-free configuration for tests: fixed seed,
    /// private in-memory session store, live feed off until enabled.
    pub fn default_test() -> Self {
        Self {
            seed:              0x5EED_CAFE,
            feed_period_secs:  DEFAULT_FEED_PERIOD_SECS,
            live_feed_enabled: false,
            session_db:        ":memory:".into(),
            roster_csv:        None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: DeskConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.feed_period_secs, 30);
        assert!(config.live_feed_enabled);
        assert_eq!(config.roster_csv, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(DeskConfig::load("/definitely/not/here.json").is_err());
    }
}
