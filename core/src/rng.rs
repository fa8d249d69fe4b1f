//! Deterministic random number generation.
//!
//! RULE: Nothing in the desk may call a platform RNG for roster data.
//! All randomness flows through `FeedRng` streams derived from the
//! single master seed in `DeskConfig`.
//!
//! Each consumer gets its own stream, seeded from
//! (master_seed XOR slot index), so adding a consumer never shifts
//! another consumer's sequence.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG stream.
pub struct FeedRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl FeedRng {
    /// Create a stream from the master seed and a stable slot.
    pub fn new(master_seed: u64, slot: RngSlot) -> Self {
        let derived_seed = master_seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: slot.name(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a usize in [0, n). Returns 0 when n is 0.
    pub fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.inner.next_u64() % n as u64) as usize
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngSlot {
    LiveFeed = 0,
}

impl RngSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LiveFeed => "live_feed",
        }
    }
}
