//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! The scheduler owns exactly one `SimRng`, seeded from `SimConfig::seed`,
//! and every random decision point — arrival batch size, per-customer item
//! draws, the priority flag — goes through it in a fixed order.  Replaying a
//! run is therefore just re-running with the same seed; tests pin seeds to
//! get stable scenarios.
//!
//! Batch arrivals share the scheduler's call stack, so customers admitted in
//! the same tick consume draws strictly in admission order.  That ordering is
//! observable (an early customer can deplete stock a later one would have
//! seen) and must not be reshuffled.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for all scheduler-driven randomness.
///
/// Single-threaded by construction: the tick loop is the only driver, so no
/// synchronisation is needed or provided.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
