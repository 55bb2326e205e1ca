//! Simulation time model and top-level configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter advancing in fixed unit
//! steps — there is no event heap and no jumping to the next event.  Using an
//! integer tick as the canonical unit means all due-time arithmetic is exact
//! and comparisons are O(1).
//!
//! Each checkout lane additionally carries its own lag clock (see `cq-lane`);
//! the scheduler advances every lane by the same delta per tick so the lane
//! clocks stay in lock-step with the global counter.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64`: a run terminates once all lanes drain, so the counter
/// never comes close to wrapping, but the headroom makes overflow a
/// non-question.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the application crate (CLI flags) and passed to
/// `cq_sim::SimBuilder`, which calls [`SimConfig::validate`] before
/// constructing anything.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// How many customers to admit before the store stops accepting arrivals.
    pub target_customers: u64,

    /// Number of checkout lanes.  Lane 0 is the express lane.
    pub lane_count: u16,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Probability that an admitted customer is flagged priority (VIP).
    pub priority_probability: f64,

    /// Non-priority customers with at most this many basket items are sent
    /// to the express lane.
    pub express_item_limit: usize,

    /// Upper bound of the per-customer item-count draw (inclusive).
    pub max_items_per_customer: u64,

    /// Upper bound of the per-tick arrival batch draw (inclusive).
    pub max_arrival_batch: u64,

    /// Restock fires on every tick divisible by this interval (tick 0
    /// included).
    pub restock_interval_ticks: u64,

    /// Units added to every item kind on each restock.
    pub restock_amount: u32,

    /// Number of distinct item kinds in the default inventory.
    pub item_kinds: u16,

    /// Initial stock per item kind in the default inventory.
    pub initial_stock: u32,

    /// Hard cap on total ticks.  `None` lets the run go until it drains;
    /// tests should set a bound so a misconfigured run fails instead of
    /// spinning forever.
    pub max_ticks: Option<u64>,
}

impl SimConfig {
    /// A config with the stock store constants: 3 lanes, 10 item
    /// kinds at 20 stock, restock +50 every 5 ticks, 20% VIP chance,
    /// express limit 3, baskets of 1–10, batches of 1–5.
    pub fn with_target(target_customers: u64, seed: u64) -> Self {
        Self {
            target_customers,
            lane_count:             3,
            seed,
            priority_probability:   0.2,
            express_item_limit:     3,
            max_items_per_customer: 10,
            max_arrival_batch:      5,
            restock_interval_ticks: 5,
            restock_amount:         50,
            item_kinds:             10,
            initial_stock:          20,
            max_ticks:              None,
        }
    }

    /// Reject configurations under which the tick loop is meaningless or
    /// cannot terminate.
    pub fn validate(&self) -> CoreResult<()> {
        fn fail(msg: impl Into<String>) -> CoreResult<()> {
            Err(CoreError::Config(msg.into()))
        }

        if self.target_customers == 0 {
            return fail("target_customers must be at least 1");
        }
        if self.lane_count == 0 {
            return fail("lane_count must be at least 1");
        }
        if self.max_items_per_customer == 0 {
            return fail("max_items_per_customer must be at least 1");
        }
        if self.max_arrival_batch == 0 {
            return fail("max_arrival_batch must be at least 1");
        }
        if self.restock_interval_ticks == 0 {
            return fail("restock_interval_ticks must be at least 1");
        }
        if self.item_kinds == 0 {
            return fail("item_kinds must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.priority_probability) {
            return fail(format!(
                "priority_probability {} outside [0, 1]",
                self.priority_probability
            ));
        }
        if self.max_ticks == Some(0) {
            return fail("max_ticks, when set, must be at least 1");
        }
        Ok(())
    }
}
