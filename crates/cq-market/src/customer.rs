//! Customers and basket selection.

use cq_core::{CustomerId, ItemId, SimRng, Tick};

use crate::Inventory;

/// Ticks of wait budget granted per item-count draw.
const WAIT_TICKS_PER_DRAW: u64 = 2;

/// One arrival in the simulation.
///
/// A customer is created at arrival, filled once by [`fill_basket`], flagged
/// priority (or not) by the scheduler, and then stays immutable except for
/// `enqueued_at`, which the receiving lane stamps with its own lag clock.
///
/// [`fill_basket`]: Customer::fill_basket
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Sequential admission number, starting from 1.
    pub id: CustomerId,

    /// Global tick at which the customer arrived.
    pub arrival: Tick,

    /// Lane lag-clock value at enqueue time.  Stamped by
    /// `CheckoutLane::enqueue`, not at creation.
    pub enqueued_at: Tick,

    /// Item kinds actually obtained.  May repeat (several units of the same
    /// kind) and may be shorter than `service_draws` when stock ran out
    /// mid-selection — possibly empty.
    pub basket: Vec<ItemId>,

    /// Expedited-queue flag, set by the scheduler's routing policy,
    /// independent of basket content.
    pub priority: bool,

    /// Number of item-count draws made during selection.  This — not the
    /// basket length — drives the wait budget, so an out-of-stock shelf
    /// shortens the basket without shortening the wait.
    pub service_draws: u64,

    /// Minimum ticks the customer spends in the store before checkout.
    pub wait_budget: u64,
}

impl Customer {
    pub fn new(id: CustomerId, arrival: Tick) -> Self {
        Self {
            id,
            arrival,
            enqueued_at: Tick::ZERO,
            basket: Vec::new(),
            priority: false,
            service_draws: 0,
            wait_budget: 0,
        }
    }

    /// Fill the basket from `inventory`.
    ///
    /// Draws `n` uniformly from `[1, max_items]`, then makes `n` random
    /// inventory draws.  Draws landing on exhausted kinds are skipped, so
    /// the basket may end up with fewer than `n` entries, including zero.
    ///
    /// `service_draws` is set to `n` (the DRAW count) and
    /// `wait_budget = n * 2` regardless of how many draws succeeded.
    pub fn fill_basket(&mut self, inventory: &mut Inventory, rng: &mut SimRng, max_items: u64) {
        let n = rng.gen_range(1..=max_items);
        self.basket.reserve(n as usize);
        for _ in 0..n {
            if let Some(id) = inventory.draw(rng) {
                self.basket.push(id);
            }
        }
        self.service_draws = n;
        self.wait_budget = n * WAIT_TICKS_PER_DRAW;
    }

    /// The earliest lane-clock tick at which this customer may be served.
    ///
    /// Fixed at arrival — actual queueing delay never moves it.
    #[inline]
    pub fn due(&self) -> Tick {
        self.arrival + self.wait_budget
    }

    pub fn basket_len(&self) -> usize {
        self.basket.len()
    }
}
