//! The `Sim` struct and its tick loop.

use cq_core::{CustomerId, LaneId, SimConfig, SimRng, Tick};
use cq_lane::CheckoutLane;
use cq_market::{Customer, Inventory};

use crate::policy::{ArrivalEvent, choose_lane};
use crate::{Pacer, SimError, SimObserver, SimResult, SimSummary};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Scheduler lifecycle phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Below the admission target; new customers still arrive.
    Running,
    /// Admission target reached; lanes are draining their queues.
    Draining,
    /// All lanes idle and the target admitted.  The loop has stopped.
    Terminated,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Running    => "running",
            Phase::Draining   => "draining",
            Phase::Terminated => "terminated",
        };
        f.write_str(s)
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation scheduler: owns all lanes, the inventory, the RNG, and the
/// global tick counter.  No ambient state — everything observable lives in
/// these fields.
///
/// Create via [`SimBuilder`][crate::SimBuilder], then drive with
/// [`run`][Sim::run] (to termination) or [`run_ticks`][Sim::run_ticks]
/// (incremental stepping, mainly for tests).
pub struct Sim {
    /// Global configuration (target, lane count, seed, restock cadence, …).
    pub config: SimConfig,

    /// The global tick counter.  Lane lag clocks advance in lock-step.
    pub tick: Tick,

    /// All checkout lanes, indexed by `LaneId`.  Lane 0 is the express lane.
    pub lanes: Vec<CheckoutLane>,

    /// The shared stock table.  Mutated only from this struct's call stack,
    /// so same-batch customers deplete it strictly in admission order.
    pub inventory: Inventory,

    /// The single seeded RNG behind every random decision point.
    pub rng: SimRng,

    /// Customers admitted so far.  Doubles as the round-robin routing index
    /// (0-based, read before increment) and the next customer id minus one.
    pub admitted: u64,

    /// Current lifecycle phase.
    pub phase: Phase,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the termination predicate holds, pausing between ticks via
    /// `pacer`.  Returns the final summary.
    ///
    /// Fails with [`SimError::TickLimit`] if `config.max_ticks` is set and
    /// reached first.
    pub fn run<O: SimObserver, P: Pacer>(
        &mut self,
        observer: &mut O,
        pacer: &mut P,
    ) -> SimResult<SimSummary> {
        loop {
            let now = self.tick;
            if let Some(limit) = self.config.max_ticks {
                if now.0 >= limit {
                    return Err(SimError::TickLimit { limit });
                }
            }

            observer.on_tick_start(now);
            let served = self.process_tick(now, observer);
            observer.on_tick_end(now, served);

            if self.phase == Phase::Terminated {
                let summary = self.summary();
                observer.on_sim_end(now, &summary);
                return Ok(summary);
            }

            pacer.pause(now);
            self.tick = now + 1;
        }
    }

    /// Run at most `n` ticks from the current position, stopping early on
    /// termination.  No pacing.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.phase == Phase::Terminated {
                return;
            }
            let now = self.tick;
            observer.on_tick_start(now);
            let served = self.process_tick(now, observer);
            observer.on_tick_end(now, served);
            if self.phase == Phase::Terminated {
                return;
            }
            self.tick = now + 1;
        }
    }

    /// Route one prepared customer (basket filled, priority flag set) to a
    /// lane, using — and consuming — the current admission index.
    ///
    /// The batch generator goes through this; tests use it directly to admit
    /// hand-built customers without involving the RNG.
    pub fn admit(&mut self, customer: Customer) -> ArrivalEvent {
        let routing = choose_lane(
            customer.priority,
            customer.basket_len(),
            self.admitted,
            self.config.lane_count,
            self.config.express_item_limit,
        );
        let event = ArrivalEvent {
            tick:     customer.arrival,
            customer: customer.id,
            items:    customer.basket_len(),
            wait_budget: customer.wait_budget,
            priority: customer.priority,
            lane:     routing.lane,
            express:  routing.express,
        };
        self.lanes[routing.lane.index()].enqueue(customer);
        self.admitted += 1;
        event
    }

    /// Snapshot the current per-lane and aggregate statistics.
    pub fn summary(&self) -> SimSummary {
        SimSummary::collect(&self.lanes, self.tick)
    }

    pub fn lane(&self, id: LaneId) -> &CheckoutLane {
        &self.lanes[id.index()]
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Returns the number of customers served across all lanes this tick.
    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        // ── Phase 1: arrivals ─────────────────────────────────────────────
        //
        // Draw one batch per tick while below target.  Customers consume RNG
        // draws strictly in admission order: item count, item picks, then
        // the priority flag.
        if self.admitted < self.config.target_customers {
            let batch = self.rng.gen_range(1..=self.config.max_arrival_batch);
            for _ in 0..batch {
                if self.admitted >= self.config.target_customers {
                    break;
                }
                self.spawn_customer(now, observer);
            }
        }
        if self.phase == Phase::Running && self.admitted >= self.config.target_customers {
            self.phase = Phase::Draining;
            observer.on_phase(now, Phase::Draining);
        }

        // ── Phase 2: service ──────────────────────────────────────────────
        //
        // One completion attempt per sub-queue per lane; priority and
        // regular may both complete in the same tick.
        let mut served = 0;
        for lane in &mut self.lanes {
            let outcome = lane.service_tick();
            served += outcome.count();
            let id = lane.id();
            for record in outcome.iter() {
                observer.on_served(now, id, record);
            }
        }

        // ── Phase 3: restock ──────────────────────────────────────────────
        //
        // Tick 0 included: 0 % interval == 0.
        if now.0 % self.config.restock_interval_ticks == 0 {
            self.inventory.restock_all(self.config.restock_amount);
            observer.on_restock(now, self.config.restock_amount);
        }

        // ── Phase 4: lane clocks ──────────────────────────────────────────
        for lane in &mut self.lanes {
            lane.advance_clock(1);
        }

        // ── Phase 5: termination ──────────────────────────────────────────
        if self.phase == Phase::Draining && self.lanes.iter().all(CheckoutLane::is_idle) {
            self.phase = Phase::Terminated;
            observer.on_phase(now, Phase::Terminated);
        }

        served
    }

    /// Create, stock, flag, and route one arriving customer.
    fn spawn_customer<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let id = CustomerId(self.admitted as u32 + 1);
        let mut customer = Customer::new(id, now);
        customer.fill_basket(
            &mut self.inventory,
            &mut self.rng,
            self.config.max_items_per_customer,
        );
        customer.priority = self.rng.gen_bool(self.config.priority_probability);

        let event = self.admit(customer);
        observer.on_arrival(&event, &self.lanes[event.lane.index()]);
    }
}
