//! The `CheckoutLane` and its per-tick service step.

use std::collections::{BTreeMap, VecDeque};

use cq_core::{CustomerId, LaneId, Tick};
use cq_market::Customer;

// ── Service records ──────────────────────────────────────────────────────────

/// One completed checkout, as reported to observers and folded into the
/// lane's statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceRecord {
    pub customer: CustomerId,
    /// Lane-clock ticks between enqueue and completion.
    pub waited: u64,
    /// Basket size actually checked out (post stock-limited selection).
    pub items: usize,
    /// Whether the customer came off the priority sub-queue.
    pub priority: bool,
}

/// Outcome of one lane tick: at most one completion per sub-queue.
#[derive(Clone, Debug, Default)]
pub struct LaneService {
    pub priority: Option<ServiceRecord>,
    pub regular:  Option<ServiceRecord>,
}

impl LaneService {
    /// Number of customers completed this tick (0, 1, or 2).
    pub fn count(&self) -> usize {
        self.priority.is_some() as usize + self.regular.is_some() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceRecord> {
        self.priority.iter().chain(self.regular.iter())
    }
}

// ── CheckoutLane ─────────────────────────────────────────────────────────────

/// One checkout counter.
///
/// The priority sub-queue is a `BTreeMap<Tick, VecDeque<Customer>>` keyed by
/// arrival tick: the map gives arrival-time ordering, the inner deque gives
/// insertion-order tie-breaks within a tick.  The head is the front of the
/// first bucket.
///
/// The lane carries its own `lag_clock`, advanced externally by the
/// scheduler.  Readiness checks and wait accounting use the lag clock, never
/// the global tick directly, so the two notions of time stay decoupled; the
/// scheduler keeps them in lock-step by advancing every lane by 1 per tick.
pub struct CheckoutLane {
    id: LaneId,
    priority: BTreeMap<Tick, VecDeque<Customer>>,
    priority_len: usize,
    regular: VecDeque<Customer>,
    lag_clock: Tick,
    customers_served: u64,
    total_wait: u64,
    items_served: u64,
}

impl CheckoutLane {
    pub fn new(id: LaneId) -> Self {
        Self {
            id,
            priority: BTreeMap::new(),
            priority_len: 0,
            regular: VecDeque::new(),
            lag_clock: Tick::ZERO,
            customers_served: 0,
            total_wait: 0,
            items_served: 0,
        }
    }

    // ── Queueing ──────────────────────────────────────────────────────────

    /// Place a customer in the lane.
    ///
    /// Stamps `enqueued_at` with the lane's current lag clock, then inserts
    /// into the priority or regular sub-queue by flag.  Depth is unbounded.
    pub fn enqueue(&mut self, mut customer: Customer) {
        customer.enqueued_at = self.lag_clock;
        if customer.priority {
            self.priority
                .entry(customer.arrival)
                .or_default()
                .push_back(customer);
            self.priority_len += 1;
        } else {
            self.regular.push_back(customer);
        }
    }

    /// Attempt one completion per sub-queue, priority first.
    ///
    /// Each non-empty sub-queue's head is checked against the due-time floor
    /// `lag_clock >= arrival + wait_budget`; a due head is dequeued and
    /// folded into the statistics, a not-yet-due head stays put (and keeps
    /// everything behind it waiting).
    pub fn service_tick(&mut self) -> LaneService {
        LaneService {
            priority: self.serve_priority_head(),
            regular:  self.serve_regular_head(),
        }
    }

    fn serve_priority_head(&mut self) -> Option<ServiceRecord> {
        let (&arrival, bucket) = self.priority.iter().next()?;
        let head = bucket.front()?;
        if self.lag_clock < head.due() {
            return None;
        }
        // Head is due: pop it, dropping the bucket once drained.
        let bucket = self.priority.get_mut(&arrival)?;
        let customer = bucket.pop_front()?;
        if bucket.is_empty() {
            self.priority.remove(&arrival);
        }
        self.priority_len -= 1;
        Some(self.record_service(customer))
    }

    fn serve_regular_head(&mut self) -> Option<ServiceRecord> {
        let head = self.regular.front()?;
        if self.lag_clock < head.due() {
            return None;
        }
        let customer = self.regular.pop_front()?;
        Some(self.record_service(customer))
    }

    fn record_service(&mut self, customer: Customer) -> ServiceRecord {
        let waited = self.lag_clock - customer.enqueued_at;
        self.total_wait += waited;
        self.customers_served += 1;
        self.items_served += customer.basket_len() as u64;
        ServiceRecord {
            customer: customer.id,
            waited,
            items: customer.basket_len(),
            priority: customer.priority,
        }
    }

    /// Advance the lane's lag clock by `delta` ticks.
    pub fn advance_clock(&mut self, delta: u64) {
        self.lag_clock = self.lag_clock + delta;
    }

    // ── State accessors ───────────────────────────────────────────────────

    pub fn id(&self) -> LaneId {
        self.id
    }

    pub fn lag_clock(&self) -> Tick {
        self.lag_clock
    }

    /// Both sub-queues empty.
    pub fn is_idle(&self) -> bool {
        self.priority_len == 0 && self.regular.is_empty()
    }

    /// Customers currently waiting across both sub-queues.
    pub fn queue_len(&self) -> usize {
        self.priority_len + self.regular.len()
    }

    pub fn priority_len(&self) -> usize {
        self.priority_len
    }

    pub fn regular_len(&self) -> usize {
        self.regular.len()
    }

    /// Waiting customer ids in service order: the priority sub-queue first
    /// (arrival order, insertion-tie-broken), then the regular FIFO.
    /// Used by console observers to print queue state.
    pub fn queued_ids(&self) -> (Vec<CustomerId>, Vec<CustomerId>) {
        let vip = self
            .priority
            .values()
            .flat_map(|bucket| bucket.iter().map(|c| c.id))
            .collect();
        let regular = self.regular.iter().map(|c| c.id).collect();
        (vip, regular)
    }

    // ── Statistics ────────────────────────────────────────────────────────

    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }

    pub fn items_served(&self) -> u64 {
        self.items_served
    }

    pub fn total_wait(&self) -> u64 {
        self.total_wait
    }

    /// Mean wait in whole ticks (integer division); 0 when nobody has been
    /// served yet.
    pub fn average_wait(&self) -> u64 {
        if self.customers_served == 0 {
            0
        } else {
            self.total_wait / self.customers_served
        }
    }
}
