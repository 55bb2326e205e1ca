//! Simulation observer trait for event logging and data collection.

use cq_core::{LaneId, Tick};
use cq_lane::{CheckoutLane, ServiceRecord};

use crate::policy::ArrivalEvent;
use crate::sim::Phase;
use crate::summary::SimSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at every observable
/// point of the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The hooks cover every observable
/// event: arrivals with routing decisions, per-tick service results,
/// restock notices, phase transitions, and the final summary.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, served: usize) {
///         if served > 0 {
///             println!("{tick}: {served} customers checked out");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per admitted customer, after the customer is enqueued.
    ///
    /// `lane` is the receiving lane, post-enqueue, so observers can print
    /// its current queue state.
    fn on_arrival(&mut self, _event: &ArrivalEvent, _lane: &CheckoutLane) {}

    /// Called once per completed checkout.
    fn on_served(&mut self, _tick: Tick, _lane: LaneId, _record: &ServiceRecord) {}

    /// Called when the periodic restock fires.
    fn on_restock(&mut self, _tick: Tick, _amount: u32) {}

    /// Called on every phase transition (Running → Draining → Terminated).
    fn on_phase(&mut self, _tick: Tick, _phase: Phase) {}

    /// Called at the end of each tick with the number of customers served
    /// across all lanes this tick.
    fn on_tick_end(&mut self, _tick: Tick, _served: usize) {}

    /// Called once after the termination predicate holds.
    fn on_sim_end(&mut self, _final_tick: Tick, _summary: &SimSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
