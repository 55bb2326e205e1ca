//! End-of-run statistics, per lane and aggregate.

use cq_core::{LaneId, Tick};
use cq_lane::CheckoutLane;

/// Final counters for one lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaneSummary {
    pub lane: LaneId,
    pub customers_served: u64,
    /// Mean wait in whole ticks (integer division; 0 when nobody served).
    pub average_wait: u64,
    pub items_served: u64,
}

impl LaneSummary {
    pub fn of(lane: &CheckoutLane) -> Self {
        Self {
            lane:             lane.id(),
            customers_served: lane.customers_served(),
            average_wait:     lane.average_wait(),
            items_served:     lane.items_served(),
        }
    }
}

/// Whole-run statistics emitted once the simulation terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimSummary {
    pub lanes: Vec<LaneSummary>,
    pub total_customers: u64,
    pub total_items: u64,
    pub final_tick: Tick,
}

impl SimSummary {
    pub fn collect(lanes: &[CheckoutLane], final_tick: Tick) -> Self {
        let lanes: Vec<LaneSummary> = lanes.iter().map(LaneSummary::of).collect();
        let total_customers = lanes.iter().map(|l| l.customers_served).sum();
        let total_items = lanes.iter().map(|l| l.items_served).sum();
        Self { lanes, total_customers, total_items, final_tick }
    }
}
