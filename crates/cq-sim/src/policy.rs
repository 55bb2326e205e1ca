//! Lane assignment policy and the arrival event it produces.
//!
//! The policy is a pure function of draws already made (priority flag,
//! basket size) plus the sequential admission index, so routing scenarios
//! are unit-testable without touching the RNG.

use cq_core::{CustomerId, LaneId, Tick};

/// The distinguished express lane: small-basket, non-priority customers are
/// sent here regardless of its current load.
pub const EXPRESS_LANE: LaneId = LaneId(0);

/// Outcome of one routing decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Routing {
    pub lane: LaneId,
    /// `true` when the express rule (rather than round-robin) chose the lane.
    pub express: bool,
}

/// Pick a lane for one admitted customer.
///
/// - Priority customers round-robin across all lanes by 0-based
///   `admission_index`, ignoring queue lengths.
/// - Non-priority customers with `basket_len <= express_item_limit` go to
///   [`EXPRESS_LANE`].
/// - Everyone else uses the same round-robin index.
///
/// No exclusion between the express rule and round-robin: lane 0 receives
/// both traffic classes, and can run hot because of it.
pub fn choose_lane(
    priority: bool,
    basket_len: usize,
    admission_index: u64,
    lane_count: u16,
    express_item_limit: usize,
) -> Routing {
    let round_robin = LaneId((admission_index % lane_count as u64) as u16);
    if !priority && basket_len <= express_item_limit {
        Routing { lane: EXPRESS_LANE, express: true }
    } else {
        Routing { lane: round_robin, express: false }
    }
}

/// One admission, as reported to observers after the customer is enqueued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrivalEvent {
    pub tick: Tick,
    pub customer: CustomerId,
    /// Basket size after stock-limited selection.
    pub items: usize,
    /// Minimum ticks before the customer can check out (draws × 2).
    pub wait_budget: u64,
    pub priority: bool,
    pub lane: LaneId,
    /// Whether the express rule picked the lane.
    pub express: bool,
}
