//! Plain data row types written by output backends.

/// One completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRow {
    pub tick:         u64,
    /// 0-based lane index; 0 is the express lane.
    pub lane:         u16,
    pub customer_id:  u32,
    pub waited_ticks: u64,
    pub items:        u64,
    pub priority:     bool,
}

/// Final counters for one lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneSummaryRow {
    pub lane:                u16,
    pub customers_processed: u64,
    /// Whole ticks, integer division; 0 when the lane served nobody.
    pub average_wait_ticks:  u64,
    pub items_processed:     u64,
}
