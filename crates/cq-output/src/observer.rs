//! `SimOutputObserver<W>` — bridges `cq_sim::SimObserver` to an `OutputWriter`.

use cq_core::{LaneId, Tick};
use cq_lane::ServiceRecord;
use cq_sim::{SimObserver, SimSummary};

use crate::row::{LaneSummaryRow, ServiceRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes the service log and lane summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_served(&mut self, tick: Tick, lane: LaneId, record: &ServiceRecord) {
        let row = ServiceRow {
            tick:         tick.0,
            lane:         lane.0,
            customer_id:  record.customer.0,
            waited_ticks: record.waited,
            items:        record.items as u64,
            priority:     record.priority,
        };
        let result = self.writer.write_service(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, summary: &SimSummary) {
        let rows: Vec<LaneSummaryRow> = summary
            .lanes
            .iter()
            .map(|l| LaneSummaryRow {
                lane:                l.lane.0,
                customers_processed: l.customers_served,
                average_wait_ticks:  l.average_wait,
                items_processed:     l.items_served,
            })
            .collect();

        let result = self.writer.write_lane_summaries(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
