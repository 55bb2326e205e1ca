//! The `OutputWriter` trait implemented by backend writers.

use crate::{LaneSummaryRow, OutputResult, ServiceRow};

/// Backend writer interface.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one completed-checkout row.
    fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()>;

    /// Write the end-of-run lane summaries.
    fn write_lane_summaries(&mut self, rows: &[LaneSummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
