//! Tests for the CSV backend and the observer bridge.

use std::path::Path;

use cq_core::SimConfig;
use cq_sim::{NoPacer, SimBuilder};

use crate::{CsvWriter, LaneSummaryRow, OutputResult, OutputWriter, ServiceRow, SimOutputObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

/// A writer whose every call fails, for exercising the deferred-error path.
struct FailingWriter;

impl OutputWriter for FailingWriter {
    fn write_service(&mut self, _row: &ServiceRow) -> OutputResult<()> {
        Err(std::io::Error::other("disk full").into())
    }
    fn write_lane_summaries(&mut self, _rows: &[LaneSummaryRow]) -> OutputResult<()> {
        Err(std::io::Error::other("disk full").into())
    }
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer
            .write_service(&ServiceRow {
                tick: 9,
                lane: 0,
                customer_id: 3,
                waited_ticks: 9,
                items: 4,
                priority: true,
            })
            .unwrap();
        writer
            .write_lane_summaries(&[LaneSummaryRow {
                lane: 0,
                customers_processed: 1,
                average_wait_ticks: 9,
                items_processed: 4,
            }])
            .unwrap();
        writer.finish().unwrap();

        let services = read_lines(&dir.path().join("service_log.csv"));
        assert_eq!(services[0], "tick,lane,customer_id,waited_ticks,items,priority");
        assert_eq!(services[1], "9,0,3,9,4,1");

        let summaries = read_lines(&dir.path().join("lane_summaries.csv"));
        assert_eq!(
            summaries[0],
            "lane,customers_processed,average_wait_ticks,items_processed"
        );
        assert_eq!(summaries[1], "0,1,9,4");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

// ── Observer bridge over a real run ───────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[test]
    fn full_run_produces_one_row_per_service_and_lane() {
        let dir = tempfile::tempdir().unwrap();

        let mut cfg = SimConfig::with_target(20, 42);
        cfg.max_ticks = Some(10_000);
        let mut sim = SimBuilder::new(cfg).build().unwrap();

        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let summary = sim.run(&mut obs, &mut NoPacer).unwrap();
        assert!(obs.take_error().is_none());

        let services = read_lines(&dir.path().join("service_log.csv"));
        assert_eq!(services.len() as u64 - 1, summary.total_customers);

        let summaries = read_lines(&dir.path().join("lane_summaries.csv"));
        assert_eq!(summaries.len() - 1, summary.lanes.len());
    }

    #[test]
    fn writer_errors_are_deferred_not_lost() {
        let mut cfg = SimConfig::with_target(5, 7);
        cfg.max_ticks = Some(10_000);
        let mut sim = SimBuilder::new(cfg).build().unwrap();

        let mut obs = SimOutputObserver::new(FailingWriter);
        sim.run(&mut obs, &mut NoPacer).unwrap();

        let err = obs.take_error().expect("first write error kept");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none(), "take_error drains the slot");
    }
}
