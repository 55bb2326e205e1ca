//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `service_log.csv`
//! - `lane_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{LaneSummaryRow, OutputResult, ServiceRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    services:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut services = Writer::from_path(dir.join("service_log.csv"))?;
        services.write_record(["tick", "lane", "customer_id", "waited_ticks", "items", "priority"])?;

        let mut summaries = Writer::from_path(dir.join("lane_summaries.csv"))?;
        summaries.write_record(["lane", "customers_processed", "average_wait_ticks", "items_processed"])?;

        Ok(Self {
            services,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_service(&mut self, row: &ServiceRow) -> OutputResult<()> {
        self.services.write_record(&[
            row.tick.to_string(),
            row.lane.to_string(),
            row.customer_id.to_string(),
            row.waited_ticks.to_string(),
            row.items.to_string(),
            (row.priority as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_lane_summaries(&mut self, rows: &[LaneSummaryRow]) -> OutputResult<()> {
        for row in rows {
            self.summaries.write_record(&[
                row.lane.to_string(),
                row.customers_processed.to_string(),
                row.average_wait_ticks.to_string(),
                row.items_processed.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.services.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
