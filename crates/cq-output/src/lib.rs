//! `cq-output` — machine-readable output for the rust_cq simulation.
//!
//! The console event log lives in the application crate; this crate records
//! the same observable events in CSV form:
//!
//! | File                | Rows                                          |
//! |---------------------|-----------------------------------------------|
//! | `service_log.csv`   | one per completed checkout                    |
//! | `lane_summaries.csv`| one per lane, written at simulation end       |
//!
//! The backend sits behind the [`OutputWriter`] trait and is driven by
//! [`SimOutputObserver`], which implements `cq_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cq_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs, &mut NoPacer)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{LaneSummaryRow, ServiceRow};
pub use writer::OutputWriter;
