//! `gc-output` — simulation output writers for the `gridcar` simulator.
//!
//! | Backend | Files created                                          |
//! |---------|--------------------------------------------------------|
//! | CSV     | `car_snapshots.csv`, `collisions.csv`, `report.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `gc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let report = sim.run_with(&mut obs);
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

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CarSnapshotRow, CollisionRow, ReportRow};
pub use writer::OutputWriter;
