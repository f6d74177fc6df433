//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CarSnapshotRow, CollisionRow, OutputResult, ReportRow};

/// Trait implemented by output backends.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by the observer.
pub trait OutputWriter {
    /// Write a batch of car snapshots.
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()>;

    /// Write one collision event.
    fn write_collision(&mut self, row: &CollisionRow) -> OutputResult<()>;

    /// Write the final report, one row per car.
    fn write_report(&mut self, rows: &[ReportRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
