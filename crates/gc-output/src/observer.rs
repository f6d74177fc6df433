//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use gc_car::CarRoster;
use gc_core::Tick;
use gc_sim::{CollisionEvent, SimObserver, SimReport};
use tracing::warn;

use crate::row::{CarSnapshotRow, CollisionRow, ReportRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes snapshots, collision events and the final
/// report to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run_with()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "simulation output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_collision(&mut self, event: &CollisionEvent) {
        let result = self.writer.write_collision(&CollisionRow::from(event));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, cars: &CarRoster) {
        let rows: Vec<CarSnapshotRow> = cars
            .enumerate()
            .map(|(id, car)| CarSnapshotRow::new(tick, id, car))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, report: &SimReport) {
        let rows: Vec<ReportRow> = report.outcomes.iter().map(ReportRow::from).collect();
        let result = self.writer.write_report(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
