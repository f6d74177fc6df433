//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `car_snapshots.csv`
//! - `collisions.csv`
//! - `report.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CarSnapshotRow, CollisionRow, OutputResult, ReportRow};

pub const SNAPSHOTS_FILE:  &str = "car_snapshots.csv";
pub const COLLISIONS_FILE: &str = "collisions.csv";
pub const REPORT_FILE:     &str = "report.csv";

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    collisions: Writer<File>,
    report:     Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOTS_FILE))?;
        snapshots.write_record(["tick", "car_id", "name", "x", "y", "heading", "collided"])?;

        let mut collisions = Writer::from_path(dir.join(COLLISIONS_FILE))?;
        collisions.write_record(["tick", "x", "y", "occupants", "newly_collided"])?;

        let mut report = Writer::from_path(dir.join(REPORT_FILE))?;
        report.write_record(["name", "status", "x", "y", "heading", "tick", "partners"])?;

        Ok(Self {
            snapshots,
            collisions,
            report,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[CarSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.car_id.to_string(),
                row.name.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.to_string(),
                (row.collided as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_collision(&mut self, row: &CollisionRow) -> OutputResult<()> {
        self.collisions.write_record(&[
            row.tick.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.occupants.clone(),
            row.newly_collided.clone(),
        ])?;
        Ok(())
    }

    fn write_report(&mut self, rows: &[ReportRow]) -> OutputResult<()> {
        for row in rows {
            self.report.write_record(&[
                row.name.clone(),
                row.status.to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.heading.map(String::from).unwrap_or_default(),
                row.tick.map(|t| t.to_string()).unwrap_or_default(),
                row.partners.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.collisions.flush()?;
        self.report.flush()?;
        Ok(())
    }
}
