//! Integration tests for gc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{COLLISIONS_FILE, CsvWriter, REPORT_FILE, SNAPSHOTS_FILE};
    use crate::row::{CarSnapshotRow, CollisionRow, ReportRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn snap_row(car_id: u32, tick: u64) -> CarSnapshotRow {
        CarSnapshotRow {
            tick,
            car_id,
            name:     format!("Car{car_id}"),
            x:        car_id as i32,
            y:        2,
            heading:  'N',
            collided: false,
        }
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join(SNAPSHOTS_FILE).exists());
        assert!(out.join(COLLISIONS_FILE).exists());
        assert!(out.join(REPORT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join(SNAPSHOTS_FILE)),
            ["tick", "car_id", "name", "x", "y", "heading", "collided"],
        );
        assert_eq!(
            headers(&dir.path().join(COLLISIONS_FILE)),
            ["tick", "x", "y", "occupants", "newly_collided"],
        );
        assert_eq!(
            headers(&dir.path().join(REPORT_FILE)),
            ["name", "status", "x", "y", "heading", "tick", "partners"],
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");     // tick
        assert_eq!(&rows[1][2], "Car1");  // name
        assert_eq!(&rows[1][5], "N");     // heading
        assert_eq!(&rows[1][6], "0");     // collided
    }

    #[test]
    fn csv_collision_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_collision(&CollisionRow {
            tick:           3,
            x:              1,
            y:              0,
            occupants:      "0;1;2".into(),
            newly_collided: "2".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(COLLISIONS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][3], "0;1;2");
        assert_eq!(&rows[0][4], "2");
    }

    #[test]
    fn csv_report_leaves_unused_fields_empty() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_report(&[ReportRow {
            name:     "A".into(),
            status:   "survived",
            x:        4,
            y:        4,
            heading:  Some('E'),
            tick:     None,
            partners: String::new(),
        }])
        .unwrap();
        w.finish().unwrap();

        let rows = records(&dir.path().join(REPORT_FILE));
        assert_eq!(&rows[0][4], "E");
        assert_eq!(&rows[0][5], "");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use gc_car::CarSpec;
    use gc_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{COLLISIONS_FILE, CsvWriter, REPORT_FILE, SNAPSHOTS_FILE};
    use crate::{CarSnapshotRow, CollisionRow, OutputResult, OutputWriter, ReportRow, SimOutputObserver};

    fn records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    fn crash_sim(snapshot_interval: u64) -> gc_sim::Sim {
        SimBuilder::grid(10, 10)
            .unwrap()
            .car(CarSpec::parse("Car1", 2, 2, "N", "FF").unwrap())
            .car(CarSpec::parse("Car2", 2, 4, "S", "FF").unwrap())
            .car(CarSpec::parse("Car3", 7, 7, "E", "FFF").unwrap())
            .snapshot_interval(snapshot_interval)
            .build()
            .unwrap()
    }

    #[test]
    fn full_run_writes_all_files() {
        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let mut sim = crash_sim(1);
        sim.run_with(&mut obs);
        assert!(obs.take_error().is_none());

        // Starting positions plus 3 ticks, × 3 cars.
        let snaps = records(&dir.path().join(SNAPSHOTS_FILE));
        assert_eq!(snaps.len(), 12);
        assert_eq!(&snaps[0][0], "0");
        assert_eq!((&snaps[0][3], &snaps[0][4]), ("2", "2")); // Car1 start
        assert_eq!(&snaps[0][6], "0");
        assert_eq!(&snaps[3][0], "1");
        assert_eq!(&snaps[3][6], "1"); // Car1 collided on tick 1

        let collisions = records(&dir.path().join(COLLISIONS_FILE));
        assert_eq!(collisions.len(), 1);
        assert_eq!(&collisions[0][0], "1");
        assert_eq!(&collisions[0][3], "0;1");

        let report = records(&dir.path().join(REPORT_FILE));
        assert_eq!(report.len(), 3);
        assert_eq!(&report[0][1], "collided");
        assert_eq!(&report[0][6], "Car2");
        assert_eq!(&report[2][1], "survived");
        assert_eq!(&report[2][2], "9"); // clamped at the east edge
    }

    #[test]
    fn snapshots_disabled() {
        let dir = TempDir::new().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        crash_sim(0).run_with(&mut obs);
        assert!(records(&dir.path().join(SNAPSHOTS_FILE)).is_empty());
    }

    #[test]
    fn rerun_does_not_duplicate_report_rows() {
        let dir = TempDir::new().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut sim = crash_sim(1);
        sim.run_with(&mut obs);
        sim.run_with(&mut obs);
        assert!(obs.take_error().is_none());
        assert_eq!(records(&dir.path().join(REPORT_FILE)).len(), 3);
        assert_eq!(records(&dir.path().join(SNAPSHOTS_FILE)).len(), 12);
    }

    /// Writer whose every call fails.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[CarSnapshotRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_collision(&mut self, _row: &CollisionRow) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn write_report(&mut self, _rows: &[ReportRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept_and_run_completes() {
        let mut obs = SimOutputObserver::new(FailingWriter);
        let report = crash_sim(1).run_with(&mut obs);
        assert_eq!(report.outcomes.len(), 3);
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }
}
