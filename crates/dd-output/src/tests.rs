//! Integration tests for dd-output.

use crate::row::{ElevatorSnapshotRow, RejectionRow, RequestLogRow, SummaryRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snap_row(elevator_id: u16, tick: u64) -> ElevatorSnapshotRow {
    ElevatorSnapshotRow {
        tick,
        elevator_id,
        floor:      3 + elevator_id as u32,
        status:     "moving_up",
        onboard:    1,
        next_stops: "7 9".to_string(),
    }
}

fn request_row(request_id: u32) -> RequestLogRow {
    RequestLogRow {
        request_id,
        elevator_id:      0,
        source:           3,
        dest:             7,
        call_tick:        0,
        pickup_tick:      2,
        dropoff_tick:     7,
        wait:             2,
        travel:           4,
        total:            6,
        estimated_wait:   2,
        estimated_travel: 4,
    }
}

fn rejection_row(request_id: u32) -> RejectionRow {
    RejectionRow { request_id, time: 0, source: 4, dest: 4, reason: "same_floor" }
}

fn summary_row(metric: &'static str) -> SummaryRow {
    SummaryRow { metric, count: 4, min: 1, max: 9, mean: 4.25, median: 3.5 }
}

// ── Row conversion ────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use dd_building::{ElevatorSnapshot, ElevatorStatus};
    use dd_core::{ElevatorId, Floor, RequestId, Tick};
    use dd_requests::{CallRequest, RequestRejection};

    use crate::row::{ElevatorSnapshotRow, RejectionRow};

    #[test]
    fn snapshot_row_joins_next_stops() {
        let snapshot = ElevatorSnapshot {
            tick:       Tick(12),
            elevator:   ElevatorId(2),
            floor:      Floor(5),
            status:     ElevatorStatus::MovingDown,
            onboard:    3,
            next_stops: vec![Floor(4), Floor(1), Floor(6)],
        };
        let row = ElevatorSnapshotRow::from(&snapshot);
        assert_eq!(row.tick, 12);
        assert_eq!(row.elevator_id, 2);
        assert_eq!(row.status, "moving_down");
        assert_eq!(row.next_stops, "4 1 6");
    }

    #[test]
    fn idle_snapshot_has_empty_stops() {
        let snapshot = ElevatorSnapshot {
            tick:       Tick(0),
            elevator:   ElevatorId(0),
            floor:      Floor(1),
            status:     ElevatorStatus::Idle,
            onboard:    0,
            next_stops: vec![],
        };
        assert_eq!(ElevatorSnapshotRow::from(&snapshot).next_stops, "");
    }

    #[test]
    fn rejection_row_keeps_raw_values() {
        let call = CallRequest::new(-3, 8, 2, 5);
        let reason = RequestRejection::NegativeArrival { id: RequestId(8), time: -3 };
        let row = RejectionRow::new(&call, &reason);
        assert_eq!((row.request_id, row.time, row.reason), (8, -3, "negative_arrival"));
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        for name in ["elevator_snapshots.csv", "request_log.csv", "rejections.csv", "metrics_summary.csv"] {
            assert!(dir.path().join(name).exists(), "{name}");
        }
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("elevator_snapshots.csv")),
            ["tick", "elevator_id", "floor", "status", "onboard", "next_stops"]
        );
        assert_eq!(
            headers(dir.path().join("metrics_summary.csv")),
            ["metric", "count", "min", "max", "mean", "median"]
        );
        assert_eq!(headers(dir.path().join("request_log.csv")).len(), 12);
    }

    #[test]
    fn csv_write_after_finish_fails() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let err = w.write_snapshots(&[snap_row(0, 0)]).unwrap_err();
        assert!(matches!(err, crate::OutputError::Closed("elevator_snapshots")));
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "1"); // elevator_id
        assert_eq!(&rows[1][2], "4"); // floor
        assert_eq!(&rows[0][5], "7 9");
    }

    #[test]
    fn csv_request_and_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_requests(&[request_row(1), request_row(2)]).unwrap();
        w.write_rejections(&[rejection_row(3)]).unwrap();
        w.write_summary(&[summary_row("wait")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("request_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][9], "6"); // total

        let mut rdr = csv::Reader::from_path(dir.path().join("rejections.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "same_floor");

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics_summary.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "wait");
        assert_eq!(&rows[0][4], "4.250");
        assert_eq!(&rows[0][5], "3.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use dd_core::BuildingConfig;
        use dd_requests::CallRequest;
        use dd_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let config = BuildingConfig { floor_count: 10, elevator_count: 2, capacity: 4, max_ticks: None };
        let requests = vec![
            CallRequest::new(0, 2, 3, 7),
            CallRequest::new(1, 1, 8, 2),
            CallRequest::new(1, 5, 4, 4),
        ];
        let mut sim = SimBuilder::new(config)
            .requests(requests)
            .snapshot_interval(2)
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        let summary = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Snapshots at even ticks, two elevators each.
        let final_tick = sim.clock.current_tick.0;
        let expected = final_tick.div_ceil(2) * 2;
        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count() as u64, expected);

        // Request log is ordered by request id.
        let mut rdr = csv::Reader::from_path(dir.path().join("request_log.csv")).unwrap();
        let ids: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_string()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(summary.served, 2);

        let mut rdr = csv::Reader::from_path(dir.path().join("rejections.csv")).unwrap();
        assert_eq!(rdr.records().count(), 1);

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics_summary.csv")).unwrap();
        let metrics: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_string()).collect();
        assert_eq!(metrics, ["wait", "travel", "total"]);
    }

    #[test]
    fn tick_limit_keeps_completed_rows() {
        use dd_core::{BuildingConfig, Tick};
        use dd_requests::CallRequest;
        use dd_sim::{SimBuilder, SimError, SimObserver};

        use crate::observer::SimOutputObserver;

        let config = BuildingConfig { floor_count: 10, elevator_count: 1, capacity: 4, max_ticks: Some(12) };
        let requests = vec![CallRequest::new(0, 1, 3, 7), CallRequest::new(20, 2, 9, 2)];
        let mut sim = SimBuilder::new(config).requests(requests).build().unwrap();

        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let err = sim.run(&mut obs).unwrap_err();
        assert!(matches!(err, SimError::TickLimit { limit: 12, tick: Tick(12), open: 1 }));

        let partial = sim.metrics().summary();
        obs.on_sim_end(sim.clock.current_tick, &partial);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("request_log.csv")).unwrap();
        let ids: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_string()).collect();
        assert_eq!(ids, ["1"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("metrics_summary.csv")).unwrap();
        let counts: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_string()).collect();
        assert_eq!(counts, ["1", "1", "1"]);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1), snap_row(2, 1)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM elevator_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_rerun_in_same_dir_replaces_rows() {
        let dir = tmp();
        for _ in 0..2 {
            let mut w = SqliteWriter::new(dir.path()).unwrap();
            w.write_snapshots(&[snap_row(0, 1), snap_row(1, 1)]).unwrap();
            w.write_requests(&[request_row(1)]).unwrap();
            w.write_summary(&[summary_row("wait")]).unwrap();
            w.finish().unwrap();
        }

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count = |table: &str| -> i64 {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0)).unwrap()
        };
        assert_eq!(count("elevator_snapshots"), 2);
        assert_eq!(count("request_log"), 1);
        assert_eq!(count("metrics_summary"), 1);
    }

    #[test]
    fn sqlite_status_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 0)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (status, stops): (String, String) = conn.query_row(
            "SELECT status, next_stops FROM elevator_snapshots WHERE elevator_id = 0",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(status, "moving_up");
        assert_eq!(stops, "7 9");
    }

    #[test]
    fn sqlite_request_log() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_requests(&[request_row(4)]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (wait, total): (i64, i64) = conn.query_row(
            "SELECT wait, total FROM request_log WHERE request_id = 4",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!((wait, total), (2, 6));
    }

    #[test]
    fn sqlite_rejections_and_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_rejections(&[rejection_row(1), rejection_row(2)]).unwrap();
        w.write_summary(&[summary_row("wait"), summary_row("total")]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let rejected: i64 = conn.query_row("SELECT COUNT(*) FROM rejections", [], |r| r.get(0)).unwrap();
        assert_eq!(rejected, 2);
        let mean: f64 = conn.query_row(
            "SELECT mean FROM metrics_summary WHERE metric = 'total'", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(mean, 4.25);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use tempfile::TempDir;

    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::*;
    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        for name in [
            "elevator_snapshots.parquet",
            "request_log.parquet",
            "rejections.parquet",
            "metrics_summary.parquet",
        ] {
            assert!(dir.path().join(name).exists(), "{name}");
        }
    }

    #[test]
    fn parquet_write_after_finish_fails() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let err = w.write_requests(&[request_row(1)]).unwrap_err();
        assert!(matches!(err, crate::OutputError::Closed("request_log")));
    }

    #[test]
    fn parquet_snapshot_round_trip() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 2), snap_row(1, 2)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("elevator_snapshots.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let reader = builder.build().unwrap();

        let total_rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(total_rows, 2, "expected 2 rows");

        let field_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(field_names, ["tick", "elevator_id", "floor", "status", "onboard", "next_stops"]);
    }

    #[test]
    fn parquet_summary_column_types() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_summary(&[summary_row("wait")]).unwrap();
        w.write_requests(&[request_row(1)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("metrics_summary.parquet")).unwrap();
        let schema = ParquetRecordBatchReaderBuilder::try_new(file).unwrap().schema().clone();
        assert_eq!(*schema.field_with_name("mean").unwrap().data_type(), DataType::Float64);
        assert_eq!(*schema.field_with_name("metric").unwrap().data_type(), DataType::Utf8);
    }

    #[test]
    fn parquet_finish_required() {
        // A writer dropped without finish() leaves no footer.
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_snapshots(&[snap_row(0, 0)]).unwrap();
        }

        let file = std::fs::File::open(dir.path().join("elevator_snapshots.parquet")).unwrap();
        let result = ParquetRecordBatchReaderBuilder::try_new(file);
        assert!(result.is_err(), "file without Parquet footer should fail to open");
    }
}
