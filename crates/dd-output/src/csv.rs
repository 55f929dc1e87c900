//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `elevator_snapshots.csv`
//! - `request_log.csv`
//! - `rejections.csv`
//! - `metrics_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputError, OutputResult, RejectionRow, RequestLogRow, SummaryRow};

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    requests:   Writer<File>,
    rejections: Writer<File>,
    summary:    Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(["tick", "elevator_id", "floor", "status", "onboard", "next_stops"])?;

        let mut requests = Writer::from_path(dir.join("request_log.csv"))?;
        requests.write_record([
            "request_id",
            "elevator_id",
            "source",
            "dest",
            "call_tick",
            "pickup_tick",
            "dropoff_tick",
            "wait",
            "travel",
            "total",
            "estimated_wait",
            "estimated_travel",
        ])?;

        let mut rejections = Writer::from_path(dir.join("rejections.csv"))?;
        rejections.write_record(["request_id", "time", "source", "dest", "reason"])?;

        let mut summary = Writer::from_path(dir.join("metrics_summary.csv"))?;
        summary.write_record(["metric", "count", "min", "max", "mean", "median"])?;

        Ok(Self {
            snapshots,
            requests,
            rejections,
            summary,
            finished: false,
        })
    }

    fn check_open(&self, stream: &'static str) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Closed(stream));
        }
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        self.check_open("elevator_snapshots")?;
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elevator_id.to_string(),
                row.floor.to_string(),
                row.status.to_string(),
                row.onboard.to_string(),
                row.next_stops.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_requests(&mut self, rows: &[RequestLogRow]) -> OutputResult<()> {
        self.check_open("request_log")?;
        for row in rows {
            self.requests.write_record(&[
                row.request_id.to_string(),
                row.elevator_id.to_string(),
                row.source.to_string(),
                row.dest.to_string(),
                row.call_tick.to_string(),
                row.pickup_tick.to_string(),
                row.dropoff_tick.to_string(),
                row.wait.to_string(),
                row.travel.to_string(),
                row.total.to_string(),
                row.estimated_wait.to_string(),
                row.estimated_travel.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_rejections(&mut self, rows: &[RejectionRow]) -> OutputResult<()> {
        self.check_open("rejections")?;
        for row in rows {
            self.rejections.write_record(&[
                row.request_id.to_string(),
                row.time.to_string(),
                row.source.to_string(),
                row.dest.to_string(),
                row.reason.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        self.check_open("metrics_summary")?;
        for row in rows {
            self.summary.write_record(&[
                row.metric.to_string(),
                row.count.to_string(),
                row.min.to_string(),
                row.max.to_string(),
                format!("{:.3}", row.mean),
                format!("{:.1}", row.median),
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
        self.requests.flush()?;
        self.rejections.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
