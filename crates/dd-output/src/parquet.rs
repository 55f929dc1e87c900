//! Parquet output backend (feature `parquet`).
//!
//! Creates four files in the configured output directory:
//! - `elevator_snapshots.parquet`
//! - `request_log.parquet`
//! - `rejections.parquet`
//! - `metrics_summary.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Float64Builder, Int64Builder, StringBuilder, UInt16Builder, UInt32Builder,
    UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputError, OutputResult, RejectionRow, RequestLogRow, SummaryRow};

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",        DataType::UInt64, false),
        Field::new("elevator_id", DataType::UInt16, false),
        Field::new("floor",       DataType::UInt32, false),
        Field::new("status",      DataType::Utf8,   false),
        Field::new("onboard",     DataType::UInt32, false),
        Field::new("next_stops",  DataType::Utf8,   false),
    ]))
}

fn request_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("request_id",       DataType::UInt32, false),
        Field::new("elevator_id",      DataType::UInt16, false),
        Field::new("source",           DataType::UInt32, false),
        Field::new("dest",             DataType::UInt32, false),
        Field::new("call_tick",        DataType::UInt64, false),
        Field::new("pickup_tick",      DataType::UInt64, false),
        Field::new("dropoff_tick",     DataType::UInt64, false),
        Field::new("wait",             DataType::UInt64, false),
        Field::new("travel",           DataType::UInt64, false),
        Field::new("total",            DataType::UInt64, false),
        Field::new("estimated_wait",   DataType::UInt64, false),
        Field::new("estimated_travel", DataType::UInt64, false),
    ]))
}

fn rejection_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("request_id", DataType::UInt32, false),
        Field::new("time",       DataType::Int64,  false),
        Field::new("source",     DataType::Int64,  false),
        Field::new("dest",       DataType::Int64,  false),
        Field::new("reason",     DataType::Utf8,   false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("metric", DataType::Utf8,    false),
        Field::new("count",  DataType::UInt64,  false),
        Field::new("min",    DataType::UInt64,  false),
        Field::new("max",    DataType::UInt64,  false),
        Field::new("mean",   DataType::Float64, false),
        Field::new("median", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// One Parquet file and its schema.  `writer` is `None` once closed.
struct Sink {
    name:   &'static str,
    writer: Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
}

impl Sink {
    fn create(dir: &Path, name: &'static str, schema: Arc<Schema>) -> OutputResult<Self> {
        let file = File::create(dir.join(format!("{name}.parquet")))?;
        let writer = ArrowWriter::try_new(file, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { name, writer: Some(writer), schema })
    }

    fn write(&mut self, columns: Vec<ArrayRef>) -> OutputResult<()> {
        let writer = self.writer.as_mut().ok_or(OutputError::Closed(self.name))?;
        let batch = RecordBatch::try_new(Arc::clone(&self.schema), columns)?;
        writer.write(&batch)?;
        Ok(())
    }

    fn close(&mut self) -> OutputResult<()> {
        if let Some(w) = self.writer.take() {
            w.close()?;
        }
        Ok(())
    }
}

/// Writes simulation output to four Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    snapshots:  Sink,
    requests:   Sink,
    rejections: Sink,
    summary:    Sink,
}

impl ParquetWriter {
    /// Create all four Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            snapshots:  Sink::create(dir, "elevator_snapshots", snapshot_schema())?,
            requests:   Sink::create(dir, "request_log", request_schema())?,
            rejections: Sink::create(dir, "rejections", rejection_schema())?,
            summary:    Sink::create(dir, "metrics_summary", summary_schema())?,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let mut ticks      = UInt64Builder::new();
        let mut elevators  = UInt16Builder::new();
        let mut floors     = UInt32Builder::new();
        let mut statuses   = StringBuilder::new();
        let mut onboard    = UInt32Builder::new();
        let mut next_stops = StringBuilder::new();

        for row in rows {
            ticks.append_value(row.tick);
            elevators.append_value(row.elevator_id);
            floors.append_value(row.floor);
            statuses.append_value(row.status);
            onboard.append_value(row.onboard);
            next_stops.append_value(&row.next_stops);
        }

        self.snapshots.write(vec![
            Arc::new(ticks.finish()),
            Arc::new(elevators.finish()),
            Arc::new(floors.finish()),
            Arc::new(statuses.finish()),
            Arc::new(onboard.finish()),
            Arc::new(next_stops.finish()),
        ])
    }

    fn write_requests(&mut self, rows: &[RequestLogRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let mut ids       = UInt32Builder::new();
        let mut elevators = UInt16Builder::new();
        let mut sources   = UInt32Builder::new();
        let mut dests     = UInt32Builder::new();
        let mut calls     = UInt64Builder::new();
        let mut pickups   = UInt64Builder::new();
        let mut dropoffs  = UInt64Builder::new();
        let mut waits     = UInt64Builder::new();
        let mut travels   = UInt64Builder::new();
        let mut totals    = UInt64Builder::new();
        let mut est_waits = UInt64Builder::new();
        let mut est_rides = UInt64Builder::new();

        for row in rows {
            ids.append_value(row.request_id);
            elevators.append_value(row.elevator_id);
            sources.append_value(row.source);
            dests.append_value(row.dest);
            calls.append_value(row.call_tick);
            pickups.append_value(row.pickup_tick);
            dropoffs.append_value(row.dropoff_tick);
            waits.append_value(row.wait);
            travels.append_value(row.travel);
            totals.append_value(row.total);
            est_waits.append_value(row.estimated_wait);
            est_rides.append_value(row.estimated_travel);
        }

        self.requests.write(vec![
            Arc::new(ids.finish()),
            Arc::new(elevators.finish()),
            Arc::new(sources.finish()),
            Arc::new(dests.finish()),
            Arc::new(calls.finish()),
            Arc::new(pickups.finish()),
            Arc::new(dropoffs.finish()),
            Arc::new(waits.finish()),
            Arc::new(travels.finish()),
            Arc::new(totals.finish()),
            Arc::new(est_waits.finish()),
            Arc::new(est_rides.finish()),
        ])
    }

    fn write_rejections(&mut self, rows: &[RejectionRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let mut ids     = UInt32Builder::new();
        let mut times   = Int64Builder::new();
        let mut sources = Int64Builder::new();
        let mut dests   = Int64Builder::new();
        let mut reasons = StringBuilder::new();

        for row in rows {
            ids.append_value(row.request_id);
            times.append_value(row.time);
            sources.append_value(row.source);
            dests.append_value(row.dest);
            reasons.append_value(row.reason);
        }

        self.rejections.write(vec![
            Arc::new(ids.finish()),
            Arc::new(times.finish()),
            Arc::new(sources.finish()),
            Arc::new(dests.finish()),
            Arc::new(reasons.finish()),
        ])
    }

    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let mut metrics = StringBuilder::new();
        let mut counts  = UInt64Builder::new();
        let mut mins    = UInt64Builder::new();
        let mut maxes   = UInt64Builder::new();
        let mut means   = Float64Builder::new();
        let mut medians = Float64Builder::new();

        for row in rows {
            metrics.append_value(row.metric);
            counts.append_value(row.count);
            mins.append_value(row.min);
            maxes.append_value(row.max);
            means.append_value(row.mean);
            medians.append_value(row.median);
        }

        self.summary.write(vec![
            Arc::new(metrics.finish()),
            Arc::new(counts.finish()),
            Arc::new(mins.finish()),
            Arc::new(maxes.finish()),
            Arc::new(means.finish()),
            Arc::new(medians.finish()),
        ])
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.snapshots.close()?;
        self.requests.close()?;
        self.rejections.close()?;
        self.summary.close()?;
        Ok(())
    }
}
