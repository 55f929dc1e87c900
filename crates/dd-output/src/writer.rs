//! The `OutputWriter` trait implemented by all backend writers.

use crate::{ElevatorSnapshotRow, OutputResult, RejectionRow, RequestLogRow, SummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's elevator snapshots.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write completed requests.
    fn write_requests(&mut self, rows: &[RequestLogRow]) -> OutputResult<()>;

    /// Write requests refused at admission.
    fn write_rejections(&mut self, rows: &[RejectionRow]) -> OutputResult<()>;

    /// Write the run's aggregate metrics.
    fn write_summary(&mut self, rows: &[SummaryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
