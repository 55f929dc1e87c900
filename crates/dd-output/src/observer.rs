//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use dd_building::ElevatorSnapshot;
use dd_core::Tick;
use dd_requests::{CallRequest, RequestRejection};
use dd_sim::{MetricsSummary, RequestMetrics, SimObserver};

use crate::row::{ElevatorSnapshotRow, RejectionRow, RequestLogRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes elevator snapshots, the request log,
/// rejections and the metrics summary to any [`OutputWriter`] backend.
///
/// Snapshots are written as they arrive.  Request and rejection rows are
/// buffered and written, ordered by request id, when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    requests:   Vec<RequestLogRow>,
    rejections: Vec<RejectionRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            requests:   Vec::new(),
            rejections: Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_request_rejected(&mut self, call: &CallRequest, reason: &RequestRejection) {
        self.rejections.push(RejectionRow::new(call, reason));
    }

    fn on_request_completed(&mut self, metrics: &RequestMetrics) {
        self.requests.push(RequestLogRow::from(metrics));
    }

    fn on_snapshot(&mut self, _tick: Tick, elevators: &[ElevatorSnapshot]) {
        let rows: Vec<ElevatorSnapshotRow> = elevators.iter().map(ElevatorSnapshotRow::from).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, summary: &MetricsSummary) {
        self.requests.sort_by_key(|r| r.request_id);
        self.rejections.sort_by_key(|r| r.request_id);

        let summary_rows = [
            SummaryRow::new("wait", summary.served, &summary.wait),
            SummaryRow::new("travel", summary.served, &summary.travel),
            SummaryRow::new("total", summary.served, &summary.total),
        ];

        let result = self.writer.write_requests(&self.requests);
        self.store_err(result);
        let result = self.writer.write_rejections(&self.rejections);
        self.store_err(result);
        let result = self.writer.write_summary(&summary_rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
