//! Progress counting around the output observer.

use dd_building::ElevatorSnapshot;
use dd_core::Tick;
use dd_dispatch::Assignment;
use dd_requests::{CallRequest, Request, RequestRejection};
use dd_sim::{MetricsSummary, RequestMetrics, SimObserver};

/// Forwards every callback to `inner` and counts what went through.
pub struct CountingObserver<O: SimObserver> {
    pub inner:         O,
    pub snapshot_rows: usize,
    pub fallbacks:     usize,
}

impl<O: SimObserver> CountingObserver<O> {
    pub fn new(inner: O) -> Self {
        Self { inner, snapshot_rows: 0, fallbacks: 0 }
    }
}

impl<O: SimObserver> SimObserver for CountingObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_request_rejected(&mut self, call: &CallRequest, reason: &RequestRejection) {
        self.inner.on_request_rejected(call, reason);
    }

    fn on_request_dispatched(&mut self, tick: Tick, request: &Request, assignment: &Assignment) {
        if assignment.fallback {
            self.fallbacks += 1;
        }
        self.inner.on_request_dispatched(tick, request, assignment);
    }

    fn on_request_completed(&mut self, metrics: &RequestMetrics) {
        self.inner.on_request_completed(metrics);
    }

    fn on_snapshot(&mut self, tick: Tick, elevators: &[ElevatorSnapshot]) {
        self.snapshot_rows += elevators.len();
        self.inner.on_snapshot(tick, elevators);
    }

    fn on_tick_end(&mut self, tick: Tick) {
        self.inner.on_tick_end(tick);
    }

    fn on_sim_end(&mut self, final_tick: Tick, summary: &MetricsSummary) {
        self.inner.on_sim_end(final_tick, summary);
    }
}
