//! The `Sim` struct and its tick loop.

use dd_building::{Building, ElevatorSnapshot, StepOutcome};
use dd_core::{BuildingConfig, SimClock, Tick};
use dd_dispatch::{DispatchPolicy, InsertionDispatcher};
use dd_requests::{ArrivalQueue, CallRequest, RequestRejection};
use log::info;

use crate::{MetricsAggregator, MetricsSummary, RequestLedger, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<D>` holds all simulation state.  Each tick:
///
/// 1. **Admission**: requests arriving this tick are entered in the ledger,
///    dispatched through `D` in ascending id order, and committed to the
///    chosen elevator's plan.
/// 2. **Advance**: every elevator, in id order, moves one floor toward its
///    next stop or services it.  Alighting passengers complete and their
///    metrics are recorded; boarding passengers become `Onboard`.
/// 3. **Snapshot**: every `snapshot_interval` ticks, the observer receives
///    one [`ElevatorSnapshot`] per elevator.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: DispatchPolicy = InsertionDispatcher> {
    /// Building configuration, including the optional tick limit.
    pub config: BuildingConfig,

    /// Simulation clock.  After [`run`][Self::run] returns, its current tick
    /// is the total simulated time.
    pub clock: SimClock,

    pub(crate) building:          Building,
    pub(crate) arrivals:          ArrivalQueue,
    pub(crate) ledger:            RequestLedger,
    pub(crate) metrics:           MetricsAggregator,
    pub(crate) dispatcher:        D,
    pub(crate) snapshot_interval: u64,

    /// Rejections not yet delivered to an observer.
    pub(crate) unreported: Vec<(CallRequest, RequestRejection)>,
}

impl<D: DispatchPolicy> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every admitted request has completed.
    ///
    /// Returns the metrics summary, which is also passed to
    /// [`SimObserver::on_sim_end`].  Fails with [`SimError::TickLimit`] if
    /// `config.max_ticks` is set and reached first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<MetricsSummary> {
        info!(
            "simulating {} requests on {} elevators, {} floors",
            self.arrivals.len() + self.ledger.len(),
            self.building.elevators().len(),
            self.building.floor_count(),
        );
        self.report_rejections(observer);

        while !self.is_finished() {
            let now = self.clock.current_tick;
            if let Some(limit) = self.config.max_ticks {
                if now.0 >= limit {
                    return Err(SimError::TickLimit {
                        limit,
                        tick: now,
                        open: self.ledger.open() + self.arrivals.len(),
                    });
                }
            }
            self.tick(now, observer)?;
        }

        let summary = self.metrics.summary();
        info!(
            "served {} requests in {} ticks (mean wait {:.2}, mean total {:.2})",
            summary.served,
            self.clock.current_tick.0,
            summary.wait.mean,
            summary.total.mean,
        );
        observer.on_sim_end(self.clock.current_tick, &summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks from the current position, ignoring the
    /// termination test and the tick limit.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.report_rejections(observer);
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick(now, observer)?;
        }
        Ok(())
    }

    /// `true` once no arrivals remain, every admitted request is completed,
    /// and every elevator is idle.
    pub fn is_finished(&self) -> bool {
        self.arrivals.is_empty() && self.ledger.open() == 0 && self.building.all_idle()
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn ledger(&self) -> &RequestLedger {
        &self.ledger
    }

    pub fn metrics(&self) -> &MetricsAggregator {
        &self.metrics
    }

    /// Admitted requests whose arrival tick has not been reached yet.
    pub fn pending_arrivals(&self) -> usize {
        self.arrivals.len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(now);
        self.admit(now, observer)?;
        self.advance(now, observer);

        if self.snapshot_interval > 0 && now.0 % self.snapshot_interval == 0 {
            let snapshots: Vec<ElevatorSnapshot> =
                self.building.elevators().iter().map(|e| e.snapshot(now)).collect();
            observer.on_snapshot(now, &snapshots);
        }

        observer.on_tick_end(now);
        self.clock.advance();
        Ok(())
    }

    /// Dispatch and commit every request arriving at `now`.
    fn admit<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        // Arrivals come back sorted by id.
        let Some(arrived) = self.arrivals.drain_tick(now) else {
            return Ok(());
        };
        for request in arrived {
            self.ledger.admit(request);
            let assignment = self.dispatcher.assign(&self.building, &request);
            self.building.commit(
                assignment.elevator(),
                request.id,
                request.source,
                request.dest,
                assignment.insertion(),
            )?;
            self.ledger.assign(request.id, assignment);
            observer.on_request_dispatched(now, &request, &assignment);
        }
        Ok(())
    }

    /// Step every elevator once, in id order.
    fn advance<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        for elevator in self.building.elevators_mut() {
            let StepOutcome::Serviced { alighted, boarded, .. } = elevator.step() else {
                continue;
            };
            for id in alighted {
                let metrics = self.ledger.complete(id, elevator.id, now);
                observer.on_request_completed(&metrics);
                self.metrics.record(metrics);
            }
            for id in boarded {
                self.ledger.board(id, elevator.id, now);
            }
        }
    }

    fn report_rejections<O: SimObserver>(&mut self, observer: &mut O) {
        for (call, reason) in self.unreported.drain(..) {
            observer.on_request_rejected(&call, &reason);
        }
    }
}
