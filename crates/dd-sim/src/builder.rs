//! Fluent builder for constructing a [`Sim`].

use dd_building::Building;
use dd_core::{BuildingConfig, DdError, SimClock};
use dd_dispatch::{DispatchPolicy, InsertionDispatcher};
use dd_requests::{ArrivalQueue, CallRequest, RequestValidator};
use log::{debug, warn};

use crate::{MetricsAggregator, RequestLedger, Sim, SimResult};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`]: floors, elevators, capacity, optional tick limit
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                  |
/// |--------------------------|------------------------------------------|
/// | `.requests(v)`           | No requests                              |
/// | `.building(b)`           | `Building::new(&config)` (all at floor 1) |
/// | `.dispatcher(d)`         | [`InsertionDispatcher`]                  |
/// | `.snapshot_interval(n)`  | `1` (every tick); `0` disables snapshots |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .requests(load_requests_csv(path)?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: DispatchPolicy = InsertionDispatcher> {
    config:            BuildingConfig,
    requests:          Vec<CallRequest>,
    building:          Option<Building>,
    dispatcher:        D,
    snapshot_interval: u64,
}

impl SimBuilder<InsertionDispatcher> {
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            requests:          Vec::new(),
            building:          None,
            dispatcher:        InsertionDispatcher,
            snapshot_interval: 1,
        }
    }
}

impl<D: DispatchPolicy> SimBuilder<D> {
    /// Supply the request stream.  Order does not matter; requests are
    /// validated in `(time, id)` order, so among duplicate ids the earliest
    /// is kept.
    pub fn requests(mut self, requests: Vec<CallRequest>) -> Self {
        self.requests = requests;
        self
    }

    /// Start from an explicit building instead of the config's default
    /// layout, e.g. with elevators parked on different floors.  Its floor
    /// and elevator counts must match the config, and every elevator must
    /// be empty with no stops planned.
    pub fn building(mut self, building: Building) -> Self {
        self.building = Some(building);
        self
    }

    /// Replace the dispatch policy.
    pub fn dispatcher<E: DispatchPolicy>(self, dispatcher: E) -> SimBuilder<E> {
        SimBuilder {
            config:            self.config,
            requests:          self.requests,
            building:          self.building,
            dispatcher,
            snapshot_interval: self.snapshot_interval,
        }
    }

    /// Report elevator snapshots every `n` ticks (`0` = never).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate the config and every request, and return a ready-to-run
    /// [`Sim`].
    ///
    /// Invalid configuration fails the build.  Invalid requests do not:
    /// they are logged, counted, and reported to the observer when the run
    /// starts.
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config.validate()?;

        let building = match self.building {
            Some(b) => {
                if b.floor_count() != self.config.floor_count
                    || b.elevators().len() != self.config.elevator_count as usize
                {
                    return Err(DdError::Config(format!(
                        "building has {} floors and {} elevators, config says {} and {}",
                        b.floor_count(),
                        b.elevators().len(),
                        self.config.floor_count,
                        self.config.elevator_count,
                    ))
                    .into());
                }
                if let Some(busy) = b.elevators().iter().find(|e| !e.is_idle() || !e.onboard().is_empty()) {
                    return Err(DdError::Config(format!(
                        "elevator {} must start with an empty plan and no passengers",
                        busy.id
                    ))
                    .into());
                }
                b
            }
            None => Building::new(&self.config)?,
        };

        // ── Admission checks ──────────────────────────────────────────────
        let mut requests = self.requests;
        requests.sort_by_key(|r| (r.time, r.id));

        let mut validator = RequestValidator::new(building.floor_count());
        let mut admitted = Vec::with_capacity(requests.len());
        let mut rejected = Vec::new();
        let mut metrics = MetricsAggregator::new();
        for call in requests {
            match validator.admit(&call) {
                Ok(request) => admitted.push(request),
                Err(reason) => {
                    warn!("rejected request: {reason}");
                    metrics.record_rejection();
                    rejected.push((call, reason));
                }
            }
        }
        debug!("admitted {} requests, rejected {}", validator.admitted_count(), rejected.len());
        let arrivals = ArrivalQueue::from_requests(admitted);

        Ok(Sim {
            clock:             SimClock::new(),
            config:            self.config,
            building,
            arrivals,
            ledger:            RequestLedger::new(),
            metrics,
            dispatcher:        self.dispatcher,
            snapshot_interval: self.snapshot_interval,
            unreported:        rejected,
        })
    }
}
