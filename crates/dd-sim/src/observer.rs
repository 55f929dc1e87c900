//! Simulation observer trait for progress reporting and data collection.

use dd_building::ElevatorSnapshot;
use dd_core::Tick;
use dd_dispatch::Assignment;
use dd_requests::{CallRequest, Request, RequestRejection};

use crate::{MetricsSummary, RequestMetrics};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: completion printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_request_completed(&mut self, m: &RequestMetrics) {
///         println!("{} done: wait {} travel {}", m.request, m.wait, m.travel);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before admission.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per request refused at admission, before the first tick
    /// is processed.
    fn on_request_rejected(&mut self, _call: &CallRequest, _reason: &RequestRejection) {}

    /// Called after a request has been dispatched and committed to a plan.
    fn on_request_dispatched(&mut self, _tick: Tick, _request: &Request, _assignment: &Assignment) {}

    /// Called when a passenger alights.
    fn on_request_completed(&mut self, _metrics: &RequestMetrics) {}

    /// Called at snapshot intervals (every tick by default) with one
    /// snapshot per elevator, in id order.
    fn on_snapshot(&mut self, _tick: Tick, _elevators: &[ElevatorSnapshot]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.  `final_tick` is the
    /// total simulated time.
    fn on_sim_end(&mut self, _final_tick: Tick, _summary: &MetricsSummary) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
