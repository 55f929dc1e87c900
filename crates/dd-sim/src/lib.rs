//! `dd-sim`: tick loop orchestrator for the destination-dispatch simulator.
//!
//! # Tick loop
//!
//! ```text
//! until no arrivals remain, every admitted request is completed, and every
//! elevator is idle:
//!   ① Admission: drain requests arriving this tick from the ArrivalQueue,
//!                 in ascending id order; dispatch and commit each one.
//!   ② Advance  : step every elevator in id order: move one floor, or
//!                 service the front stop (alight, then board).
//!   ③ Snapshot : report every elevator's state to the observer.
//!   ④ Clock    : advance one tick.
//! ```
//!
//! Requests that fail admission checks are reported through
//! [`SimObserver::on_request_rejected`] and never enter the queue.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the request ledger.   |
//! | `serde`   | Serde derives on metrics records and the summary.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dd_core::BuildingConfig;
//! use dd_requests::load_requests_csv;
//! use dd_sim::{NoopObserver, SimBuilder};
//!
//! let requests = load_requests_csv(path)?;
//! let mut sim = SimBuilder::new(BuildingConfig::default())
//!     .requests(requests)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("served {} requests in {} ticks", summary.served, sim.clock.current_tick.0);
//! ```

pub mod builder;
pub mod error;
pub mod ledger;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use ledger::{LedgerEntry, RequestLedger, RequestState};
pub use metrics::{MetricsAggregator, MetricsSummary, RequestMetrics, Stats};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
