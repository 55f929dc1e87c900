//! `dd-requests`: the passenger request stream.
//!
//! # Crate layout
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`request`]       | `CallRequest` (raw input), `Request` (admitted)        |
//! | [`validate`]      | `RequestValidator`                                     |
//! | [`arrival_queue`] | `ArrivalQueue` (`BTreeMap<Tick, Vec<Request>>`)        |
//! | [`loader`]        | `load_requests_csv`, `load_requests_reader`, `write_requests` |
//! | [`generator`]     | `WorkloadSpec`: seeded synthetic request streams      |
//! | [`error`]         | `RequestError`, `RequestRejection`                     |
//!
//! # Flow
//!
//! ```text
//! CSV / generator ──► Vec<CallRequest> ──► RequestValidator ──► ArrivalQueue
//!                                              │
//!                                              └──► rejected (reported, excluded)
//! ```
//!
//! The simulation only ever sees the `ArrivalQueue`; it never depends on
//! where requests came from.

pub mod arrival_queue;
pub mod error;
pub mod generator;
pub mod loader;
pub mod request;
pub mod validate;

#[cfg(test)]
mod tests;

pub use arrival_queue::ArrivalQueue;
pub use error::{RequestError, RequestRejection, RequestResult};
pub use generator::WorkloadSpec;
pub use loader::{load_requests_csv, load_requests_reader, write_requests};
pub use request::{CallRequest, Request};
pub use validate::RequestValidator;
