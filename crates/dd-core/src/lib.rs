//! `dd-core`: foundational types for the destination-dispatch simulator.
//!
//! This crate is a dependency of every other `dd-*` crate.  It has no `dd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `RequestId`                             |
//! | [`floor`]       | `Floor`, floor distance                               |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `BuildingConfig`                                      |
//! | [`rng`]         | `SimRng` (seeded workload generation)                 |
//! | [`error`]       | `DdError`, `DdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::BuildingConfig;
pub use error::{DdError, DdResult};
pub use floor::Floor;
pub use ids::{ElevatorId, RequestId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
