//! Building configuration.
//!
//! Loaded from a JSON file or command-line flags by the application crate
//! and fixed for the duration of a run.

use crate::{DdError, DdResult};

/// Physical layout of the simulated building.
///
/// `validate` must pass before a simulation is built; the simulation builder
/// calls it and fails fast on a bad config.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Number of floors.  Floors are numbered `1..=floor_count`.
    pub floor_count: u32,

    /// Number of elevators.  Elevators are identified `0..elevator_count`.
    pub elevator_count: u32,

    /// Maximum simultaneous passengers per elevator.
    pub capacity: u32,

    /// Optional safety stop: the run fails instead of continuing past this
    /// many ticks.  `None` runs until every admitted request completes.
    pub max_ticks: Option<u64>,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floor_count:    100,
            elevator_count: 10,
            capacity:       10,
            max_ticks:      None,
        }
    }
}

impl BuildingConfig {
    /// Reject non-positive floor counts, elevator counts, and capacities.
    pub fn validate(&self) -> DdResult<()> {
        if self.floor_count == 0 {
            return Err(DdError::Config("floor_count must be at least 1".into()));
        }
        if self.elevator_count == 0 {
            return Err(DdError::Config("elevator_count must be at least 1".into()));
        }
        if self.elevator_count > u16::MAX as u32 {
            return Err(DdError::Config(format!(
                "elevator_count {} exceeds the supported maximum {}",
                self.elevator_count,
                u16::MAX
            )));
        }
        if self.capacity == 0 {
            return Err(DdError::Config("capacity must be at least 1".into()));
        }
        Ok(())
    }
}
