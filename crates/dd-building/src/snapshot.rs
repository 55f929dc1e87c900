//! Per-tick observational record of one elevator.

use dd_core::{ElevatorId, Floor, Tick};

use crate::ElevatorStatus;

/// Elevator state at the end of a tick.  Never read by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorSnapshot {
    pub tick:       Tick,
    pub elevator:   ElevatorId,
    pub floor:      Floor,
    pub status:     ElevatorStatus,
    pub onboard:    usize,
    /// Remaining stop floors in service order.
    pub next_stops: Vec<Floor>,
}
