use dd_core::{ElevatorId, Floor};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("plan index {index} out of range for plan of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("destination index {dest_index} must come after source index {source_index}")]
    DestinationBeforeSource { source_index: usize, dest_index: usize },

    #[error("stop at floor {0} has no boarding or alighting requests")]
    EmptyStop(Floor),

    #[error("elevator {0} does not exist")]
    UnknownElevator(ElevatorId),
}

pub type PlanResult<T> = Result<T, PlanError>;
