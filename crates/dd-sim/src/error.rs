use dd_building::PlanError;
use dd_core::{DdError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] DdError),

    #[error("failed to commit dispatch decision: {0}")]
    Plan(#[from] PlanError),

    #[error("tick limit {limit} reached at {tick} with {open} requests still open")]
    TickLimit {
        limit: u64,
        tick:  Tick,
        open:  usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
