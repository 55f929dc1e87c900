//! Simulator-wide base error type.
//!
//! Sub-crates define their own error enums and either convert into `DdError`
//! or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `dd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dd-*` crates.
pub type DdResult<T> = Result<T, DdError>;
