// src/error.rs

use thiserror::Error;

/// Errors raised by the simulation core on invalid inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Customer-count bounds are inverted.
    #[error("invalid customer range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },
    /// Day count is not a positive integer. Carries the rejected input.
    #[error("days must be a positive integer, got {0:?}")]
    InvalidDays(String),
}
