//! Configuration-time errors
//!
//! A malformed fixed value is fatal to resolver construction and must abort
//! the enclosing configuration load. This is deliberately distinct from a
//! malformed header value at resolution time, which is benign and only ever
//! surfaces as "no fault this time".

use thiserror::Error;

/// Errors raised while constructing a resolver from its configuration
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FaultConfigError {
    /// Fixed delay below zero
    #[error("invalid fixed delay: {0} ms is negative")]
    NegativeDelay(i64),

    /// Fixed delay of zero milliseconds
    #[error("invalid fixed delay: duration must be positive")]
    ZeroDelay,

    /// Fixed delay above the supported maximum
    #[error("invalid fixed delay: {ms} ms exceeds the maximum of {max} ms")]
    DelayTooLarge { ms: u64, max: u64 },

    /// Fixed rate below zero
    #[error("invalid fixed rate: {0} kbps is negative")]
    NegativeRate(i64),

    /// Fixed rate of zero kilobits per second
    #[error("invalid fixed rate: rate must be positive")]
    ZeroRate,

    /// Fixed rate above the supported maximum
    #[error("invalid fixed rate: {kbps} kbps exceeds the maximum of {max} kbps")]
    RateTooLarge { kbps: u64, max: u64 },
}
