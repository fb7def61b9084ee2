//! Typed fault configuration records
//!
//! Already-parsed inputs for resolver construction. This crate performs no
//! wire-format decoding of its own; these records come from whatever config
//! layer the embedding service uses, and serde keeps them format-agnostic.
//!
//! Scalar fields are signed so that a malformed (negative) configured value
//! is representable and rejected at construction instead of being silently
//! unrepresentable.

use serde::{Deserialize, Serialize};

use crate::percentage::ActivationPercentage;

/// Where a delay fault draws its duration from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelaySource {
    /// Fixed duration in milliseconds, validated at resolver construction
    FixedMs(i64),
    /// Per-request value carried in the delay request header
    Header,
}

/// Delay fault configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelaySpec {
    /// Value source for the injected duration
    pub source: DelaySource,
    /// Fraction of requests the fault applies to
    #[serde(default)]
    pub percentage: ActivationPercentage,
}

impl DelaySpec {
    /// Spec for a fixed delay of `ms` milliseconds
    #[must_use]
    pub const fn fixed_ms(ms: i64, percentage: ActivationPercentage) -> Self {
        Self {
            source: DelaySource::FixedMs(ms),
            percentage,
        }
    }

    /// Spec for a header-derived delay
    #[must_use]
    pub const fn from_header(percentage: ActivationPercentage) -> Self {
        Self {
            source: DelaySource::Header,
            percentage,
        }
    }
}

/// Where a rate-limit fault draws its throughput cap from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitSource {
    /// Fixed cap in kilobits per second, validated at resolver construction
    FixedKbps(i64),
    /// Per-request value carried in the throughput request header
    Header,
}

/// Rate-limit fault configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSpec {
    /// Value source for the throughput cap
    pub source: RateLimitSource,
    /// Fraction of requests the fault applies to
    #[serde(default)]
    pub percentage: ActivationPercentage,
}

impl RateLimitSpec {
    /// Spec for a fixed cap of `kbps` kilobits per second
    #[must_use]
    pub const fn fixed_kbps(kbps: i64, percentage: ActivationPercentage) -> Self {
        Self {
            source: RateLimitSource::FixedKbps(kbps),
            percentage,
        }
    }

    /// Spec for a header-derived cap
    #[must_use]
    pub const fn from_header(percentage: ActivationPercentage) -> Self {
        Self {
            source: RateLimitSource::Header,
            percentage,
        }
    }
}
