//! Rate-limit fault resolution
//!
//! Mirror of [`crate::delay`] for the throughput fault: resolves the cap,
//! in kilobits per second, that the embedding filter should apply to the
//! response stream.

use http::HeaderValue;

use crate::{
    config::{RateLimitSource, RateLimitSpec},
    errors::FaultConfigError,
    percentage::ActivationPercentage,
    provider::header_scalar,
};

/// Resolves the effective throughput cap of an injected rate limit
#[derive(Debug, Clone)]
pub struct RateLimitResolver {
    provider: RateLimitProvider,
    percentage: ActivationPercentage,
}

#[derive(Debug, Clone)]
enum RateLimitProvider {
    Fixed(u64),
    HeaderDerived,
}

impl RateLimitResolver {
    /// Upper bound for configured and header-supplied caps (~10 Gbit/s)
    pub const MAX_RATE_KBPS: u64 = 10_000_000;

    /// Build a resolver from a rate-limit spec
    ///
    /// # Errors
    ///
    /// Returns [`FaultConfigError`] when the spec carries a fixed cap that
    /// is negative, zero, or above [`Self::MAX_RATE_KBPS`].
    pub fn new(spec: &RateLimitSpec) -> Result<Self, FaultConfigError> {
        let provider = match spec.source {
            RateLimitSource::FixedKbps(kbps) => RateLimitProvider::Fixed(validate_fixed(kbps)?),
            RateLimitSource::Header => RateLimitProvider::HeaderDerived,
        };
        Ok(Self {
            provider,
            percentage: spec.percentage,
        })
    }

    /// Resolve the cap to apply for one request, in kilobits per second
    ///
    /// Fixed resolvers ignore `header`. Header-derived resolvers parse it
    /// as kbps; absent or malformed input resolves to `None`.
    #[must_use]
    pub fn resolve_rate_kbps(&self, header: Option<&HeaderValue>) -> Option<u64> {
        match &self.provider {
            RateLimitProvider::Fixed(kbps) => Some(*kbps),
            RateLimitProvider::HeaderDerived => header_scalar(header, Self::MAX_RATE_KBPS),
        }
    }

    /// The activation percentage supplied at construction, unchanged
    #[must_use]
    pub const fn percentage(&self) -> ActivationPercentage {
        self.percentage
    }
}

fn validate_fixed(kbps: i64) -> Result<u64, FaultConfigError> {
    let kbps = u64::try_from(kbps).map_err(|_| FaultConfigError::NegativeRate(kbps))?;
    if kbps == 0 {
        return Err(FaultConfigError::ZeroRate);
    }
    if kbps > RateLimitResolver::MAX_RATE_KBPS {
        return Err(FaultConfigError::RateTooLarge {
            kbps,
            max: RateLimitResolver::MAX_RATE_KBPS,
        });
    }
    Ok(kbps)
}
