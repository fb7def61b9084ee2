//! Delay fault resolution
//!
//! A [`DelayResolver`] answers, per request, "how long should the injected
//! delay be?". The answer comes either from a fixed duration baked in at
//! construction or from the request's delay header, and is `None` whenever
//! the fault should not apply.
//!
//! # Examples
//!
//! ```
//! use fault_core::{ActivationPercentage, DelayResolver, DelaySpec};
//! use std::time::Duration;
//!
//! let spec = DelaySpec::fixed_ms(250, ActivationPercentage::always());
//! let resolver = DelayResolver::new(&spec)?;
//! assert_eq!(resolver.resolve_duration(None), Some(Duration::from_millis(250)));
//! # Ok::<(), fault_core::FaultConfigError>(())
//! ```

use std::time::Duration;

use http::HeaderValue;

use crate::{
    config::{DelaySource, DelaySpec},
    errors::FaultConfigError,
    percentage::ActivationPercentage,
    provider::header_scalar,
};

/// Resolves the effective duration of an injected delay
///
/// Immutable after construction; safe to share across request-handling
/// tasks without locking. Configuration changes replace the resolver rather
/// than mutating it.
#[derive(Debug, Clone)]
pub struct DelayResolver {
    provider: DelayProvider,
    percentage: ActivationPercentage,
}

/// Value source, fixed for the resolver's lifetime
#[derive(Debug, Clone)]
enum DelayProvider {
    Fixed(Duration),
    HeaderDerived,
}

impl DelayResolver {
    /// Upper bound for configured and header-supplied delays (one hour)
    ///
    /// A fixed duration above this fails construction; a header value above
    /// it resolves to `None`.
    pub const MAX_DELAY_MS: u64 = 3_600_000;

    /// Build a resolver from a delay spec
    ///
    /// # Errors
    ///
    /// Returns [`FaultConfigError`] when the spec carries a fixed duration
    /// that is negative, zero, or above [`Self::MAX_DELAY_MS`]. Header-mode
    /// specs never fail construction.
    pub fn new(spec: &DelaySpec) -> Result<Self, FaultConfigError> {
        let provider = match spec.source {
            DelaySource::FixedMs(ms) => DelayProvider::Fixed(validate_fixed(ms)?),
            DelaySource::Header => DelayProvider::HeaderDerived,
        };
        Ok(Self {
            provider,
            percentage: spec.percentage,
        })
    }

    /// Resolve the delay to inject for one request
    ///
    /// `header` is the lookup result for
    /// [`crate::headers::DELAY_REQUEST_HEADER`] on the current request.
    /// Fixed resolvers
    /// ignore it entirely. Header-derived resolvers parse it as milliseconds
    /// and treat anything absent or malformed as "no fault this time".
    #[must_use]
    pub fn resolve_duration(&self, header: Option<&HeaderValue>) -> Option<Duration> {
        match &self.provider {
            DelayProvider::Fixed(delay) => Some(*delay),
            DelayProvider::HeaderDerived => {
                header_scalar(header, Self::MAX_DELAY_MS).map(Duration::from_millis)
            },
        }
    }

    /// The activation percentage supplied at construction, unchanged
    #[must_use]
    pub const fn percentage(&self) -> ActivationPercentage {
        self.percentage
    }
}

fn validate_fixed(ms: i64) -> Result<Duration, FaultConfigError> {
    let ms = u64::try_from(ms).map_err(|_| FaultConfigError::NegativeDelay(ms))?;
    if ms == 0 {
        return Err(FaultConfigError::ZeroDelay);
    }
    if ms > DelayResolver::MAX_DELAY_MS {
        return Err(FaultConfigError::DelayTooLarge {
            ms,
            max: DelayResolver::MAX_DELAY_MS,
        });
    }
    Ok(Duration::from_millis(ms))
}
