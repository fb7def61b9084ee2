//! Resolved fault policy
//!
//! A [`FaultPolicy`] is the construction-validated form of a
//! [`crate::FaultConfig`]: resolvers built, malformed fixed values already
//! rejected. Immutable once built; configuration changes produce a new
//! policy which is atomically published via [`crate::ReloadablePolicy`].

use fault_core::{DelayResolver, FaultConfigError, RateLimitResolver};

use crate::config::FaultConfig;

/// Immutable set of active fault resolvers
#[derive(Debug, Clone, Default)]
pub struct FaultPolicy {
    enabled: bool,
    delay: Option<DelayResolver>,
    rate_limit: Option<RateLimitResolver>,
}

impl FaultPolicy {
    /// Build a policy from config
    ///
    /// # Errors
    ///
    /// Propagates [`FaultConfigError`] from resolver construction. The
    /// caller should treat this as fatal to the configuration load rather
    /// than fall back to a default.
    pub fn from_config(config: &FaultConfig) -> Result<Self, FaultConfigError> {
        let delay = config.delay.as_ref().map(DelayResolver::new).transpose()?;
        let rate_limit = config
            .rate_limit
            .as_ref()
            .map(RateLimitResolver::new)
            .transpose()?;
        Ok(Self {
            enabled: config.enabled,
            delay,
            rate_limit,
        })
    }

    /// Policy that injects nothing (also the `Default`)
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            delay: None,
            rate_limit: None,
        }
    }

    /// Whether fault injection is active at all
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// The delay resolver, if a delay fault is configured
    #[must_use]
    pub const fn delay(&self) -> Option<&DelayResolver> {
        self.delay.as_ref()
    }

    /// The rate-limit resolver, if a throughput fault is configured
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&RateLimitResolver> {
        self.rate_limit.as_ref()
    }
}
