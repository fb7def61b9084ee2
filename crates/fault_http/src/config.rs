//! Fault middleware configuration

use fault_core::{DelaySpec, RateLimitSpec};
use serde::{Deserialize, Serialize};

/// Top-level fault-injection configuration
///
/// Deserialized by the embedding service's config layer; turned into a
/// [`crate::FaultPolicy`] at load time, which is where malformed fixed
/// values are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultConfig {
    /// Master switch; a disabled config injects nothing
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Delay fault, if configured
    #[serde(default)]
    pub delay: Option<DelaySpec>,

    /// Response throughput fault, if configured
    #[serde(default)]
    pub rate_limit: Option<RateLimitSpec>,
}

const fn default_true() -> bool {
    true
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay: None,
            rate_limit: None,
        }
    }
}
