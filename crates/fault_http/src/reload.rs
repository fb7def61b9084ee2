//! Hot-swappable fault policy
//!
//! Atomic replacement of the active [`FaultPolicy`] without restarting the
//! pipeline. In-flight requests keep the snapshot they loaded; a failed
//! rebuild leaves the previous policy active.

use std::sync::Arc;

use arc_swap::ArcSwap;
use fault_core::FaultConfigError;
use tokio::sync::watch;
use tracing::{error, info};

use crate::{config::FaultConfig, policy::FaultPolicy};

/// A wrapper around [`FaultPolicy`] that supports atomic reload
#[derive(Debug, Clone)]
pub struct ReloadablePolicy {
    inner: Arc<ArcSwap<FaultPolicy>>,
    /// Notifier for policy change events
    notify: watch::Sender<u64>,
    /// Receiver for policy change events
    receiver: watch::Receiver<u64>,
}

impl ReloadablePolicy {
    /// Create a new reloadable policy
    #[must_use]
    pub fn new(policy: FaultPolicy) -> Self {
        let (notify, receiver) = watch::channel(0);
        Self {
            inner: Arc::new(ArcSwap::new(Arc::new(policy))),
            notify,
            receiver,
        }
    }

    /// Get the current policy snapshot
    #[must_use]
    pub fn load(&self) -> Arc<FaultPolicy> {
        self.inner.load_full()
    }

    /// Atomically replace the active policy
    pub fn store(&self, policy: FaultPolicy) {
        let old = self.inner.swap(Arc::new(policy));
        info!(was_enabled = old.enabled(), "fault policy replaced");
        let version = *self.notify.borrow() + 1;
        self.notify.send(version).ok();
    }

    /// Rebuild the policy from config
    ///
    /// # Errors
    ///
    /// Returns the construction error unchanged; the previous policy stays
    /// active in that case.
    pub fn rebuild(&self, config: &FaultConfig) -> Result<(), FaultConfigError> {
        match FaultPolicy::from_config(config) {
            Ok(policy) => {
                self.store(policy);
                Ok(())
            },
            Err(err) => {
                error!(error = %err, "fault policy rebuild failed, keeping previous policy");
                Err(err)
            },
        }
    }

    /// Subscribe to policy replacement notifications
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }
}
