//! Fault-injection middleware
//!
//! Tower layer that injects artificial latency and response throughput
//! caps into a request pipeline. Per request it rolls each configured
//! fault's activation percentage, asks the matching resolver for the
//! magnitude (consulting the well-known fault headers), and applies the
//! result: an async sleep before forwarding, a paced body on the way back.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{extract::Request, response::Response};
use fault_core::{
    FaultConfigError,
    headers::{DELAY_REQUEST_HEADER, THROUGHPUT_RESPONSE_HEADER},
};
use tower::{Layer, Service};
use tracing::debug;

use crate::{
    config::FaultConfig, policy::FaultPolicy, reload::ReloadablePolicy, sampler, throttle,
};

/// Layer that applies fault injection
#[derive(Clone, Debug)]
pub struct FaultLayer {
    policy: ReloadablePolicy,
}

impl FaultLayer {
    /// Create a layer from an already-built policy
    #[must_use]
    pub fn new(policy: FaultPolicy) -> Self {
        Self {
            policy: ReloadablePolicy::new(policy),
        }
    }

    /// Create a layer straight from config
    ///
    /// # Errors
    ///
    /// Propagates [`FaultConfigError`] from resolver construction; intended
    /// to abort the embedding service's startup.
    pub fn from_config(config: &FaultConfig) -> Result<Self, FaultConfigError> {
        Ok(Self::new(FaultPolicy::from_config(config)?))
    }

    /// Create a layer sharing an externally managed reloadable policy
    #[must_use]
    pub fn with_reloadable(policy: ReloadablePolicy) -> Self {
        Self { policy }
    }

    /// Handle to the underlying policy, for reload tasks
    #[must_use]
    pub fn policy(&self) -> ReloadablePolicy {
        self.policy.clone()
    }
}

impl<S> Layer<S> for FaultLayer {
    type Service = FaultService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FaultService {
            inner,
            policy: self.policy.clone(),
        }
    }
}

/// Middleware service applying the active fault policy
#[derive(Clone, Debug)]
pub struct FaultService<S> {
    inner: S,
    policy: ReloadablePolicy,
}

impl<S> Service<Request> for FaultService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // Snapshot the policy once; a concurrent reload must not change
        // behavior mid-request.
        let policy: Arc<FaultPolicy> = self.policy.load();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if !policy.enabled() {
                return inner.call(req).await;
            }

            let delay = policy
                .delay()
                .filter(|resolver| sampler::roll(resolver.percentage()))
                .and_then(|resolver| {
                    resolver.resolve_duration(req.headers().get(&DELAY_REQUEST_HEADER))
                });
            if let Some(duration) = delay.filter(|d| !d.is_zero()) {
                debug!(delay = ?duration, "injecting request delay");
                tokio::time::sleep(duration).await;
            }

            // Decide the throughput cap up front, from the request headers.
            let cap = policy
                .rate_limit()
                .filter(|resolver| sampler::roll(resolver.percentage()))
                .and_then(|resolver| {
                    resolver.resolve_rate_kbps(req.headers().get(&THROUGHPUT_RESPONSE_HEADER))
                })
                .filter(|kbps| *kbps > 0);

            let response = inner.call(req).await?;
            match cap {
                Some(kbps) => Ok(throttle::apply(response, kbps).await),
                None => Ok(response),
            }
        })
    }
}
