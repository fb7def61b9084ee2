//! Fault-injection middleware for tower/axum pipelines
//!
//! Wraps a service with artificial request delays and response throughput
//! caps, driven by the resolvers in [`fault_core`]. This crate owns the
//! parts the resolution core deliberately leaves out: the per-request
//! activation dice roll, applying the resolved magnitudes to live traffic,
//! and atomic policy reload.

pub mod config;
pub mod layer;
pub mod policy;
pub mod reload;
pub mod sampler;
mod throttle;

pub use config::FaultConfig;
pub use layer::{FaultLayer, FaultService};
pub use policy::FaultPolicy;
pub use reload::ReloadablePolicy;
