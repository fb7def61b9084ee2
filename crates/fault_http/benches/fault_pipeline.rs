//! Benchmarks for the fault-injection pipeline
//!
//! Resolution and sampling are on the per-request hot path, so their cost
//! is measured in isolation; the middleware benchmark measures the full
//! layer overhead against a trivial handler.

#![allow(clippy::expect_used)]

use std::time::Duration;

use axum::{Router, body::Body, extract::Request, routing::get};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use fault_core::{
    ActivationPercentage, DelayResolver, DelaySpec, RateLimitResolver, RateLimitSpec,
};
use fault_http::{FaultConfig, FaultLayer, sampler};
use http::HeaderValue;
use tokio::runtime::Runtime;
use tower::ServiceExt;

/// Benchmark resolver calls directly (no HTTP layer)
fn bench_resolution(c: &mut Criterion) {
    let fixed = DelayResolver::new(&DelaySpec::fixed_ms(100, ActivationPercentage::always()))
        .expect("valid spec");
    let header_derived =
        DelayResolver::new(&DelaySpec::from_header(ActivationPercentage::always()))
            .expect("valid spec");
    let rate = RateLimitResolver::new(&RateLimitSpec::from_header(ActivationPercentage::always()))
        .expect("valid spec");

    let value = HeaderValue::from_static("12345");
    let garbage = HeaderValue::from_static("not-a-number");

    let mut group = c.benchmark_group("resolution");
    group.throughput(Throughput::Elements(1));

    group.bench_function("fixed_delay", |b| {
        b.iter(|| fixed.resolve_duration(Some(&value)));
    });
    group.bench_function("header_delay_parse", |b| {
        b.iter(|| header_derived.resolve_duration(Some(&value)));
    });
    group.bench_function("header_delay_garbage", |b| {
        b.iter(|| header_derived.resolve_duration(Some(&garbage)));
    });
    group.bench_function("header_rate_parse", |b| {
        b.iter(|| rate.resolve_rate_kbps(Some(&value)));
    });

    group.finish();
}

/// Benchmark the activation dice roll
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    group.throughput(Throughput::Elements(1));

    let partial = ActivationPercentage::new(50, fault_core::DenominatorScale::Hundred);
    group.bench_function("roll_partial", |b| {
        b.iter(|| sampler::roll(partial));
    });
    group.bench_function("roll_never", |b| {
        b.iter(|| sampler::roll(ActivationPercentage::never()));
    });

    group.finish();
}

async fn test_handler() -> &'static str {
    "ok"
}

/// Benchmark the middleware overhead on requests where no fault fires
fn bench_middleware(c: &mut Criterion) {
    let rt = Runtime::new().expect("Failed to create runtime");

    let mut group = c.benchmark_group("middleware");
    group.throughput(Throughput::Elements(1));
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("passthrough", |b| {
        b.to_async(&rt).iter(|| async {
            let app = Router::new()
                .route("/test", get(test_handler))
                .layer(FaultLayer::from_config(&FaultConfig::default()).expect("valid config"));
            app.oneshot(
                Request::builder()
                    .uri("/test")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("handler should succeed")
        });
    });

    group.bench_function("armed_but_never_firing", |b| {
        let config = FaultConfig {
            enabled: true,
            delay: Some(DelaySpec::fixed_ms(10_000, ActivationPercentage::never())),
            rate_limit: Some(RateLimitSpec::fixed_kbps(1, ActivationPercentage::never())),
        };
        b.to_async(&rt).iter(|| async {
            let app = Router::new()
                .route("/test", get(test_handler))
                .layer(FaultLayer::from_config(&config).expect("valid config"));
            app.oneshot(
                Request::builder()
                    .uri("/test")
                    .body(Body::empty())
                    .expect("valid request"),
            )
            .await
            .expect("handler should succeed")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolution, bench_sampling, bench_middleware);
criterion_main!(benches);
