//! Response body pacing
//!
//! Re-emits a buffered response body as a stream capped at a target
//! throughput. Pacing is coarse: the body is released in fixed ticks, with
//! the chunk size derived from the cap (1 kbit = 1024 bits).

use std::{convert::Infallible, time::Duration};

use axum::{
    body::{Body, to_bytes},
    response::Response,
};
use bytes::Bytes;
use futures::stream;
use tracing::{debug, warn};

/// Interval between released chunks
const TICK: Duration = Duration::from_millis(50);
const TICKS_PER_SECOND: u64 = 20;

/// Chunk size, in bytes, released per tick for a given cap
fn bytes_per_tick(rate_kbps: u64) -> usize {
    let bytes_per_second = rate_kbps.saturating_mul(1024) / 8;
    let per_tick = (bytes_per_second / TICKS_PER_SECOND).max(1);
    usize::try_from(per_tick).unwrap_or(usize::MAX)
}

/// Wrap `data` in a body that trickles out at roughly `rate_kbps`
fn paced_body(data: Bytes, rate_kbps: u64) -> Body {
    let chunk = bytes_per_tick(rate_kbps);
    let stream = stream::unfold((data, true), move |(mut remaining, first)| async move {
        if remaining.is_empty() {
            return None;
        }
        if !first {
            tokio::time::sleep(TICK).await;
        }
        let piece = remaining.split_to(remaining.len().min(chunk));
        Some((Ok::<Bytes, Infallible>(piece), (remaining, false)))
    });
    Body::from_stream(stream)
}

/// Apply a throughput cap to a response
///
/// Buffers the inner body, then replays it paced. If the inner body stream
/// fails while buffering, the response is returned with an empty body; the
/// upstream failure has already made the payload unrecoverable.
pub(crate) async fn apply(response: Response, rate_kbps: u64) -> Response {
    let (parts, body) = response.into_parts();
    match to_bytes(body, usize::MAX).await {
        Ok(data) => {
            debug!(rate_kbps, bytes = data.len(), "throttling response body");
            Response::from_parts(parts, paced_body(data, rate_kbps))
        },
        Err(error) => {
            warn!(%error, "failed to buffer response body for throttling");
            Response::from_parts(parts, Body::empty())
        },
    }
}
