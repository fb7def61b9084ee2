//! Shared header parsing for header-derived providers

use http::HeaderValue;

/// Parse an optional header value as a bounded non-negative integer.
///
/// Absent input, non-UTF-8 bytes, non-numeric text, negative numbers,
/// values that overflow `u64`, and values above `max` all yield `None`. A
/// malformed header never surfaces as an error to the caller.
pub(crate) fn header_scalar(header: Option<&HeaderValue>, max: u64) -> Option<u64> {
    let text = header?.to_str().ok()?;
    let value = text.parse::<u64>().ok()?;
    (value <= max).then_some(value)
}
