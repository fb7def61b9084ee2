//! Well-known fault header names
//!
//! Process-wide, read-only constants naming the request headers that carry
//! per-request fault magnitudes. Header-derived resolvers are handed the
//! lookup result for one of these names; they never read a request
//! themselves.

use http::header::HeaderName;

/// Request header carrying a per-request delay, in milliseconds
pub static DELAY_REQUEST_HEADER: HeaderName = HeaderName::from_static("x-fault-delay-request");

/// Request header carrying a per-request response throughput cap, in
/// kilobits per second
pub static THROUGHPUT_RESPONSE_HEADER: HeaderName =
    HeaderName::from_static("x-fault-throughput-response");
