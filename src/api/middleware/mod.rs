//! Layers wrapped around the listing API.
//!
//! - [`rate_limit`] - per-client token bucket
//! - [`tracing`] - request spans and latency logging

pub mod rate_limit;
pub mod tracing;
