//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Token replenish period in seconds.
const REPLENISH_SECONDS: u64 = 2;

/// Requests a single client may burst before being throttled.
const BURST_SIZE: u32 = 100;

/// Creates a rate limiter for the public listing endpoints.
///
/// # Limits
///
/// - **Rate**: one token every 2 seconds
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/travel", get(travel_list_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(REPLENISH_SECONDS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Same limits as [`layer`], keyed by the client IP reported by a reverse
/// proxy (`X-Forwarded-For`, `X-Real-IP`, `Forwarded`), falling back to the
/// peer address.
///
/// Enable only behind a trusted proxy: clients can forge these headers.
pub fn proxy_layer()
-> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .per_second(REPLENISH_SECONDS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
