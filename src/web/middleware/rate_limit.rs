//! Per-client rate limiting using the token bucket algorithm.
//!
//! Requests exceeding a limit receive `429 Too Many Requests`. Clients are
//! keyed by the socket peer address, or by `X-Forwarded-For` / `X-Real-IP`
//! when the service runs behind a trusted reverse proxy.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

type Layer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Token bucket parameters: one token is added every `period_ms`, up to `burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub period_ms: u64,
    pub burst: u32,
}

impl Quota {
    /// Sustained rate once the burst is spent.
    pub fn requests_per_second(&self) -> f64 {
        1_000.0 / self.period_ms as f64
    }
}

/// Page views: 2 requests per second, bursts of 100.
pub const PAGE_QUOTA: Quota = Quota {
    period_ms: 500,
    burst: 100,
};

/// Calculations: 1 request per second, bursts of 10.
pub const CALCULATE_QUOTA: Quota = Quota {
    period_ms: 1_000,
    burst: 10,
};

fn build<K: KeyExtractor>(key_extractor: K, quota: Quota) -> Layer<K> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_millisecond(quota.period_ms)
            .burst_size(quota.burst)
            .finish()
            .expect("rate limit quota must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter keyed by the socket peer address.
///
/// Requires the router to be served with connect info
/// (`into_make_service_with_connect_info::<SocketAddr>()`).
pub fn layer(quota: Quota) -> Layer<PeerIpKeyExtractor> {
    build(PeerIpKeyExtractor, quota)
}

/// Rate limiter keyed by forwarding headers, falling back to the peer address.
pub fn proxied_layer(quota: Quota) -> Layer<SmartIpKeyExtractor> {
    build(SmartIpKeyExtractor, quota)
}
