//! Rate limiting middleware using token bucket algorithm.

use axum::{Router, body::Body};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Token bucket parameters for one group of routes.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    /// Milliseconds between token refills.
    pub replenish_ms: u64,
    pub burst: u32,
}

impl Quota {
    /// Public pages and redirects: 20 requests per second, burst of 100.
    pub const PUBLIC: Quota = Quota {
        replenish_ms: 50,
        burst: 100,
    };

    /// Dashboard pages and actions: 5 requests per second, burst of 30.
    pub const DASHBOARD: Quota = Quota {
        replenish_ms: 200,
        burst: 30,
    };

    /// Login page and attempts: one every 2 seconds, burst of 10.
    pub const LOGIN: Quota = Quota {
        replenish_ms: 2000,
        burst: 10,
    };
}

/// Applies a per-client-IP rate limit to `router`.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: the socket peer address
/// - `behind_proxy = true`: `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
///   falling back to the peer address; enable only behind a trusted proxy
///
/// Either way the server must be started with connect info.
pub fn limit(router: Router<AppState>, quota: Quota, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        apply(router, quota, SmartIpKeyExtractor)
    } else {
        apply(router, quota, PeerIpKeyExtractor)
    }
}

fn apply<K>(router: Router<AppState>, quota: Quota, extractor: K) -> Router<AppState>
where
    K: KeyExtractor + Clone + Send + Sync + 'static,
    K::Key: Send + Sync + 'static,
{
    let config = GovernorConfigBuilder::default()
        .per_millisecond(quota.replenish_ms)
        .burst_size(quota.burst)
        .key_extractor(extractor)
        .finish();

    match config {
        Some(config) => {
            let layer: GovernorLayer<K, NoOpMiddleware<QuantaInstant>, Body> =
                GovernorLayer::new(Arc::new(config));
            router.layer(layer)
        }
        None => {
            tracing::error!(?quota, "Invalid rate limit quota, limiter disabled");
            router
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotas_are_valid() {
        for quota in [Quota::PUBLIC, Quota::DASHBOARD, Quota::LOGIN] {
            assert!(
                GovernorConfigBuilder::default()
                    .per_millisecond(quota.replenish_ms)
                    .burst_size(quota.burst)
                    .finish()
                    .is_some()
            );
        }
    }

    #[test]
    fn test_login_is_strictest() {
        assert!(Quota::LOGIN.burst < Quota::DASHBOARD.burst);
        assert!(Quota::DASHBOARD.burst < Quota::PUBLIC.burst);
    }
}
