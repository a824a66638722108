//! Per-IP rate limits on the token bucket in `tower_governor`.
//!
//! Two tiers: a roomy one for public reads and a tight one for writes.
//! Behind a reverse proxy the peer address is the proxy itself, so
//! `behind_proxy` switches key extraction to the forwarding headers
//! (`X-Forwarded-For`, `X-Real-Ip`, `Forwarded`).

use std::sync::Arc;

use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Public tier: 2 requests/second refill with burst capacity 100 per
/// client IP. Excess requests get `429 Too Many Requests`.
pub fn layer<S>(router: Router<S>, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // The extractor is a type parameter of the config, hence two arms.
    if behind_proxy {
        let limiter = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(2)
                .burst_size(100)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .unwrap(),
        );

        router.layer(GovernorLayer::new(limiter))
    } else {
        let limiter = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(2)
                .burst_size(100)
                .finish()
                .unwrap(),
        );

        router.layer(GovernorLayer::new(limiter))
    }
}

/// Write tier for authenticated routes: 1 request/second refill with
/// burst capacity 10 per client IP. Covers recipe writes, favorites,
/// cart and subscription changes.
pub fn secure_layer<S>(router: Router<S>, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        let limiter = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(1)
                .burst_size(10)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .unwrap(),
        );

        router.layer(GovernorLayer::new(limiter))
    } else {
        let limiter = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(1)
                .burst_size(10)
                .finish()
                .unwrap(),
        );

        router.layer(GovernorLayer::new(limiter))
    }
}
