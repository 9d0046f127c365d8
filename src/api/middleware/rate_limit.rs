//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Creates a rate limiter keyed by the socket peer address.
///
/// # Limits
///
/// - **Rate**: `per_second` tokens refilled per second, one every `1s / per_second`
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Panics
///
/// Panics if `per_second` or `burst` is zero; [`crate::config::Config::validate`]
/// rejects such values at startup.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/estimate", post(estimate_handler))
///     .layer(rate_limit::layer(10, 50));
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(refill_period(per_second))
            .burst_size(burst)
            .finish()
            .expect("rate limit values must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for deployments behind a trusted reverse proxy.
///
/// Same limits as [`layer`], but the client IP is read from
/// `X-Forwarded-For`, `X-Real-IP` or `Forwarded` before falling back to the
/// peer address.
pub fn proxied_layer(
    per_second: u64,
    burst: u32,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(SmartIpKeyExtractor)
            .period(refill_period(per_second))
            .burst_size(burst)
            .finish()
            .expect("rate limit values must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Interval between two refilled tokens for a rate of `per_second` tokens.
fn refill_period(per_second: u64) -> Duration {
    Duration::from_nanos(1_000_000_000 / per_second.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refill_period() {
        assert_eq!(refill_period(1), Duration::from_secs(1));
        assert_eq!(refill_period(10), Duration::from_millis(100));
        assert_eq!(refill_period(1000), Duration::from_millis(1));
    }
}
