//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Calculator page
//! - `GET  /health`    - Health check
//! - `/api/*`          - JSON API (rate limited per client IP)
//! - `/static/*`       - Static assets (script, stylesheet)
//!
//! Any other path answers `404` with the JSON error envelope.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::http::Uri;
use axum::routing::get;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the static directory and the rate limit settings;
///   with `behind_proxy` set, rate limiting reads the client IP from
///   `X-Forwarded-For` / `X-Real-IP` instead of the peer socket address
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api_router = api::routes::routes();
    let api_router = if config.behind_proxy {
        api_router.layer(rate_limit::proxied_layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    } else {
        api_router.layer(rate_limit::layer(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))
    };

    let router = Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Answers unknown routes with a JSON `404`.
async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
