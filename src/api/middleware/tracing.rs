//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse,
    TraceLayer,
};
use tracing::{Level, Span};

/// Concrete type of the tracing layer returned by [`layer`].
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&Request<Body>) -> Span,
    DefaultOnRequest,
    DefaultOnResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    DefaultOnFailure,
>;

/// Creates a tracing middleware for HTTP requests.
///
/// **On Request:** opens an `INFO` span with method, path and HTTP version,
/// and logs at `DEBUG`. The query string is left out of the span.
///
/// **On Response:** logs status and latency in milliseconds at `INFO`.
///
/// **On Failure:** 5xx responses are logged at `ERROR`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api/estimate version=HTTP/1.1}: finished processing request latency=1 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::ERROR))
}

fn make_span(request: &Request<Body>) -> Span {
    ::tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}
