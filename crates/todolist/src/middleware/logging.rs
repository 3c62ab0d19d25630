//! Request logging span for `tower_http::trace::TraceLayer`.

use axum::{body::Body, http::Request};
use tracing::Span;

/// Opens one span per request carrying its method and path.
///
/// Status and latency are recorded by the layer's `on_response` hook.
pub fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}
