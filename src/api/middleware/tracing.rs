//! HTTP request/response tracing middleware.

use std::time::Duration;

use axum::Router;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};

/// Wraps a router with request/response tracing.
///
/// # Spans
///
/// Each request gets an `INFO` span carrying the HTTP method and the
/// matched route template (`/api/recipes/{id}`, not the raw URI), so log
/// lines aggregate per route. Health probes get a `TRACE` span instead,
/// keeping orchestrator polling out of the logs.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/api/recipes}: request completed status=201 latency_ms=12
/// ```
///
/// # Integration
///
/// Must be applied via [`Router::layer`] so the route template is already
/// resolved when the span is created.
pub fn layer<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str)
                    .unwrap_or(request.uri().path());

                if path == "/health" {
                    tracing::trace_span!("request")
                } else {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %path,
                    )
                }
            })
            .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                if span.metadata().map(|m| m.level()) == Some(&Level::TRACE) {
                    return;
                }
                let status = response.status().as_u16();
                if status >= 500 {
                    tracing::error!(
                        status,
                        latency_ms = %latency.as_millis(),
                        "request failed with server error"
                    );
                } else {
                    tracing::info!(
                        status,
                        latency_ms = %latency.as_millis(),
                        "request completed"
                    );
                }
            }),
    )
}
