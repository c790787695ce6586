//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates the tracing layer wrapped around the whole router.
///
/// Every request gets an `INFO` span carrying method, URI and version.
/// Request start is logged at `DEBUG` (page loads poll often), responses at
/// `INFO` with latency in milliseconds, and 5xx responses again at `ERROR`.
/// A store rejecting an edit surfaces as a 502 and is therefore logged as a
/// failure here as well as by the admin form.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=PATCH uri=/api/fields version=HTTP/1.1}: finished processing request latency=14 ms status=200
/// ERROR request{method=PATCH uri=/api/fields version=HTTP/1.1}: response failed classification=Status code: 502 Bad Gateway latency=3 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
