//! W3C trace-context extraction from inbound requests
//!
//! Lets a handler parent its span on the caller's span when a `traceparent`
//! header is present, instead of starting a fresh trace.

use axum::http::HeaderMap;
use opentelemetry::{Context, global, propagation::Extractor};

/// Adapter exposing HTTP headers to the OpenTelemetry propagator
struct HeaderExtractor<'a>(&'a HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(axum::http::HeaderName::as_str).collect()
    }
}

/// Extract the remote trace context from request headers
///
/// Returns an empty context when no (or malformed) trace headers are
/// present; a span parented on it then becomes a root span.
pub fn parent_context(headers: &HeaderMap) -> Context {
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderExtractor(headers)))
}
