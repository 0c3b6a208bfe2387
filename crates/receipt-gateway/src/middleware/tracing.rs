//! Request tracing middleware.
//!
//! Every request runs inside an `http_request` span. Receipt ids are folded
//! out of the recorded route so spans group by endpoint, and a `traceparent`
//! header (W3C Trace Context) links the span to the caller's trace.

use axum::{body::Body, http::Request, response::Response};
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};
use tracing::{debug, field, info_span, Instrument, Span};

/// Tracing layer that creates spans for each request
#[derive(Clone, Default)]
pub struct TracingLayer;

impl TracingLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for TracingLayer {
    type Service = TracingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TracingService { inner }
    }
}

/// Tracing service
#[derive(Clone)]
pub struct TracingService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for TracingService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        let span = info_span!(
            "http_request",
            http.method = %req.method(),
            http.route = route_label(req.uri().path()),
            http.status_code = field::Empty,
            trace_id = field::Empty,
            parent_span_id = field::Empty,
            latency_ms = field::Empty,
            otel.kind = "server",
        );

        if let Some(ctx) = TraceParent::from_request(&req) {
            span.record("trace_id", ctx.trace_id.as_str());
            span.record("parent_span_id", ctx.parent_id.as_str());
        }

        Box::pin(
            async move {
                let started = Instant::now();
                let result = inner.call(req).await;

                let span = Span::current();
                span.record("latency_ms", started.elapsed().as_millis() as u64);
                if let Ok(response) = &result {
                    span.record("http.status_code", response.status().as_u16());
                    debug!(status = response.status().as_u16(), "Request completed");
                }

                result
            }
            .instrument(span),
        )
    }
}

/// Collapse per-receipt paths onto their route template.
fn route_label(path: &str) -> &'static str {
    match path.trim_end_matches('/').split('/').collect::<Vec<_>>().as_slice() {
        ["", "receipts", "process"] => "/receipts/process",
        ["", "receipts", _, "points"] => "/receipts/:id/points",
        ["", "health"] => "/health",
        ["", "metrics"] => "/metrics",
        _ => "unmatched",
    }
}

/// Caller trace context from a `traceparent` header.
#[derive(Debug, PartialEq, Eq)]
struct TraceParent {
    trace_id: String,
    parent_id: String,
}

impl TraceParent {
    fn from_request<B>(req: &Request<B>) -> Option<Self> {
        Self::parse(req.headers().get("traceparent")?.to_str().ok()?)
    }

    // version-trace_id-parent_id-trace_flags
    fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('-');
        let (_version, trace_id, parent_id, _flags) =
            (parts.next()?, parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let is_hex = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit());
        if !is_hex(trace_id, 32) || !is_hex(parent_id, 16) {
            return None;
        }

        Some(Self {
            trace_id: trace_id.to_string(),
            parent_id: parent_id.to_string(),
        })
    }
}
