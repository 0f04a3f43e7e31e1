//! Request metrics recorded through the `metrics` facade and rendered by the
//! Prometheus exporter on `/metrics`.
//!
//! | Metric | Type | Labels |
//! |--------|------|--------|
//! | `http_requests_total` | Counter | `method`, `path`, `status` |
//! | `http_request_duration_seconds` | Histogram | `method`, `path`, `status` |
//!
//! Profile UIDs are collapsed into their route template and any other
//! unrecognized path is reported as `/*` to keep label cardinality bounded.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};

const KNOWN_PATHS: &[&str] = &["/", "/health", "/metrics"];

/// Dynamic route prefixes and the template reported in their place.
const TEMPLATED_PATHS: &[(&str, &str)] = &[
    ("/profile/", "/profile/{uid}"),
    ("/api/profiles/", "/api/profiles/{uid}"),
];

#[derive(Clone, Copy, Default)]
pub struct MetricsLayer;

impl<S> Layer<S> for MetricsLayer {
    type Service = MetricsMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MetricsMiddleware { inner }
    }
}

#[derive(Clone)]
pub struct MetricsMiddleware<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for MetricsMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let method = req.method().to_string();
        let path = normalize_path(req.uri().path());
        let start = Instant::now();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let response = inner.call(req).await?;
            let duration = start.elapsed().as_secs_f64();

            let labels = [
                ("method", method),
                ("path", path.to_string()),
                ("status", response.status().as_u16().to_string()),
            ];

            metrics::counter!("http_requests_total", &labels).increment(1);
            metrics::histogram!("http_request_duration_seconds", &labels).record(duration);

            Ok(response)
        })
    }
}

fn normalize_path(path: &str) -> &'static str {
    if let Some(known) = KNOWN_PATHS.iter().copied().find(|known| *known == path) {
        return known;
    }

    TEMPLATED_PATHS
        .iter()
        .copied()
        .find(|&(prefix, _)| {
            path.strip_prefix(prefix)
                .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
        })
        .map_or("/*", |(_, template)| template)
}
