//! Server startup and wiring.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::header::HeaderName;
use http::{Request, StatusCode};
use landing_strapi::{MediaResolver, StrapiClient};
use landing_telemetry::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use crate::config::Config;
use crate::middleware::{MetricsLayer, REQUEST_ID_HEADER, RequestIdLayer};
use crate::pages::SiteInfo;
use crate::profiles::ProfileSource;
use crate::routes::rest_routes_with_metrics;

/// Request timeout duration.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileSource>,
    pub media: MediaResolver,
    pub site: Arc<SiteInfo>,
}

/// Build and configure the complete application.
pub fn build_app(
    config: &Config,
    metrics_handle: PrometheusHandle,
) -> anyhow::Result<(Router, SocketAddr)> {
    let addr: SocketAddr = config.http_address.parse()?;

    let strapi = StrapiClient::new(config.strapi_config())?;
    info!(
        strapi_url = config.strapi_base_url(),
        authenticated = config.strapi_api_key.is_some(),
        "Content API configured"
    );

    let state = AppState {
        profiles: Arc::new(strapi),
        media: MediaResolver::new(config.strapi_base_url()),
        site: Arc::new(SiteInfo {
            name: config.site_name.trim().to_string(),
            sample_profiles: config.sample_profile_uids(),
        }),
    };

    let app = with_middleware(
        rest_routes_with_metrics(state, metrics_handle),
        config.cors_allow_origins.as_deref(),
    );

    Ok((app, addr))
}

/// Wrap a router in the shared middleware stack.
pub fn with_middleware(router: Router, cors_origins: Option<&str>) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(RequestIdLayer)
        .layer(MetricsLayer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = tracing::field::Empty,
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(build_cors(cors_origins));

    router.layer(middleware)
}

fn build_cors(origins: Option<&str>) -> CorsLayer {
    let cors = match origins {
        Some(o) if o.trim() == "*" => CorsLayer::permissive(),
        Some(o) => {
            let origins: Vec<_> = o.split(',').filter_map(|s| s.trim().parse().ok()).collect();
            CorsLayer::new().allow_origin(origins)
        }
        None => CorsLayer::permissive(),
    };

    cors.allow_headers(Any)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_methods(Any)
        .max_age(Duration::from_secs(3600))
}
