//! HTTP routes: landing pages, profile API and health check.

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use landing_core::{AppError, AppResult, OptionAppExt, StrExt};
use landing_telemetry::PrometheusHandle;
use serde::Serialize;

use crate::pages::{render_home, render_not_found, render_profile};
use crate::profiles::{ProfileSource, ProfileView, load_salesperson};
use crate::startup::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

impl HealthResponse {
    fn now(status: &'static str) -> Self {
        Self {
            status,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Build routes with the given application state.
pub fn rest_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", any(health_handler))
        .route("/profile/{uid}", get(profile_page_handler))
        .route("/api/profiles/{uid}", get(profile_api_handler))
        .with_state(state)
}

/// Build routes with the Prometheus scrape endpoint.
pub fn rest_routes_with_metrics(state: AppState, metrics_handle: PrometheusHandle) -> Router {
    rest_routes(state).route(
        "/metrics",
        get(move || {
            let handle = metrics_handle.clone();
            async move { handle.render() }
        }),
    )
}

async fn home_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_home(&state.site))
}

/// Liveness probe. Only `GET` is accepted.
async fn health_handler(method: Method) -> Response {
    if method == Method::GET {
        return Json(HealthResponse::now("ok")).into_response();
    }

    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET")],
        Json(HealthResponse::now("error")),
    )
        .into_response()
}

/// Profile page. Missing profiles and lookup failures render the same
/// not-found view with status 200.
async fn profile_page_handler(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Html<String> {
    let html = match load_salesperson(state.profiles.as_ref(), &uid).await {
        Some(salesperson) => {
            render_profile(&state.site, &ProfileView::new(&salesperson, &state.media))
        }
        None => render_not_found(&state.site),
    };
    Html(html)
}

async fn profile_api_handler(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> AppResult<Json<ProfileView>> {
    let uid = uid
        .non_empty()
        .ok_or_else(|| AppError::InvalidArgument("Profile UID is required".to_string()))?;

    let salesperson = state
        .profiles
        .find_salesperson(uid)
        .await?
        .into_option()
        .ok_or_not_found("Salesperson", uid)?;

    Ok(Json(ProfileView::new(&salesperson, &state.media)))
}
