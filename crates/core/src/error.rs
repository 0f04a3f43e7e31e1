//! Structured error handling for HTTP handlers.
//!
//! Errors convert into JSON responses of the form `{"error": "..."}`.
//! Internal details are logged but never exposed to clients.

use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Application error type with automatic response conversion.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Internal: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a not found error for an entity.
    pub fn not_found(entity: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{entity} not found: {id}"))
    }

    /// HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            Self::NotFound(msg) | Self::InvalidArgument(msg) => msg,
            Self::Unavailable(msg) => {
                warn!(error = %msg, "Upstream unavailable");
                "Service temporarily unavailable".to_string()
            }
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option types.
pub trait OptionAppExt<T> {
    /// Convert `None` to [`AppError::NotFound`].
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if the option is `None`.
    fn ok_or_not_found(self, entity: &str, id: impl Display) -> AppResult<T>;
}

impl<T> OptionAppExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str, id: impl Display) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(entity, id))
    }
}
