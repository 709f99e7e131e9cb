//! Error types for the JSON API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by API handlers.
///
/// Upstream failures never surface here; the country directory absorbs them.
#[derive(Debug, Error)]
pub enum SiteError {
    /// No country with the requested code.
    #[error("Country not found: {0}")]
    NotFound(String),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match &self {
            SiteError::NotFound(code) => {
                tracing::debug!(code = %code, "Country not found");
                StatusCode::NOT_FOUND
            }
        };

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, SiteError>;
