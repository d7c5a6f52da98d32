use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kaiwa_core::ProviderError;
use serde_json::json;
use tracing::error;

/// Errors surfaced to HTTP callers as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Empty transcript")]
    EmptyTranscript,

    #[error("Invalid transcript (must be a string)")]
    InvalidTranscript,

    #[error("Invalid temperature (must be a number)")]
    InvalidTemperature,

    /// The scoring model call failed. Details are logged, not returned.
    #[error("Scoring request failed")]
    Upstream(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody
            | Self::EmptyTranscript
            | Self::InvalidTranscript
            | Self::InvalidTemperature => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Upstream(err) = &self {
            let provider = err.downcast_ref::<ProviderError>();
            error!(
                error = %format!("{:#}", err),
                upstream_status = provider.and_then(ProviderError::status),
                rate_limited = provider.is_some_and(ProviderError::is_rate_limited),
                "scoring call failed"
            );
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
