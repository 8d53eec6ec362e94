//! Proxy failures rendered in the backend's envelope shape, so the browser
//! client classifies them like any other rejected call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

const UNAVAILABLE_MESSAGE: &str = "TigerLink is temporarily unavailable. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming request body could not be buffered.
    #[error("request body rejected: {0}")]
    Body(String),

    /// The backend could not be reached or its response could not be read.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::Body(_) => "Request body could not be read",
            Self::Upstream(_) => UNAVAILABLE_MESSAGE,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "proxy request failed");
        let body = json!({
            "status": "error",
            "code": status.as_u16(),
            "data": null,
            "message": self.public_message(),
        });
        (status, Json(body)).into_response()
    }
}
