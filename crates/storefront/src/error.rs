//! Unified error handling for route handlers.
//!
//! All route handlers should return `Result<T, AppError>`.
//!
//! Error bodies are JSON of the form
//! `{"statusCode": 404, "statusMessage": "Product not found"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::LookupError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Product lookup failed.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),
}

/// JSON body returned for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub status_message: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Lookup(LookupError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to show to clients.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Lookup(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(error = %self, status = status.as_u16(), "Request error");

        let body = ErrorBody {
            status_code: status.as_u16(),
            status_message: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
