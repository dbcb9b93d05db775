//! Daemon and API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reptrack_domain::DomainError;
use reptrack_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

// =============================================================================
// API errors
// =============================================================================

/// Wire shape of every API error body: `{"Error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Literal error message
    #[serde(rename = "Error")]
    pub error: String,
}

/// The three request outcomes a caller can be told about.
///
/// The Display strings are the literal response messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request shape failed validation; nothing touched the store
    #[error("Invalid request")]
    InvalidRequest,

    /// Syntactically fine request that matched no record
    #[error("Not found")]
    NotFound,

    /// The store call failed; details are logged, never echoed
    #[error("Request failed")]
    RequestFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest | ApiError::RequestFailed => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(_: DomainError) -> Self {
        // Every field-validation failure collapses to the same response.
        ApiError::InvalidRequest
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "Store operation failed");
        ApiError::RequestFailed
    }
}

// =============================================================================
// Daemon errors
// =============================================================================

/// Daemon-level errors (configuration and startup).
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for daemon operations.
pub type DaemonResult<T> = Result<T, DaemonError>;
