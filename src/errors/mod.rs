//! Unified error handling with the `{ success, data | message, error }` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Consistent JSON envelope for all API responses.
///
/// Successful responses carry `data`; failures carry a human `message` and,
/// for server-side failures, a diagnostic `error` string meant for operators.
/// Callers branch on `success` and the HTTP status only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        })
    }
}

impl ApiResponse<()> {
    /// Build a failure envelope.
    pub fn failure(message: &str, error: Option<&str>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
            error: error.map(str::to_string),
        }
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{message}: {source}")]
    Store {
        message: String,
        #[source]
        source: StoreError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Attach a human-readable message to a record store failure.
    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            message: message.into(),
            source,
        }
    }

    /// Check if this error represents an auth failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ApiResponse::failure("Not authorized, authentication required", None),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiResponse::failure(msg, None)),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::failure(msg, None)),
            AppError::Store { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(message, Some(&source.to_string())),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure("An internal error occurred", Some(msg)),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
