use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use tonal_classifier::error::ClassifierError;
use tonal_storage::error::StorageError;

/// Unified error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The sentiment model failed or returned something unusable.
    Classification(String),
    Storage(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Classification(msg) => {
                tracing::error!("classification error: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "sentiment model unavailable",
                )
            }
            ApiError::Storage(msg) => {
                tracing::error!("storage error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage failure")
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, message).into_response()
    }
}

impl From<ClassifierError> for ApiError {
    fn from(e: ClassifierError) -> Self {
        ApiError::Classification(e.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e.to_string())
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::TemplateRender(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}
