use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::PromptIdError;
use crate::storage::StorageError;

/// Request-level error type.
/// Implements `ResponseError` so handlers can return `Result<T, ApiError>`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "ALREADY_EXISTS",
            ApiError::Corrupt(_) => "CORRUPT_RECORD",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(id) => ApiError::NotFound(format!("Prompt '{id}' not found")),
            StorageError::AlreadyExists(id) => {
                ApiError::Conflict(format!("Prompt '{id}' already exists and cannot be updated"))
            }
            e @ StorageError::Corrupt { .. } => ApiError::Corrupt(e.to_string()),
            e @ (StorageError::Serialize { .. } | StorageError::Io { .. }) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<PromptIdError> for ApiError {
    fn from(err: PromptIdError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Corrupt(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::InvalidInput(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => msg.clone(),
            // Already logged with its path by the store.
            ApiError::Corrupt(_) => "The stored prompt could not be read".to_string(),
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                "An internal server error occurred".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(json!({
            "error": {
                "code": self.code(),
                "message": message
            }
        }))
    }
}
