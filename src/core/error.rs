use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::upstream::UpstreamError;
use crate::shared::crud::FieldErrors;
use crate::shared::types::ApiResponse;

/// Message shown when an upstream call fails without a usable explanation
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The upstream answered with a non-success status envelope and no field errors
    #[error("Upstream rejected request ({code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("External service error: {0}")]
    ExternalServiceError(#[from] UpstreamError),
}

impl AppError {
    /// Build a validation error from a field map
    pub fn validation(errors: FieldErrors) -> Self {
        AppError::Validation {
            message: "Please correct the highlighted fields".to_string(),
            errors,
        }
    }

    /// Text suitable for a toast/snackbar notice
    pub fn notice(&self) -> String {
        match self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::Rejected { message, .. } if !message.trim().is_empty() => message.clone(),
            AppError::Rejected { .. } | AppError::ExternalServiceError(_) | AppError::Internal(_) => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation {
                ref message,
                ref errors,
            } => (StatusCode::BAD_REQUEST, message.clone(), Some(errors.clone())),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::Forbidden(ref msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.clone(), None),
            AppError::Rejected { code, ref message } => {
                tracing::warn!("Upstream rejected request: code={}, message={}", code, message);
                let status = u16::try_from(code)
                    .ok()
                    .and_then(|c| StatusCode::from_u16(c).ok())
                    .filter(|s| s.is_client_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (status, self.notice(), None)
            }
            AppError::ExternalServiceError(ref e) => {
                tracing::error!("External service error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
