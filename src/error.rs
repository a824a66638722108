//! Application error type and its JSON wire format.
//!
//! Every failure a handler can produce flows through [`AppError`], which
//! renders as `{"error": {"code", "message", "details"}}` with the
//! matching HTTP status. `details` is free-form JSON; endpoints put
//! field errors, offending ids, and similar context there.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Forbidden { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Rendering { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation { message: message.into(), details }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized { message: message.into(), details }
    }

    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden { message: message.into(), details }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound { message: message.into(), details }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict { message: message.into(), details }
    }

    pub fn rendering(message: impl Into<String>, details: Value) -> Self {
        Self::Rendering { message: message.into(), details }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal { message: message.into(), details }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::Validation { message, details } => {
                (StatusCode::BAD_REQUEST, "validation_error", message, details)
            }
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
            AppError::Forbidden { message, details } => {
                (StatusCode::FORBIDDEN, "forbidden", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Rendering { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "rendering_error",
                message,
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// Error payload without the HTTP envelope, for embedding in larger
    /// bodies.
    pub fn to_error_info(self) -> ErrorInfo {
        let (_, code, message, details) = self.parts();
        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

/// Wire shape of a single error.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (kind, message) = match self {
            AppError::Validation { message, .. } => ("validation", message),
            AppError::Unauthorized { message, .. } => ("unauthorized", message),
            AppError::Forbidden { message, .. } => ("forbidden", message),
            AppError::NotFound { message, .. } => ("not found", message),
            AppError::Conflict { message, .. } => ("conflict", message),
            AppError::Rendering { message, .. } => ("rendering", message),
            AppError::Internal { message, .. } => ("internal", message),
        };
        write!(f, "{kind}: {message}")
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({})),
        )
    }
}
