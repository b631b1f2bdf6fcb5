use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use multiverse_remote::RemoteError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`RemoteError`] for upstream failures and `sqlx::Error` for
/// storage failures, and adds HTTP-specific variants. Implements
/// [`IntoResponse`] to produce consistent JSON error responses; the
/// HTTP translation happens only here, so every inner layer stays typed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An upstream API failure.
    #[error("Upstream error: {0}")]
    Remote(#[from] RemoteError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Remote(err) => classify_remote_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an upstream error into an HTTP status, error code, and message.
///
/// An upstream 404 means the requested id does not exist and is relayed
/// as 404. Every other upstream failure (unreachable, rejected, or
/// malformed) maps to 500 with the detail kept server-side.
fn classify_remote_error(err: &RemoteError) -> (StatusCode, &'static str, String) {
    if err.status() == Some(404) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Upstream resource not found".to_string(),
        );
    }
    tracing::error!(error = %err, "Upstream error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "UPSTREAM_ERROR",
        "Upstream request failed".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
