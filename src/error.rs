//! Error types and HTTP error response handling.
//!
//! Every failure is surfaced to the caller; nothing is corrected or retried
//! locally, and a failed query aborts the whole report.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The ledger store failed to execute a query (connectivity, malformed
    /// query, decode failure).
    ///
    /// Propagated unchanged from sqlx. Returns HTTP 500 without details.
    #[error("Query failure: {0}")]
    QueryFailure(#[from] sqlx::Error),

    /// No authenticated user identity is available for the request.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthenticated access")]
    UnauthenticatedAccess,

    /// The requested report name is not one of the recognized report kinds.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Unknown report kind: {0}")]
    UnknownReportKind(String),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::UnauthenticatedAccess => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                self.to_string(),
            ),
            AppError::UnknownReportKind(_) => (
                StatusCode::NOT_FOUND,
                "unknown_report_kind",
                self.to_string(),
            ),
            AppError::QueryFailure(ref err) => {
                tracing::error!("Ledger query failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
