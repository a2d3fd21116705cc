use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clipplan_core::error::InvalidBrief;
use clipplan_model::ModelError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the public JSON error shapes:
/// `{ "error", "details" }` for validation failures and `{ "error" }` for
/// generation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted brief violated one or more constraints.
    #[error(transparent)]
    InvalidBrief(#[from] InvalidBrief),

    /// The hosted model call failed. Never silently replaced by the
    /// deterministic synthesizer.
    #[error(transparent)]
    Generation(#[from] ModelError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidBrief(err) => {
                let body = json!({
                    "error": "Invalid request",
                    "details": err.violations,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }

            AppError::Generation(err) => {
                tracing::error!(error = %err, "Plan generation failed");
                // Parse failures carry a stable public message; everything
                // else is sanitized to a generic one.
                let message = match err {
                    ModelError::MalformedOutput => err.to_string(),
                    _ => "Failed to generate production plan".to_string(),
                };
                let body = json!({ "error": message });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
