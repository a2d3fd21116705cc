//! Route definitions for production-plan generation.

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/plan`.
///
/// ```text
/// POST /generate    generate a production plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(handlers::plan::generate))
}
