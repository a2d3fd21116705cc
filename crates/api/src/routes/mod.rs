pub mod health;
pub mod plan;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /plan/generate    generate a production plan from a brief
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/plan", plan::router())
}
