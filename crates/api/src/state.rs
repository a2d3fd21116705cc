use std::sync::Arc;

use clipplan_model::PlanModel;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hosted plan model; `None` selects the deterministic synthesizer.
    pub model: Option<Arc<dyn PlanModel>>,
}
