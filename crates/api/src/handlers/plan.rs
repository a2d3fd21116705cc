//! Handler for production-plan generation.
//!
//! Routes:
//! - `POST /plan/generate` — turn a content brief into a production plan

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use clipplan_core::brief::{normalize, GenerationPayload};
use clipplan_core::plan::{GenerationResult, ProductionPlan, Provenance};
use clipplan_core::synthesizer;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Success response: the plan plus its provenance flag.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    #[serde(rename = "usingAI")]
    pub using_ai: bool,
    pub plan: ProductionPlan,
}

impl From<GenerationResult> for GenerateResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            using_ai: result.provenance.is_model(),
            plan: result.plan,
        }
    }
}

/// POST /api/v1/plan/generate
///
/// Normalizes the brief, then either delegates to the hosted model (when a
/// credential is configured) or runs the deterministic synthesizer. A
/// failing model call surfaces as an error; it never falls back to the
/// synthesizer, so the `usingAI` flag stays truthful.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerationPayload>,
) -> AppResult<impl IntoResponse> {
    let request = normalize(payload)?;

    let result = match &state.model {
        Some(model) => {
            let plan = model.generate(&request).await?;
            tracing::info!(niche = %request.niche, "Plan generated by hosted model");
            GenerationResult {
                provenance: Provenance::Model,
                plan,
            }
        }
        None => {
            tracing::info!(niche = %request.niche, "Plan synthesized deterministically");
            GenerationResult {
                provenance: Provenance::Deterministic,
                plan: synthesizer::synthesize(&request),
            }
        }
    };

    Ok(Json(GenerateResponse::from(result)))
}
