//! Prompt construction for the hosted model.
//!
//! The user message embeds both a JSON schema describing the expected plan
//! shape and the brief's constraints, so the model can be held to the exact
//! structure [`clipplan_core::plan::ProductionPlan`] deserializes.

use clipplan_core::brief::GenerationRequest;
use serde_json::json;

/// System instruction sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an experienced short-form video strategist helping a creator automate \
production for AI-generated short videos. Always respond with JSON that \
matches the schema provided by the user. Ensure timings add up to the \
requested duration. Keep language concise, energetic, and accessible for \
global audiences.";

/// Build the user message for a brief: the plan schema plus the brief's
/// constraints, serialized as a single JSON document.
pub fn build_user_message(request: &GenerationRequest) -> String {
    json!({
        "schema": plan_schema(),
        "constraints": {
            "durationSeconds": request.duration_seconds,
            "niche": request.niche,
            "tone": request.tone,
            "goal": request.goal,
            "callToAction": request.call_to_action,
            "platform": request.platform,
            "includeCaptions": request.include_captions,
            "includeHashtags": request.include_hashtags,
            "includeShotList": request.include_shot_list,
        },
    })
    .to_string()
}

/// JSON schema for the production plan, mirroring the wire shape of
/// [`clipplan_core::plan::ProductionPlan`].
fn plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "conceptTitle": { "type": "string" },
            "hook": { "type": "string" },
            "outline": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "beat": { "type": "string" },
                        "detail": { "type": "string" },
                        "approximateTime": { "type": "number" },
                    },
                    "required": ["beat", "detail", "approximateTime"],
                },
            },
            "script": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "speaker": { "type": "string", "enum": ["on_camera", "voiceover"] },
                        "text": { "type": "string" },
                        "approximateTime": { "type": "number" },
                    },
                    "required": ["speaker", "text", "approximateTime"],
                },
            },
            "bRollPrompts": { "type": "array", "items": { "type": "string" } },
            "captions": { "type": "array", "items": { "type": "string" } },
            "hashtags": { "type": "array", "items": { "type": "string" } },
            "automationChecklist": { "type": "array", "items": { "type": "string" } },
            "publishTiming": {
                "type": "object",
                "properties": {
                    "bestHourUTC": { "type": "number" },
                    "rationale": { "type": "string" },
                },
                "required": ["bestHourUTC", "rationale"],
            },
        },
        "required": [
            "conceptTitle",
            "hook",
            "outline",
            "script",
            "bRollPrompts",
            "captions",
            "hashtags",
            "automationChecklist",
            "publishTiming",
        ],
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
