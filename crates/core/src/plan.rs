//! Production plan model.
//!
//! The structured artifact delivered to the client, whether it came from the
//! hosted model or the deterministic synthesizer. Serialization follows the
//! public JSON contract (camelCase), and the same types are used to parse
//! the hosted model's output, so the external response is schema-checked by
//! construction.

use serde::{Deserialize, Serialize};

/// Who delivers a script segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The creator speaking to camera.
    OnCamera,
    /// Narration layered over b-roll.
    Voiceover,
}

/// One labeled segment of the outline with its time budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineBeat {
    pub beat: String,
    pub detail: String,
    /// Time budget in seconds.
    pub approximate_time: u32,
}

/// One spoken segment of the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSegment {
    pub speaker: Speaker,
    pub text: String,
    /// Time budget in seconds.
    pub approximate_time: u32,
}

/// When to publish, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishTiming {
    /// Recommended hour of day, 0-23 UTC.
    #[serde(rename = "bestHourUTC")]
    pub best_hour_utc: u8,
    pub rationale: String,
}

/// A complete short-video production plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlan {
    pub concept_title: String,
    pub hook: String,
    pub outline: Vec<OutlineBeat>,
    pub script: Vec<ScriptSegment>,
    pub b_roll_prompts: Vec<String>,
    /// Empty exactly when the brief disabled captions.
    pub captions: Vec<String>,
    /// Empty exactly when the brief disabled hashtags.
    pub hashtags: Vec<String>,
    pub automation_checklist: Vec<String>,
    pub publish_timing: PublishTiming,
}

/// Where a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Generated by the hosted model.
    Model,
    /// Synthesized deterministically, no external call involved.
    Deterministic,
}

impl Provenance {
    pub fn is_model(self) -> bool {
        matches!(self, Provenance::Model)
    }
}

/// A plan tagged with its provenance.
///
/// Provenance stays truthful: a failing model call surfaces as an error and
/// is never re-tagged as a deterministic plan (or vice versa).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub provenance: Provenance,
    pub plan: ProductionPlan,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
