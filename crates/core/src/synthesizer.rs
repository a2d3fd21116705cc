//! Deterministic production-plan synthesis.
//!
//! Pure template expansion plus time-budget arithmetic: the same brief
//! always yields byte-identical output. Used whenever no hosted-model
//! credential is configured.

use crate::brief::GenerationRequest;
use crate::plan::{
    OutlineBeat, ProductionPlan, PublishTiming, ScriptSegment, Speaker,
};

// ---------------------------------------------------------------------------
// Beat labels
// ---------------------------------------------------------------------------

pub const BEAT_HOOK: &str = "Hook";
pub const BEAT_VALUE_DROP: &str = "Value Drop";
pub const BEAT_EXECUTION: &str = "Execution Steps";
pub const BEAT_CTA: &str = "CTA";

// ---------------------------------------------------------------------------
// Time-budget constants
// ---------------------------------------------------------------------------

/// Floor for the per-beat base length in seconds.
pub const MIN_BEAT_SECS: u32 = 5;
/// Ceiling for the hook beat in seconds.
pub const MAX_HOOK_SECS: u32 = 6;
/// Floor for the closing CTA beat in seconds.
pub const MIN_CTA_SECS: u32 = 4;

// ---------------------------------------------------------------------------
// Fixed copy
// ---------------------------------------------------------------------------

/// CTA detail used when the brief does not supply a call to action.
pub const DEFAULT_CTA_DETAIL: &str =
    "Encourage viewers to try it today and follow for more quick wins.";
/// Final caption used when the brief does not supply a call to action.
pub const DEFAULT_FOLLOW_CAPTION: &str = "Follow for more AI Shorts tactics";
/// Recommended publish hour, UTC.
pub const PUBLISH_HOUR_UTC: u8 = 16;

const PUBLISH_RATIONALE: &str =
    "Optimized for after-school viewing window for global audience.";

const FIXED_HASHTAGS: [&str; 2] = ["#CreatorTips", "#AIWorkflow"];

const AUTOMATION_CHECKLIST: [&str; 5] = [
    "Generate storyboard in favorite AI storyboard tool",
    "Use text-to-speech for narration and refine in audio editor",
    "Render b-roll clips with preferred video generator",
    "Assemble timeline in template project",
    "Schedule upload and auto-caption in YouTube Studio",
];

// ---------------------------------------------------------------------------
// Time-budget arithmetic
// ---------------------------------------------------------------------------

/// Per-beat base length: `max(5, round(duration / 4))`, integer arithmetic.
pub fn beat_length_secs(duration_seconds: u32) -> u32 {
    ((duration_seconds + 2) / 4).max(MIN_BEAT_SECS)
}

/// Allocate the four beat budgets for a duration.
///
/// Hook is capped at [`MAX_HOOK_SECS`]; the CTA takes whatever remains of
/// the requested duration, floored at [`MIN_CTA_SECS`], so the budgets sum
/// to the requested duration whenever the floors permit.
pub fn beat_budgets_secs(duration_seconds: u32) -> [u32; 4] {
    let beat = beat_length_secs(duration_seconds);
    let hook = beat.min(MAX_HOOK_SECS);
    let cta = duration_seconds
        .saturating_sub(hook + 2 * beat)
        .max(MIN_CTA_SECS);
    [hook, beat, beat, cta]
}

/// Topic used in templates: the user topic when provided, otherwise a
/// niche-derived default.
pub fn resolve_topic(request: &GenerationRequest) -> String {
    match &request.topic {
        Some(topic) => topic.clone(),
        None => format!("Trending tip in {}", request.niche),
    }
}

/// Hashtag derived from a niche: whitespace stripped, `#`-prefixed.
/// Returns `None` when stripping leaves nothing, so a whitespace-only niche
/// can never produce a bare `#`.
fn niche_hashtag(niche: &str) -> Option<String> {
    let compact: String = niche.split_whitespace().collect();
    if compact.is_empty() {
        None
    } else {
        Some(format!("#{compact}"))
    }
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Expand a normalized brief into a complete production plan.
///
/// No external calls, no randomness: invoking this twice with an identical
/// request yields identical output.
pub fn synthesize(request: &GenerationRequest) -> ProductionPlan {
    let topic = resolve_topic(request);
    let topic_lower = topic.to_lowercase();
    let niche_lower = request.niche.to_lowercase();
    let duration = request.duration_seconds;
    let [hook_secs, value_secs, steps_secs, cta_secs] = beat_budgets_secs(duration);

    let outline = vec![
        OutlineBeat {
            beat: BEAT_HOOK.to_string(),
            detail: format!("Pose a bold question about {topic_lower}."),
            approximate_time: hook_secs,
        },
        OutlineBeat {
            beat: BEAT_VALUE_DROP.to_string(),
            detail: format!(
                "Reveal a surprising {niche_lower} stat or tactic with fast pacing."
            ),
            approximate_time: value_secs,
        },
        OutlineBeat {
            beat: BEAT_EXECUTION.to_string(),
            detail: "Break the tactic into 2-3 punchy steps viewers can follow in under a minute."
                .to_string(),
            approximate_time: steps_secs,
        },
        OutlineBeat {
            beat: BEAT_CTA.to_string(),
            detail: request
                .call_to_action
                .clone()
                .unwrap_or_else(|| DEFAULT_CTA_DETAIL.to_string()),
            approximate_time: cta_secs,
        },
    ];

    // One script segment per beat, same order and budget. The hook is spoken
    // to camera; everything else is narrated over the beat's detail text.
    let script = outline
        .iter()
        .map(|step| ScriptSegment {
            speaker: if step.beat == BEAT_HOOK {
                Speaker::OnCamera
            } else {
                Speaker::Voiceover
            },
            text: if step.beat == BEAT_HOOK {
                format!("Wait! Are you still ignoring {topic_lower}? That ends now.")
            } else {
                step.detail.clone()
            },
            approximate_time: step.approximate_time,
        })
        .collect();

    let captions = if request.include_captions {
        vec![
            format!("Hook: {topic}"),
            "Step 1: Start today".to_string(),
            "Step 2: Keep it consistent".to_string(),
            "Step 3: Share your results".to_string(),
            request
                .call_to_action
                .clone()
                .unwrap_or_else(|| DEFAULT_FOLLOW_CAPTION.to_string()),
        ]
    } else {
        Vec::new()
    };

    let hashtags = if request.include_hashtags {
        let mut tags = vec![format!("#{}", request.platform)];
        tags.extend(niche_hashtag(&request.niche));
        tags.extend(FIXED_HASHTAGS.iter().map(|t| t.to_string()));
        tags
    } else {
        Vec::new()
    };

    ProductionPlan {
        concept_title: format!("{topic} ({} {})", request.niche, request.tone),
        hook: format!(
            "You're missing out on {topic_lower} - here's how to fix it in {duration} seconds."
        ),
        outline,
        script,
        b_roll_prompts: vec![
            format!("Dynamic text animation highlighting \"{topic}\""),
            "Close-up of creator demonstrating the tactic".to_string(),
            format!("Fast-cut montage related to {niche_lower} results"),
        ],
        captions,
        hashtags,
        automation_checklist: AUTOMATION_CHECKLIST
            .iter()
            .map(|s| s.to_string())
            .collect(),
        publish_timing: PublishTiming {
            best_hour_utc: PUBLISH_HOUR_UTC,
            rationale: PUBLISH_RATIONALE.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
