//! Content brief payload and normalization.
//!
//! [`GenerationPayload`] is the raw POST body as submitted by the client;
//! every field is optional at the serde level so that [`normalize`] can
//! collect *all* violated constraints in one pass instead of failing on the
//! first. [`GenerationRequest`] is the validated, fully-defaulted brief the
//! rest of the system works with.

use serde::Deserialize;

use crate::error::{FieldViolation, InvalidBrief};

// ---------------------------------------------------------------------------
// Constraints and defaults
// ---------------------------------------------------------------------------

/// Minimum accepted video duration in seconds.
pub const MIN_DURATION_SECS: u32 = 15;
/// Maximum accepted video duration in seconds.
pub const MAX_DURATION_SECS: u32 = 120;
/// Duration applied when the brief does not specify one.
pub const DEFAULT_DURATION_SECS: u32 = 60;
/// Platform applied when the brief does not specify one.
pub const DEFAULT_PLATFORM: &str = "youtube_shorts";
/// Minimum length (in characters) for the required text fields.
pub const MIN_TEXT_CHARS: usize = 2;

// ---------------------------------------------------------------------------
// Wire payload
// ---------------------------------------------------------------------------

/// Raw generation request body.
///
/// Field names follow the public JSON contract (camelCase). Unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPayload {
    pub niche: Option<String>,
    pub topic: Option<String>,
    pub tone: Option<String>,
    pub goal: Option<String>,
    /// Signed so that out-of-range values (including negatives) are reported
    /// as constraint violations rather than rejected at the serde layer.
    pub duration_seconds: Option<i64>,
    pub platform: Option<String>,
    pub call_to_action: Option<String>,
    pub include_captions: Option<bool>,
    pub include_hashtags: Option<bool>,
    pub include_shot_list: Option<bool>,
}

// ---------------------------------------------------------------------------
// Normalized brief
// ---------------------------------------------------------------------------

/// A validated, fully-defaulted content brief.
///
/// Invariants: `duration_seconds` lies in
/// [[`MIN_DURATION_SECS`], [`MAX_DURATION_SECS`]]; optional text fields are
/// `None` when absent *or* blank, never empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub niche: String,
    pub topic: Option<String>,
    pub tone: String,
    pub goal: Option<String>,
    pub duration_seconds: u32,
    pub platform: String,
    pub call_to_action: Option<String>,
    pub include_captions: bool,
    pub include_hashtags: bool,
    pub include_shot_list: bool,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Validate a raw payload and apply defaults.
///
/// All constraints are checked independently; the returned [`InvalidBrief`]
/// enumerates every violation (field name + reason). Deterministic: the same
/// payload always yields the same request or the same violation list.
pub fn normalize(payload: GenerationPayload) -> Result<GenerationRequest, InvalidBrief> {
    let mut violations = Vec::new();

    let niche = required_text("niche", payload.niche, &mut violations);
    let tone = required_text("tone", payload.tone, &mut violations);

    let duration_seconds = match payload.duration_seconds {
        None => DEFAULT_DURATION_SECS,
        Some(d) if (MIN_DURATION_SECS as i64..=MAX_DURATION_SECS as i64).contains(&d) => d as u32,
        Some(d) => {
            violations.push(FieldViolation {
                field: "durationSeconds",
                message: format!(
                    "durationSeconds must be between {MIN_DURATION_SECS} and {MAX_DURATION_SECS}, got {d}"
                ),
            });
            DEFAULT_DURATION_SECS
        }
    };

    match (niche, tone) {
        (Some(niche), Some(tone)) if violations.is_empty() => Ok(GenerationRequest {
            niche,
            topic: optional_text(payload.topic),
            tone,
            goal: optional_text(payload.goal),
            duration_seconds,
            platform: payload
                .platform
                .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            call_to_action: optional_text(payload.call_to_action),
            include_captions: payload.include_captions.unwrap_or(true),
            include_hashtags: payload.include_hashtags.unwrap_or(true),
            include_shot_list: payload.include_shot_list.unwrap_or(true),
        }),
        _ => Err(InvalidBrief { violations }),
    }
}

/// Check a required text field: present and at least [`MIN_TEXT_CHARS`]
/// characters. Pushes a violation and returns `None` on failure.
fn required_text(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(FieldViolation {
                field,
                message: format!("{field} is required"),
            });
            None
        }
        Some(s) if s.chars().count() < MIN_TEXT_CHARS => {
            violations.push(FieldViolation {
                field,
                message: format!("{field} must be at least {MIN_TEXT_CHARS} characters"),
            });
            None
        }
        Some(s) => Some(s),
    }
}

/// Normalize an optional text field: trimmed, with blank values collapsed to
/// `None` so they can never be mistaken for user intent.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> GenerationPayload {
        GenerationPayload {
            niche: Some("finance".to_string()),
            tone: Some("calm".to_string()),
            ..Default::default()
        }
    }

    // -- Defaults --

    #[test]
    fn defaults_applied_for_absent_fields() {
        let request = normalize(valid_payload()).unwrap();
        assert_eq!(request.duration_seconds, DEFAULT_DURATION_SECS);
        assert_eq!(request.platform, DEFAULT_PLATFORM);
        assert!(request.include_captions);
        assert!(request.include_hashtags);
        assert!(request.include_shot_list);
        assert_eq!(request.topic, None);
        assert_eq!(request.goal, None);
        assert_eq!(request.call_to_action, None);
    }

    #[test]
    fn explicit_values_preserved() {
        let payload = GenerationPayload {
            topic: Some("index funds".to_string()),
            goal: Some("grow subscribers".to_string()),
            duration_seconds: Some(90),
            platform: Some("tiktok".to_string()),
            call_to_action: Some("Subscribe now".to_string()),
            include_captions: Some(false),
            ..valid_payload()
        };
        let request = normalize(payload).unwrap();
        assert_eq!(request.topic.as_deref(), Some("index funds"));
        assert_eq!(request.goal.as_deref(), Some("grow subscribers"));
        assert_eq!(request.duration_seconds, 90);
        assert_eq!(request.platform, "tiktok");
        assert_eq!(request.call_to_action.as_deref(), Some("Subscribe now"));
        assert!(!request.include_captions);
    }

    #[test]
    fn blank_optional_text_collapses_to_none() {
        let payload = GenerationPayload {
            topic: Some("   ".to_string()),
            call_to_action: Some(String::new()),
            ..valid_payload()
        };
        let request = normalize(payload).unwrap();
        assert_eq!(request.topic, None);
        assert_eq!(request.call_to_action, None);
    }

    #[test]
    fn optional_topic_is_trimmed() {
        let payload = GenerationPayload {
            topic: Some("  compounding  ".to_string()),
            ..valid_payload()
        };
        let request = normalize(payload).unwrap();
        assert_eq!(request.topic.as_deref(), Some("compounding"));
    }

    // -- Required fields --

    #[test]
    fn missing_niche_is_reported() {
        let payload = GenerationPayload {
            tone: Some("calm".to_string()),
            ..Default::default()
        };
        let err = normalize(payload).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "niche");
    }

    #[test]
    fn short_tone_is_reported() {
        let payload = GenerationPayload {
            tone: Some("x".to_string()),
            ..valid_payload()
        };
        let err = normalize(payload).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "tone");
    }

    #[test]
    fn all_violations_collected() {
        let payload = GenerationPayload {
            duration_seconds: Some(10),
            ..Default::default()
        };
        let err = normalize(payload).unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["niche", "tone", "durationSeconds"]);
    }

    // -- Duration bounds --

    #[test]
    fn duration_bounds_accepted() {
        for duration in [MIN_DURATION_SECS, MAX_DURATION_SECS] {
            let payload = GenerationPayload {
                duration_seconds: Some(duration as i64),
                ..valid_payload()
            };
            assert_eq!(normalize(payload).unwrap().duration_seconds, duration);
        }
    }

    #[test]
    fn duration_out_of_range_is_reported() {
        for duration in [0, 14, 121, -30] {
            let payload = GenerationPayload {
                duration_seconds: Some(duration),
                ..valid_payload()
            };
            let err = normalize(payload).unwrap_err();
            assert_eq!(err.violations[0].field, "durationSeconds");
        }
    }

    // -- Determinism --

    #[test]
    fn normalization_is_deterministic() {
        let a = normalize(valid_payload()).unwrap();
        let b = normalize(valid_payload()).unwrap();
        assert_eq!(a, b);
    }
}
