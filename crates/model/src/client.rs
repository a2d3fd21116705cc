//! Chat-completions client and the plan-model seam.
//!
//! Wraps an OpenAI-compatible `/chat/completions` endpoint using
//! [`reqwest`]. The completion text is parsed defensively: anything that
//! does not deserialize into a [`ProductionPlan`] is reported as malformed
//! output rather than trusted.

use std::time::Duration;

use async_trait::async_trait;
use clipplan_core::brief::GenerationRequest;
use clipplan_core::plan::ProductionPlan;
use serde::Deserialize;
use serde_json::json;

use crate::prompt;

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ModelOptions {
    /// Full endpoint URL, e.g. `https://api.openai.com/v1/chat/completions`.
    pub api_url: String,
    /// Bearer credential for the endpoint.
    pub api_key: String,
    /// Model identifier, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output-size cap in tokens.
    pub max_output_tokens: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Errors from the hosted-model layer.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Model API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The completion could not be parsed as a production plan.
    #[error("Model returned malformed output")]
    MalformedOutput,
}

/// A service that can turn a normalized brief into a production plan.
///
/// Implemented by [`ChatCompletionsClient`] in production; tests substitute
/// stubs so the HTTP layer can be exercised without a network.
#[async_trait]
pub trait PlanModel: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<ProductionPlan, ModelError>;
}

/// HTTP client for a hosted chat-completions endpoint.
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    options: ModelOptions,
}

/// Successful chat-completions response envelope (the subset we read).
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ChatCompletionsClient {
    /// Build a client with a dedicated connection pool and the configured
    /// request timeout.
    pub fn new(options: ModelOptions) -> Result<Self, ModelError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(Self { client, options })
    }

    /// Send one generation request and parse the completion into a plan.
    async fn request_plan(
        &self,
        request: &GenerationRequest,
    ) -> Result<ProductionPlan, ModelError> {
        let body = json!({
            "model": self.options.model,
            "temperature": self.options.temperature,
            "max_tokens": self.options.max_output_tokens,
            "messages": [
                { "role": "system", "content": prompt::SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt::build_user_message(request) },
            ],
        });

        tracing::debug!(
            model = %self.options.model,
            duration_seconds = request.duration_seconds,
            "Requesting plan from hosted model"
        );

        let response = self
            .client
            .post(&self.options.api_url)
            .bearer_auth(&self.options.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let content = extract_content(&text).ok_or(ModelError::MalformedOutput)?;
        parse_plan(&content)
    }
}

#[async_trait]
impl PlanModel for ChatCompletionsClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<ProductionPlan, ModelError> {
        self.request_plan(request).await
    }
}

/// Pull the first choice's message content out of a raw response body.
fn extract_content(body: &str) -> Option<String> {
    let completion: ChatCompletion = serde_json::from_str(body).ok()?;
    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
}

/// Parse completion text as a production plan.
///
/// The boundary is untrusted: the text must deserialize into the full plan
/// shape, and the publish hour must be a real hour of day.
fn parse_plan(content: &str) -> Result<ProductionPlan, ModelError> {
    let plan: ProductionPlan =
        serde_json::from_str(content.trim()).map_err(|_| ModelError::MalformedOutput)?;
    if plan.publish_timing.best_hour_utc > 23 {
        return Err(ModelError::MalformedOutput);
    }
    Ok(plan)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn plan_json(hour: u8) -> String {
        json!({
            "conceptTitle": "Compounding (finance calm)",
            "hook": "h",
            "outline": [
                { "beat": "Hook", "detail": "d", "approximateTime": 6 }
            ],
            "script": [
                { "speaker": "on_camera", "text": "t", "approximateTime": 6 }
            ],
            "bRollPrompts": ["p"],
            "captions": [],
            "hashtags": [],
            "automationChecklist": ["a"],
            "publishTiming": { "bestHourUTC": hour, "rationale": "r" }
        })
        .to_string()
    }

    fn envelope(content: &str) -> String {
        json!({
            "choices": [ { "message": { "role": "assistant", "content": content } } ]
        })
        .to_string()
    }

    // -- Content extraction --

    #[test]
    fn extracts_first_choice_content() {
        let body = envelope("hello");
        assert_eq!(extract_content(&body).as_deref(), Some("hello"));
    }

    #[test]
    fn non_json_envelope_yields_none() {
        assert_eq!(extract_content("Service Unavailable"), None);
    }

    #[test]
    fn empty_choices_yields_none() {
        assert_eq!(extract_content(r#"{"choices":[]}"#), None);
    }

    // -- Plan parsing --

    #[test]
    fn parses_well_formed_plan() {
        let plan = parse_plan(&plan_json(16)).unwrap();
        assert_eq!(plan.concept_title, "Compounding (finance calm)");
        assert_eq!(plan.publish_timing.best_hour_utc, 16);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let content = format!("\n  {}  \n", plan_json(16));
        assert!(parse_plan(&content).is_ok());
    }

    #[test]
    fn prose_is_malformed() {
        assert_matches!(
            parse_plan("Sure! Here is your plan: ..."),
            Err(ModelError::MalformedOutput)
        );
    }

    #[test]
    fn missing_fields_are_malformed() {
        assert_matches!(
            parse_plan(r#"{"conceptTitle":"t"}"#),
            Err(ModelError::MalformedOutput)
        );
    }

    #[test]
    fn impossible_publish_hour_is_malformed() {
        assert_matches!(parse_plan(&plan_json(99)), Err(ModelError::MalformedOutput));
    }

    #[test]
    fn unknown_speaker_is_malformed() {
        let content = plan_json(16).replace("on_camera", "host");
        assert_matches!(parse_plan(&content), Err(ModelError::MalformedOutput));
    }
}
