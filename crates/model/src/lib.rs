//! Client for the hosted text-generation API.
//!
//! [`ChatCompletionsClient`] talks to an OpenAI-compatible chat-completions
//! endpoint and parses the completion text into a
//! [`clipplan_core::plan::ProductionPlan`]. The [`PlanModel`] trait is the
//! seam the HTTP layer depends on, so handlers can be exercised with stub
//! models in tests.

pub mod client;
pub mod prompt;

pub use client::{ChatCompletionsClient, ModelError, ModelOptions, PlanModel};
