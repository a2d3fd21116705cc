use std::time::Duration;

use clipplan_model::ModelOptions;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Hosted-model configuration.
///
/// The presence of `api_key` is the single switch between the hosted-model
/// path and the deterministic synthesizer. Read once at startup; the request
/// path never touches the process environment.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Bearer credential; `None` selects the deterministic path.
    pub api_key: Option<String>,
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Output-size cap in tokens.
    pub max_output_tokens: u32,
    /// Per-request timeout for the external call in seconds.
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Load model configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                         |
    /// |--------------------------|-------------------------------------------------|
    /// | `OPENAI_API_KEY`         | unset (deterministic path)                      |
    /// | `MODEL_API_URL`          | `https://api.openai.com/v1/chat/completions`    |
    /// | `MODEL_NAME`             | `gpt-4o-mini`                                   |
    /// | `MODEL_TEMPERATURE`      | `0.7`                                           |
    /// | `MODEL_MAX_OUTPUT_TOKENS`| `1200`                                          |
    /// | `MODEL_TIMEOUT_SECS`     | `60`                                            |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let api_url = std::env::var("MODEL_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into());

        let model = std::env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-4o-mini".into());

        let temperature: f32 = std::env::var("MODEL_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".into())
            .parse()
            .expect("MODEL_TEMPERATURE must be a valid f32");

        let max_output_tokens: u32 = std::env::var("MODEL_MAX_OUTPUT_TOKENS")
            .unwrap_or_else(|_| "1200".into())
            .parse()
            .expect("MODEL_MAX_OUTPUT_TOKENS must be a valid u32");

        let timeout_secs: u64 = std::env::var("MODEL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("MODEL_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            api_url,
            model,
            temperature,
            max_output_tokens,
            timeout_secs,
        }
    }

    /// Client options for the hosted model, or `None` when no credential is
    /// configured.
    pub fn client_options(&self) -> Option<ModelOptions> {
        self.api_key.as_ref().map(|api_key| ModelOptions {
            api_url: self.api_url.clone(),
            api_key: api_key.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}
