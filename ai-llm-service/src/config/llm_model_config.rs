use std::fmt;

use crate::error_handler::{ConfigError, Result, validate_http_endpoint, validate_range_f32};

/// Configuration for the upstream chat-completion model.
///
/// Per-call parameters (messages, temperature) travel in
/// [`CompletionRequest`](crate::chat::CompletionRequest); this struct only
/// carries what stays fixed for the process lifetime.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_model_config::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-4".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     max_tokens: None,
///     temperature: None,
///     timeout_secs: None,
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gpt-4"`).
    pub model: String,

    /// Base URL of the provider, without the `/v1/...` suffix.
    pub endpoint: String,

    /// Bearer credential. `None` means the service is not usable.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Default sampling temperature when a request does not set one.
    pub temperature: Option<f32>,

    /// Optional request timeout (in seconds). `None` keeps the client default.
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Returns `true` if a non-empty API key is present.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Checks the static parts of the config (model, endpoint, temperature).
    ///
    /// The API key is not checked here: a missing key is a request-time
    /// condition, not a startup failure.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel.into());
        }
        validate_http_endpoint("OPENAI_URL", self.endpoint.trim())?;
        if let Some(t) = self.temperature {
            validate_range_f32("temperature", t, 0.0, 2.0)?;
        }
        Ok(())
    }
}

// Hand-written so the key never shows up in `{:?}` logs.
impl fmt::Debug for LlmModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmModelConfig")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
