//! Default model config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = bearer credential (optional here; absence is reported per request)
//! - `OPENAI_URL`       = provider base URL (default `https://api.openai.com`)
//! - `OPENAI_MODEL`     = model id (default `gpt-4`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64); unset means no explicit timeout

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{Result, env_opt, env_opt_u32, env_opt_u64},
};

/// Provider base URL used when `OPENAI_URL` is not set.
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";

/// Constructs the OpenAI chat-completion config from the environment.
///
/// # Errors
///
/// - [`ConfigError::InvalidNumber`](crate::error_handler::ConfigError::InvalidNumber)
///   if `LLM_MAX_TOKENS` or `LLM_TIMEOUT_SECS` is not a number
/// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
///   if `OPENAI_URL` has no http/https scheme
pub fn config_openai() -> Result<LlmModelConfig> {
    let cfg = LlmModelConfig {
        model: env_opt("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.into()),
        endpoint: env_opt("OPENAI_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.into()),
        api_key: env_opt("OPENAI_API_KEY"),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature: None,
        timeout_secs: env_opt_u64("LLM_TIMEOUT_SECS")?,
    };
    cfg.validate()?;
    Ok(cfg)
}
