use std::sync::Arc;

use ai_llm_service::{ChatCompletion, LlmModelConfig, OpenAiService, config_openai};
use tracing::{info, warn};

use crate::error_handler::{AppError, AppResult};

/// Shared state for all HTTP handlers.
///
/// Built once at startup and never mutated; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    /// Model configuration (the key is redacted in `Debug`).
    pub llm_config: LlmModelConfig,
    /// Completion backend; `None` when no credential is configured.
    upstream: Option<Arc<dyn ChatCompletion>>,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// A missing `OPENAI_API_KEY` does not fail startup: it is logged here
    /// and reported as [`AppError::Misconfigured`] on every model request.
    pub fn from_env() -> AppResult<Self> {
        let cfg = config_openai().map_err(AppError::Config)?;
        Self::from_config(cfg)
    }

    /// Builds state around the real OpenAI client.
    pub fn from_config(cfg: LlmModelConfig) -> AppResult<Self> {
        if !cfg.has_api_key() {
            warn!(
                model = %cfg.model,
                "OPENAI_API_KEY is not set; model endpoints will answer 500 until it is configured"
            );
            return Ok(Self::with_upstream(cfg, None));
        }

        let service = OpenAiService::new(cfg.clone()).map_err(AppError::Config)?;
        info!(model = %cfg.model, "model client ready");
        Ok(Self::with_upstream(cfg, Some(Arc::new(service))))
    }

    /// Builds state around any completion backend.
    pub fn with_upstream(cfg: LlmModelConfig, upstream: Option<Arc<dyn ChatCompletion>>) -> Self {
        Self {
            llm_config: cfg,
            upstream,
        }
    }

    /// The completion backend, or [`AppError::Misconfigured`] if there is none.
    pub fn upstream(&self) -> AppResult<&dyn ChatCompletion> {
        self.upstream.as_deref().ok_or(AppError::Misconfigured)
    }

    pub fn has_upstream(&self) -> bool {
        self.upstream.is_some()
    }
}
