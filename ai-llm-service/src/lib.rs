//! Upstream chat-completion client used by the Open Talk backend.
//!
//! - [`chat`]: provider-neutral message types and the [`ChatCompletion`] seam
//! - [`services::open_ai_service`]: OpenAI `/v1/chat/completions` client
//! - [`config`]: model configuration loaded from the environment
//! - [`error_handler`]: unified [`AiLlmError`] and env/validation helpers
//! - [`telemetry`]: tracing layers and subscriber setup

pub mod chat;
pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;

pub use chat::{ChatCompletion, ChatMessage, ChatRole, Completion, CompletionRequest};
pub use config::{default_config::config_openai, llm_model_config::LlmModelConfig};
pub use error_handler::{AiLlmError, ConfigError, UpstreamError};
pub use services::open_ai_service::OpenAiService;
