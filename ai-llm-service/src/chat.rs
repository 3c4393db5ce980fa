//! Provider-neutral chat types and the [`ChatCompletion`] seam.
//!
//! Endpoints depend on the trait, not on a concrete HTTP client, so tests
//! can plug in an in-process fake and count upstream calls.

use std::{fmt, future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::error_handler::Result;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of a conversation, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A single non-streaming completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Full message sequence sent as-is.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature; `None` leaves it to the provider.
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Forward a caller-built conversation without extra parameters.
    pub fn conversation(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
        }
    }

    /// Single-turn `[system, user]` call.
    pub fn single_turn(system: impl Into<String>, user: impl Into<String>, temperature: f32) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: Some(temperature),
        }
    }
}

/// Text of the first completion choice.
///
/// `content` is `None` when the provider returned no choices or a choice
/// without text; callers decide what to show instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    pub content: Option<String>,
}

/// Asynchronous chat-completion backend.
///
/// Implemented by [`OpenAiService`](crate::services::open_ai_service::OpenAiService).
/// Every call is independent: no retries, no caching.
pub trait ChatCompletion: Send + Sync {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<Completion>> + Send + 'a>>;

    /// Model id used for calls (for logs and health output).
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_use_lowercase_wire_names() {
        let m: ChatMessage = serde_json::from_str(r#"{"role":"assistant","content":"hi"}"#).unwrap();
        assert_eq!(m.role, ChatRole::Assistant);
        assert_eq!(
            serde_json::to_string(&ChatMessage::system("be brief")).unwrap(),
            r#"{"role":"system","content":"be brief"}"#
        );
        assert!(serde_json::from_str::<ChatMessage>(r#"{"role":"tool","content":"x"}"#).is_err());
    }

    #[test]
    fn single_turn_orders_system_then_user() {
        let req = CompletionRequest::single_turn("sys", "hello", 0.3);
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, ChatRole::System);
        assert_eq!(req.messages[1], ChatMessage::user("hello"));
        assert_eq!(req.temperature, Some(0.3));
    }
}
