use ai_llm_service::ChatMessage;
use serde::Deserialize;

use crate::error_handler::{AppError, AppResult};

/// Upper bound for a single message's content, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2_000;

/// Request payload for POST /api/chatbot.
///
/// The whole conversation is resubmitted each turn; the server keeps no history.
#[derive(Debug, Deserialize)]
pub struct ChatbotRequest {
    /// Chronological turns. Absent and `null` are both rejected by [`Self::validate`].
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

impl ChatbotRequest {
    /// Returns the messages if they form a non-empty, well-formed conversation.
    pub fn validate(self) -> AppResult<Vec<ChatMessage>> {
        let messages = match self.messages {
            Some(m) if !m.is_empty() => m,
            _ => return Err(AppError::InvalidRequest("Invalid messages format".into())),
        };

        for (i, m) in messages.iter().enumerate() {
            if m.content.is_empty() {
                return Err(AppError::InvalidRequest(format!(
                    "messages[{i}].content must not be empty"
                )));
            }
            if m.content.chars().count() > MAX_MESSAGE_CHARS {
                return Err(AppError::InvalidRequest(format!(
                    "messages[{i}].content exceeds {MAX_MESSAGE_CHARS} characters"
                )));
            }
        }

        Ok(messages)
    }
}
