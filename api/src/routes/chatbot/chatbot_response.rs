use serde::Serialize;

/// Shown when the model answered without any text.
pub const NO_REPLY_PLACEHOLDER: &str = "(no reply)";

/// Response payload for POST /api/chatbot.
#[derive(Debug, Serialize)]
pub struct ChatbotResponse {
    pub reply: String,
}
