//! POST /api/chatbot: forwards a whole conversation to the model.

use std::sync::Arc;

use ai_llm_service::CompletionRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use tracing::{info, instrument};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    middleware_layer::request_id::request_id_of,
    routes::chatbot::{
        chatbot_request::ChatbotRequest,
        chatbot_response::{ChatbotResponse, NO_REPLY_PLACEHOLDER},
    },
};

/// Handler: POST /api/chatbot
///
/// Validation runs before the credential check; neither failure reaches the
/// model. Exactly one upstream call otherwise, no retries.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/chatbot \
///   -H 'content-type: application/json' \
///   -d '{"messages":[{"role":"user","content":"Hello!"}]}'
/// ```
#[instrument(name = "chatbot_route", skip_all, fields(request_id = %request_id_of(&headers)))]
pub async fn chatbot_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> AppResult<Json<ChatbotResponse>> {
    let Json(body) = payload?;
    let messages = body.validate()?;
    let upstream = state.upstream()?;

    info!(
        messages = messages.len(),
        model = upstream.model(),
        "forwarding conversation"
    );

    let completion = upstream
        .complete(&CompletionRequest::conversation(messages))
        .await?;

    let reply = completion
        .content
        .unwrap_or_else(|| NO_REPLY_PLACEHOLDER.to_string());

    Ok(Json(ChatbotResponse { reply }))
}
