//! POST /api/special-ai: single-turn completion shaped by a role.

use std::sync::Arc;

use ai_llm_service::CompletionRequest;
use ai_roles::{post_process, resolve};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use tracing::{info, instrument, warn};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    middleware_layer::request_id::request_id_of,
    routes::special_ai::{
        special_ai_request::SpecialAiRequest, special_ai_response::SpecialAiResponse,
    },
};

/// Handler: POST /api/special-ai
///
/// Resolves the role's instruction and temperature, sends `[system, user]`
/// upstream once, then post-processes the reply. A color reply that cannot be
/// parsed still answers 200 with the default color and a soft `error`.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/special-ai \
///   -H 'content-type: application/json' \
///   -d '{"role":"translator","input":"안녕하세요","options":{"targetLanguage":"japanese"}}'
/// ```
#[instrument(name = "special_ai_route", skip_all, fields(request_id = %request_id_of(&headers)))]
pub async fn special_ai_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<SpecialAiRequest>, JsonRejection>,
) -> AppResult<Json<SpecialAiResponse>> {
    let Json(body) = payload?;
    let req = body.validate()?;
    let plan = resolve(req.role, &req.options);
    let upstream = state.upstream()?;

    info!(
        role = %plan.role,
        temperature = plan.temperature,
        input_len = req.input.len(),
        "dispatching role request"
    );

    let completion = upstream
        .complete(&CompletionRequest::single_turn(
            plan.system,
            req.input,
            plan.temperature,
        ))
        .await?;

    let raw = completion.content.unwrap_or_default();
    let processed = post_process(plan.post_process, &raw);

    if let Some(soft) = &processed.soft_error {
        warn!(role = %plan.role, error = %soft, "returning fallback result");
    }

    Ok(Json(SpecialAiResponse {
        result: processed.result,
        error: processed.soft_error,
    }))
}
