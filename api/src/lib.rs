use std::{env, sync::Arc};

pub mod core;
pub mod error_handler;
pub mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    middleware_layer::request_id::request_id,
    routes::{
        chatbot::chatbot_route::chatbot_route,
        color::color_route::color_route,
        health_route::health_route,
        special_ai::{
            catalog_route::{languages_route, templates_route},
            special_ai_route::special_ai_route,
        },
    },
};

/// Builds the HTTP router around already-loaded state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_route))
        .route("/api/chatbot", post(chatbot_route))
        .route("/api/special-ai", post(special_ai_route))
        .route("/api/special-ai/languages", get(languages_route))
        .route("/api/special-ai/templates", get(templates_route))
        .route("/api/color", get(color_route))
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}

/// Loads state from the environment and serves until Ctrl+C.
///
/// # Errors
/// `MissingEnv` without `API_ADDRESS`, `Config` for invalid model settings,
/// `Bind`/`Server` for socket failures.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;
    let state = Arc::new(AppState::from_env()?);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "Open Talk backend listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        // Without a signal handler, keep serving rather than exit at once.
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::Pin,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use ai_llm_service::{
        AiLlmError, ChatCompletion, ChatRole, Completion, CompletionRequest, LlmModelConfig,
        UpstreamError,
    };
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use super::*;

    /// What the fake provider does on every call.
    #[derive(Clone, Copy)]
    enum Script {
        Reply(Option<&'static str>),
        Reject(StatusCode, &'static str),
        Unreachable,
    }

    struct FakeUpstream {
        script: Script,
        calls: AtomicUsize,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeUpstream {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last(&self) -> CompletionRequest {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl ChatCompletion for FakeUpstream {
        fn complete<'a>(
            &'a self,
            request: &'a CompletionRequest,
        ) -> Pin<Box<dyn Future<Output = ai_llm_service::error_handler::Result<Completion>> + Send + 'a>>
        {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                self.seen.lock().unwrap().push(request.clone());
                match self.script {
                    Script::Reply(content) => Ok(Completion {
                        content: content.map(str::to_string),
                    }),
                    Script::Reject(status, body) => Err(AiLlmError::from(
                        UpstreamError::from_body(status, "http://fake/v1/chat/completions", body),
                    )),
                    Script::Unreachable => {
                        Err(AiLlmError::Decode("connection closed before message completed".into()))
                    }
                }
            })
        }

        fn model(&self) -> &str {
            "gpt-4"
        }
    }

    fn test_config() -> LlmModelConfig {
        LlmModelConfig {
            model: "gpt-4".into(),
            endpoint: "https://api.openai.com".into(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            timeout_secs: None,
        }
    }

    /// Serves the real router on an ephemeral port.
    async fn serve(upstream: Option<Arc<FakeUpstream>>) -> String {
        let upstream = upstream.map(|u| u as Arc<dyn ChatCompletion>);
        let state = Arc::new(AppState::with_upstream(test_config(), upstream));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn post_json(url: String, body: Value) -> (StatusCode, Value) {
        let resp = reqwest::Client::new().post(url).json(&body).send().await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    async fn get_json(url: String) -> (StatusCode, Value) {
        let resp = reqwest::get(url).await.unwrap();
        let status = resp.status();
        (status, resp.json().await.unwrap())
    }

    /* ----------------------------- /api/chatbot ----------------------------- */

    #[tokio::test]
    async fn chat_forwards_conversation_once() {
        let fake = FakeUpstream::new(Script::Reply(Some("Hi there")));
        let base = serve(Some(fake.clone())).await;

        let (status, body) = post_json(
            format!("{base}/api/chatbot"),
            json!({ "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "hello" },
                { "role": "assistant", "content": "hey" },
                { "role": "user", "content": "how are you?" }
            ]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "reply": "Hi there" }));
        assert_eq!(fake.calls(), 1);

        let sent = fake.last();
        assert_eq!(sent.temperature, None);
        assert_eq!(sent.messages.len(), 4);
        assert_eq!(sent.messages[0].role, ChatRole::System);
        assert_eq!(sent.messages[3].content, "how are you?");
    }

    #[tokio::test]
    async fn chat_without_content_returns_placeholder() {
        let fake = FakeUpstream::new(Script::Reply(None));
        let base = serve(Some(fake.clone())).await;

        let (status, body) = post_json(
            format!("{base}/api/chatbot"),
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "(no reply)");
    }

    #[tokio::test]
    async fn chat_rejects_bad_messages_without_calling_upstream() {
        let fake = FakeUpstream::new(Script::Reply(Some("unused")));
        let base = serve(Some(fake.clone())).await;

        for payload in [
            json!({}),
            json!({ "messages": [] }),
            json!({ "messages": "hello" }),
            json!({ "messages": { "role": "user" } }),
            json!({ "messages": [{ "role": "robot", "content": "x" }] }),
            json!({ "messages": [{ "role": "user", "content": "" }] }),
        ] {
            let (status, body) = post_json(format!("{base}/api/chatbot"), payload.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert!(body["error"].is_string(), "{payload}");
        }
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn chat_rejects_malformed_json() {
        let base = serve(Some(FakeUpstream::new(Script::Reply(None)))).await;
        let resp = reqwest::Client::new()
            .post(format!("{base}/api/chatbot"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_upstream_rejection_passes_message() {
        let fake = FakeUpstream::new(Script::Reject(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"message":"Rate limit reached"}}"#,
        ));
        let base = serve(Some(fake)).await;

        let (status, body) = post_json(
            format!("{base}/api/chatbot"),
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Rate limit reached");
        assert_eq!(body["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn chat_upstream_rejection_without_message_is_generic() {
        let fake = FakeUpstream::new(Script::Reject(StatusCode::BAD_GATEWAY, "<html>"));
        let base = serve(Some(fake)).await;

        let (status, body) = post_json(
            format!("{base}/api/chatbot"),
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "upstream model API error");
    }

    #[tokio::test]
    async fn chat_transport_failure_is_500() {
        let base = serve(Some(FakeUpstream::new(Script::Unreachable))).await;
        let (status, body) = post_json(
            format!("{base}/api/chatbot"),
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "TRANSPORT_ERROR");
        assert!(body["error"].as_str().unwrap().contains("connection closed"));
    }

    /* ---------------------------- /api/special-ai --------------------------- */

    #[tokio::test]
    async fn translator_sends_system_then_user() {
        let fake = FakeUpstream::new(Script::Reply(Some("こんにちは")));
        let base = serve(Some(fake.clone())).await;

        let (status, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "translator", "input": "안녕하세요", "options": { "targetLanguage": "japanese" } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": "こんにちは" }));
        assert_eq!(fake.calls(), 1);

        let sent = fake.last();
        assert_eq!(sent.temperature, Some(0.3));
        assert_eq!(sent.messages.len(), 2);
        assert_eq!(sent.messages[0].role, ChatRole::System);
        assert!(sent.messages[0].content.contains("into japanese."));
        assert_eq!(sent.messages[1].role, ChatRole::User);
        assert_eq!(sent.messages[1].content, "안녕하세요");
    }

    #[tokio::test]
    async fn translator_unknown_language_is_english() {
        let fake = FakeUpstream::new(Script::Reply(Some("Hello")));
        let base = serve(Some(fake.clone())).await;

        post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "translator", "input": "안녕", "options": { "targetLanguage": "french" } }),
        )
        .await;
        assert!(fake.last().messages[0].content.contains("into english."));
    }

    #[tokio::test]
    async fn translator_non_string_language_is_english() {
        let fake = FakeUpstream::new(Script::Reply(Some("Hello")));
        let base = serve(Some(fake.clone())).await;

        let (status, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "translator", "input": "안녕", "options": { "targetLanguage": 5 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "Hello");
        assert_eq!(fake.calls(), 1);
        assert!(fake.last().messages[0].content.contains("into english."));
    }

    #[tokio::test]
    async fn emoji_generator_is_creative() {
        let fake = FakeUpstream::new(Script::Reply(Some("🍕🎉")));
        let base = serve(Some(fake.clone())).await;

        let (_, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "emoji-generator", "input": "pizza party" }),
        )
        .await;
        assert_eq!(body["result"], "🍕🎉");
        assert_eq!(fake.last().temperature, Some(0.7));
    }

    #[tokio::test]
    async fn custom_ai_uses_supplied_persona() {
        let fake = FakeUpstream::new(Script::Reply(None));
        let base = serve(Some(fake.clone())).await;

        let (status, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "custom-ai", "input": "hi", "options": { "systemMessage": "You are a pirate." } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "");
        assert_eq!(fake.last().messages[0].content, "You are a pirate.");
    }

    #[tokio::test]
    async fn color_generator_extracts_embedded_json() {
        let fake = FakeUpstream::new(Script::Reply(Some(
            r##"Here is the color: {"css_code": "#1a2b3c"}"##,
        )));
        let base = serve(Some(fake)).await;

        let (status, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "color-generator", "input": "calm ocean" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": { "css_code": "#1a2b3c" } }));
    }

    #[tokio::test]
    async fn color_generator_falls_back_with_soft_error() {
        let fake = FakeUpstream::new(Script::Reply(Some("not json")));
        let base = serve(Some(fake)).await;

        let (status, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "color-generator", "input": "calm ocean" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], json!({ "css_code": "#7B68EE" }));
        assert_eq!(body["error"], "Failed to parse color data");
    }

    #[tokio::test]
    async fn role_validation_never_calls_upstream() {
        let fake = FakeUpstream::new(Script::Reply(Some("unused")));
        let base = serve(Some(fake.clone())).await;

        for payload in [
            json!({ "role": "poet", "input": "roses" }),
            json!({ "role": "translator" }),
            json!({ "input": "hello" }),
            json!({ "role": "translator", "input": "" }),
        ] {
            let (status, body) = post_json(format!("{base}/api/special-ai"), payload.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert!(body["error"].is_string());
        }
        assert_eq!(fake.calls(), 0);
    }

    /* ----------------------------- misconfigured ---------------------------- */

    #[tokio::test]
    async fn missing_credential_is_500_on_both_endpoints() {
        let base = serve(None).await;

        let (status, body) = post_json(
            format!("{base}/api/chatbot"),
            json!({ "messages": [{ "role": "user", "content": "hello" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Model API credential is not configured");

        let (status, body) = post_json(
            format!("{base}/api/special-ai"),
            json!({ "role": "emoji-generator", "input": "hello" }),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "SERVER_CONFIG_ERROR");

        let (_, health) = get_json(format!("{base}/health")).await;
        assert_eq!(health["credential_configured"], false);
    }

    /* ------------------------------ ancillary ------------------------------- */

    #[tokio::test]
    async fn health_and_catalogs() {
        let fake = FakeUpstream::new(Script::Reply(None));
        let base = serve(Some(fake.clone())).await;

        let (status, health) = get_json(format!("{base}/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            health,
            json!({ "status": "ok", "model": "gpt-4", "credential_configured": true })
        );

        let (_, langs) = get_json(format!("{base}/api/special-ai/languages")).await;
        assert_eq!(langs[1], json!({ "id": "japanese", "label": "일본어" }));

        let (_, templates) = get_json(format!("{base}/api/special-ai/templates")).await;
        assert_eq!(templates.as_array().unwrap().len(), 4);
        assert!(templates[0]["system_message"].is_string());

        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn color_inspection() {
        let base = serve(None).await;

        let (status, body) = get_json(format!("{base}/api/color?code=255,%200,%200")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "css_code": "#ff0000", "rgb": { "r": 255, "g": 0, "b": 0 }, "contrast": "#FFFFFF" })
        );

        let (_, body) = get_json(format!("{base}/api/color?code=%23ffffff")).await;
        assert_eq!(body["contrast"], "#000000");

        let (status, _) = get_json(format!("{base}/api/color")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn request_id_is_echoed_or_generated() {
        let base = serve(None).await;
        let client = reqwest::Client::new();

        let resp = client
            .get(format!("{base}/health"))
            .header("x-request-id", "abc-123")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.headers()["x-request-id"], "abc-123");

        let resp = client.get(format!("{base}/health")).send().await.unwrap();
        let id = resp.headers()["x-request-id"].to_str().unwrap();
        assert!(id.starts_with("req-"));
    }
}
