use ai_llm_service::AiLlmError;
use ai_roles::RoleError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// Public application error type.
///
/// Every variant leaves the process as `{ "error": <message>, "code": <CODE> }`.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Config(AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request handling ---
    /// Malformed or missing fields, unsupported role. Shown verbatim.
    #[error("{0}")]
    InvalidRequest(String),

    /// No model credential. The message must not hint at secret state.
    #[error("Model API credential is not configured")]
    Misconfigured,

    /// Provider answered with a non-success status.
    #[error("{0}")]
    Upstream(String),

    /// Network failure or unreadable provider response.
    #[error("{0}")]
    Transport(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Misconfigured
            | AppError::Upstream(_)
            | AppError::Transport(_)
            | AppError::MissingEnv(_)
            | AppError::Config(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::InvalidRequest(_) => "BAD_REQUEST",
            AppError::Misconfigured => "SERVER_CONFIG_ERROR",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Transport(_) => "TRANSPORT_ERROR",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            error!(%status, code, error = %self, "request failed");
        } else {
            debug!(%status, code, error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            code,
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidRequest(err.body_text())
    }
}

impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(err: axum::extract::rejection::QueryRejection) -> Self {
        AppError::InvalidRequest(err.body_text())
    }
}

impl From<RoleError> for AppError {
    fn from(err: RoleError) -> Self {
        AppError::InvalidRequest(err.to_string())
    }
}

/// Provider rejections keep the provider's message; everything else is transport.
impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        match err {
            AiLlmError::Upstream(e) => AppError::Upstream(e.message),
            other => AppError::Transport(other.to_string()),
        }
    }
}
