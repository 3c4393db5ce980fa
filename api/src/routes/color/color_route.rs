//! GET /api/color: server-side color normalization and contrast.

use ai_roles::{Rgb, contrast_color, hex_to_rgb, normalize_color};
use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

use crate::error_handler::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    /// Raw token, e.g. `background-color: #00FF00;` or `255, 0, 0`.
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ColorInfoResponse {
    pub css_code: String,
    pub rgb: Rgb,
    pub contrast: &'static str,
}

/// Handler: GET /api/color?code=<raw>
pub async fn color_route(
    query: Result<Query<ColorQuery>, QueryRejection>,
) -> AppResult<Json<ColorInfoResponse>> {
    let Query(q) = query?;
    let raw = q
        .code
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Query parameter `code` is required".into()))?;

    let css_code = normalize_color(&raw);
    Ok(Json(ColorInfoResponse {
        rgb: hex_to_rgb(&css_code),
        contrast: contrast_color(&css_code),
        css_code,
    }))
}
