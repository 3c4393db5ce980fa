//! Static listings the role pages use to build their pickers.

use ai_roles::{LanguageInfo, PRESETS, PersonaPreset, languages};
use axum::Json;

/// Handler: GET /api/special-ai/languages
pub async fn languages_route() -> Json<Vec<LanguageInfo>> {
    Json(languages())
}

/// Handler: GET /api/special-ai/templates
pub async fn templates_route() -> Json<Vec<PersonaPreset>> {
    Json(PRESETS.to_vec())
}
