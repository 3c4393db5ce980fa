use ai_roles::RoleOutput;
use serde::Serialize;

/// Response payload for POST /api/special-ai.
///
/// `error` is only present as a soft error next to a usable fallback result.
#[derive(Debug, Serialize)]
pub struct SpecialAiResponse {
    pub result: RoleOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
