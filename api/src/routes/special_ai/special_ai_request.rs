use ai_roles::{AiRole, RoleOptions};
use serde::Deserialize;

use crate::error_handler::{AppError, AppResult};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: role and input";

/// Request payload for POST /api/special-ai.
///
/// `role` stays a string here so an unknown tag produces a readable
/// "Invalid role specified" error instead of a serde message.
#[derive(Debug, Deserialize)]
pub struct SpecialAiRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
    #[serde(default)]
    pub options: Option<RoleOptions>,
}

/// Request after validation.
#[derive(Debug)]
pub struct ValidRoleRequest {
    pub role: AiRole,
    pub input: String,
    pub options: RoleOptions,
}

impl SpecialAiRequest {
    pub fn validate(self) -> AppResult<ValidRoleRequest> {
        let role = self.role.filter(|r| !r.trim().is_empty());
        let input = self.input.filter(|i| !i.trim().is_empty());

        let (Some(role), Some(input)) = (role, input) else {
            return Err(AppError::InvalidRequest(MISSING_FIELDS_MESSAGE.into()));
        };

        Ok(ValidRoleRequest {
            role: role.parse()?,
            input,
            options: self.options.unwrap_or_default(),
        })
    }
}
