use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Behavior tag selecting the system instruction and reply post-processing
/// for a single-turn completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiRole {
    /// Rewrites the input as emojis only.
    EmojiGenerator,
    /// Turns a mood description into a CSS color (JSON reply).
    ColorGenerator,
    /// Translates Korean input into a target language.
    Translator,
    /// Caller-supplied persona via `options.systemMessage`.
    CustomAi,
}

impl AiRole {
    pub const ALL: [AiRole; 4] = [
        AiRole::EmojiGenerator,
        AiRole::ColorGenerator,
        AiRole::Translator,
        AiRole::CustomAi,
    ];

    /// Wire tag, e.g. `"emoji-generator"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AiRole::EmojiGenerator => "emoji-generator",
            AiRole::ColorGenerator => "color-generator",
            AiRole::Translator => "translator",
            AiRole::CustomAi => "custom-ai",
        }
    }
}

impl fmt::Display for AiRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("Invalid role specified: {0}")]
    UnsupportedRole(String),
}

impl FromStr for AiRole {
    type Err = RoleError;

    /// Exact, case-sensitive match on the wire tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AiRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| RoleError::UnsupportedRole(s.to_string()))
    }
}
