//! Role → system instruction resolution.
//!
//! Pure and deterministic: the same role and options always resolve to the
//! same instruction text, temperature and post-processing rule.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{language::TargetLanguage, role::AiRole};

pub const EMOJI_INSTRUCTION: &str = "You will be provided with text, and your task is to translate it into emojis. Do not use any regular text. Do your best with emojis only.";

pub const COLOR_INSTRUCTION: &str = "You will be provided with a description of a mood, and your task is to generate the CSS code for a color that matches it. Write your output in JSON with a single key called \"css_code\".";

pub const DEFAULT_CUSTOM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Emoji output is allowed to be more creative.
pub const CREATIVE_TEMPERATURE: f32 = 0.7;
pub const FOCUSED_TEMPERATURE: f32 = 0.3;

/// Free-form per-role options sent by the caller.
///
/// Unknown keys are ignored; each role reads only what it needs. A known key
/// holding something other than a string reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOptions {
    /// Translator: `english` | `japanese` | `chinese`.
    #[serde(default, deserialize_with = "string_or_none")]
    pub target_language: Option<String>,
    /// Custom AI: persona instruction.
    #[serde(default, deserialize_with = "string_or_none")]
    pub system_message: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// How the raw completion text is turned into the endpoint result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Return the text unchanged.
    PlainText,
    /// Best-effort `{ "css_code": ... }` extraction with a default color.
    ColorJson,
}

/// Everything needed for one `[system, user]` completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInstruction {
    pub role: AiRole,
    pub system: String,
    pub temperature: f32,
    pub post_process: PostProcess,
}

/// Instruction text for the translator, targeting `lang`.
pub fn translator_instruction(lang: TargetLanguage) -> String {
    format!(
        "You will be provided with a sentence in Korean, and your task is to translate it into {}. Only provide the translated text without any explanations.",
        lang.id()
    )
}

/// Resolves the system instruction, temperature and post-processing for `role`.
pub fn resolve(role: AiRole, options: &RoleOptions) -> ResolvedInstruction {
    let (system, temperature, post_process) = match role {
        AiRole::EmojiGenerator => (
            EMOJI_INSTRUCTION.to_string(),
            CREATIVE_TEMPERATURE,
            PostProcess::PlainText,
        ),
        AiRole::ColorGenerator => (
            COLOR_INSTRUCTION.to_string(),
            FOCUSED_TEMPERATURE,
            PostProcess::ColorJson,
        ),
        AiRole::Translator => {
            let lang = TargetLanguage::resolve(options.target_language.as_deref());
            (
                translator_instruction(lang),
                FOCUSED_TEMPERATURE,
                PostProcess::PlainText,
            )
        }
        AiRole::CustomAi => {
            let persona = options
                .system_message
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_CUSTOM_INSTRUCTION);
            (
                persona.to_string(),
                FOCUSED_TEMPERATURE,
                PostProcess::PlainText,
            )
        }
    };

    ResolvedInstruction {
        role,
        system,
        temperature,
        post_process,
    }
}
