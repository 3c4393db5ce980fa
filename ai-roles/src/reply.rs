//! Per-role reply post-processing.
//!
//! Plain-text roles pass the completion through. The color role digs a
//! `{ "css_code": ... }` object out of free-form text; when that fails the
//! result is the default color plus a soft error, never a failure.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::{color::ColorResult, instruction::PostProcess};

/// Soft error reported next to the fallback color.
pub const COLOR_PARSE_SOFT_ERROR: &str = "Failed to parse color data";

/// First `{` through last `}`, across lines.
static JSON_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid json span regex"));

/// Endpoint result: raw text, or a structured color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleOutput {
    Text(String),
    Color(ColorResult),
}

/// Post-processed reply with an optional soft error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub result: RoleOutput,
    pub soft_error: Option<String>,
}

#[derive(Debug, Error)]
#[error("color reply is not a JSON object with a string `css_code`: {0}")]
pub struct ColorParseError(#[from] serde_json::Error);

/// Applies `rule` to the raw completion text. Total: never fails.
pub fn post_process(rule: PostProcess, raw: &str) -> Processed {
    match rule {
        PostProcess::PlainText => Processed {
            result: RoleOutput::Text(raw.to_string()),
            soft_error: None,
        },
        PostProcess::ColorJson => match extract_color(raw) {
            Ok(color) => Processed {
                result: RoleOutput::Color(color),
                soft_error: None,
            },
            Err(err) => {
                warn!(error = %err, raw_len = raw.len(), "falling back to default color");
                Processed {
                    result: RoleOutput::Color(ColorResult::fallback()),
                    soft_error: Some(COLOR_PARSE_SOFT_ERROR.to_string()),
                }
            }
        },
    }
}

/// Picks the text to parse: the whole reply if it already starts with `{`,
/// else the first `{...}` span, else the whole reply.
pub fn json_candidate(raw: &str) -> &str {
    if raw.trim_start().starts_with('{') {
        return raw;
    }
    JSON_SPAN.find(raw).map_or(raw, |m| m.as_str())
}

/// Parses a color reply and normalizes its `css_code`.
pub fn extract_color(raw: &str) -> Result<ColorResult, ColorParseError> {
    let color: ColorResult = serde_json::from_str(json_candidate(raw))?;
    Ok(color.normalized())
}
