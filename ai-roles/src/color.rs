//! CSS color normalization and contrast.
//!
//! Model replies describe colors loosely (`background-color: #00FF00;`,
//! `rgb(255, 0, 0)`, `255, 0, 0`). [`normalize_color`] reduces them to a
//! `#`-prefixed token the UI can render, falling back to [`DEFAULT_COLOR`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Color used whenever a reply cannot be understood.
pub const DEFAULT_COLOR: &str = "#7B68EE";

pub const CONTRAST_DARK: &str = "#000000";
pub const CONTRAST_LIGHT: &str = "#FFFFFF";

/// Leading CSS property or function names stripped before inspection.
const PREFIXES: [(&str, bool); 6] = [
    ("background-color:", false),
    ("color:", false),
    ("rgb(", true),
    ("rgba(", true),
    ("hsl(", true),
    ("hsla(", true),
];

static RGB_TRIPLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})$").expect("valid rgb triplet regex")
});

/// Structured color reply: `{ "css_code": "#rrggbb" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorResult {
    pub css_code: String,
}

impl ColorResult {
    pub fn fallback() -> Self {
        Self {
            css_code: DEFAULT_COLOR.to_string(),
        }
    }

    /// Same color with its code run through [`normalize_color`].
    pub fn normalized(self) -> Self {
        Self {
            css_code: normalize_color(&self.css_code),
        }
    }
}

/// One 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness, `0.299·r + 0.587·g + 0.114·b`.
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }
}

/// Channels of [`DEFAULT_COLOR`].
pub const DEFAULT_RGB: Rgb = Rgb {
    r: 0x7B,
    g: 0x68,
    b: 0xEE,
};

/// Reduces a raw color token to something starting with `#`.
///
/// 1. trim, drop every `;`
/// 2. strip one leading `background-color:` / `color:` / `rgb(` / `rgba(` / `hsl(` / `hsla(`
///    (and the closing `)` of a function form)
/// 3. `r, g, b` with channels in `0..=255` becomes lowercase `#rrggbb`
/// 4. anything else not starting with `#` becomes [`DEFAULT_COLOR`]
///
/// Hex input keeps its case. Idempotent.
pub fn normalize_color(raw: &str) -> String {
    let cleaned = raw.trim().replace(';', "");
    let mut token = cleaned.trim();

    if let Some((rest, is_function)) = PREFIXES
        .iter()
        .find_map(|(p, f)| token.strip_prefix(p).map(|rest| (rest, *f)))
    {
        token = rest.trim();
        if is_function {
            token = token.strip_suffix(')').unwrap_or(token).trim();
        }
    }

    if token.starts_with('#') {
        return token.to_string();
    }

    match parse_rgb_triplet(token) {
        Some(rgb) => rgb.to_hex(),
        None => DEFAULT_COLOR.to_string(),
    }
}

fn parse_rgb_triplet(token: &str) -> Option<Rgb> {
    let caps = RGB_TRIPLET.captures(token)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some(Rgb {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    })
}

/// Reads channels from a (normalized) hex color.
///
/// Accepts `#rrggbb` (extra trailing digits such as alpha are ignored) and
/// `#rgb`. Anything unreadable gives [`DEFAULT_RGB`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let normalized = normalize_color(hex);
    let digits = normalized.trim_start_matches('#');

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return DEFAULT_RGB;
    }

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Rgb { r, g, b },
        _ => DEFAULT_RGB,
    }
}

/// Readable text color on top of `hex`: black on bright, white on dark.
pub fn contrast_color(hex: &str) -> &'static str {
    if hex_to_rgb(hex).brightness() > 128.0 {
        CONTRAST_DARK
    } else {
        CONTRAST_LIGHT
    }
}
