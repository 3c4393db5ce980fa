use serde::Serialize;

/// Translator target language.
///
/// Resolution is lenient: anything other than a known id falls back to
/// [`TargetLanguage::English`] without telling the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetLanguage {
    #[default]
    English,
    Japanese,
    Chinese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 3] = [
        TargetLanguage::English,
        TargetLanguage::Japanese,
        TargetLanguage::Chinese,
    ];

    /// Resolves `options.targetLanguage`; `None` and unknown ids give English.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("japanese") => TargetLanguage::Japanese,
            Some("chinese") => TargetLanguage::Chinese,
            _ => TargetLanguage::English,
        }
    }

    /// Canonical id, also used inside the translator instruction.
    pub fn id(self) -> &'static str {
        match self {
            TargetLanguage::English => "english",
            TargetLanguage::Japanese => "japanese",
            TargetLanguage::Chinese => "chinese",
        }
    }

    /// Display name in Korean, the UI language.
    pub fn label(self) -> &'static str {
        match self {
            TargetLanguage::English => "영어",
            TargetLanguage::Japanese => "일본어",
            TargetLanguage::Chinese => "중국어",
        }
    }
}

/// Listing entry for clients building a language picker.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub label: &'static str,
}

impl From<TargetLanguage> for LanguageInfo {
    fn from(lang: TargetLanguage) -> Self {
        Self {
            id: lang.id(),
            label: lang.label(),
        }
    }
}

/// All supported target languages, English first.
pub fn languages() -> Vec<LanguageInfo> {
    TargetLanguage::ALL.into_iter().map(LanguageInfo::from).collect()
}
