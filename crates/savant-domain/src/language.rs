//! Target languages for page translation

/// A translation target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code, e.g. "de"
    pub code: &'static str,
    /// Display name used in prompts and translation markers
    pub name: &'static str,
}

/// Languages offered by the reader's translate control.
pub const TARGET_LANGUAGES: &[Language] = &[
    Language { code: "tr", name: "Turkish" },
    Language { code: "en", name: "English" },
    Language { code: "de", name: "German" },
    Language { code: "fr", name: "French" },
    Language { code: "es", name: "Spanish" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ar", name: "Arabic" },
];

impl Language {
    /// Look up a language by its ISO code.
    pub fn by_code(code: &str) -> Option<Language> {
        TARGET_LANGUAGES.iter().copied().find(|l| l.code == code)
    }
}
