//! Translation markers and the idempotence guard
//!
//! A translated page carries a literal trailing tag naming the target
//! language. The tag serves double duty: it tells the reader what they are
//! looking at, and a substring search for it is the check that skips the
//! generation call when the page is already in the requested language.

use crate::error::SessionError;
use crate::pager::PagedText;

/// Separator the marker is appended after. Splitting on it recovers the
/// untranslated source text.
const MARKER_SEPARATOR: &str = "\n\n--- (";

/// The marker tag for a target language.
pub fn marker(language_name: &str) -> String {
    format!("--- (translated to {}) ---", language_name)
}

/// Whether `page` already carries the marker for `language_name`.
///
/// A literal substring search, not a structured flag.
pub fn is_translated_to(page: &str, language_name: &str) -> bool {
    page.contains(&marker(language_name))
}

/// The untranslated portion of a page's text.
///
/// Pages translated earlier keep their marker; translating to a different
/// language must start from the source text, not the previous translation's
/// tag line.
pub fn original_text(page: &str) -> &str {
    page.split(MARKER_SEPARATOR).next().unwrap_or(page)
}

/// Suffix translated text with the language marker.
pub fn with_marker(translated: &str, language_name: &str) -> String {
    format!("{}\n\n{}", translated.trim_end(), marker(language_name))
}

/// Outcome of a translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    /// The page text was replaced with a fresh translation
    Translated,
    /// The page already carried the requested language's marker; no
    /// generation call was made
    AlreadyTranslated,
}

impl PagedText {
    /// Replace page `index` with `translated` plus the language marker.
    pub fn apply_translation(
        &mut self,
        index: usize,
        translated: &str,
        language_name: &str,
    ) -> Result<(), SessionError> {
        let len = self.page_count();
        if !self.set_page(index, with_marker(translated, language_name)) {
            return Err(SessionError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
