//! Saved-book library entries

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A book returned by a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSearchResult {
    /// Externally supplied unique identifier (ISBN or generated)
    pub id: String,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Short summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image URL, empty string when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,

    /// URL of a free, legal source for the full text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_source_url: Option<String>,
}

/// A saved book plus its reading state.
///
/// Invariant: `cursor < page_count` whenever `page_count > 0`. The cursor is
/// clamped by the session layer, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryEntry {
    /// The saved book
    #[serde(flatten)]
    pub book: BookSearchResult,

    /// Cached generated excerpt, populated on first read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Page count derived from the cached excerpt (0 when no excerpt)
    #[serde(default)]
    pub page_count: usize,

    /// Current page cursor within the excerpt
    #[serde(default)]
    pub cursor: usize,

    /// Last access time, milliseconds since the Unix epoch
    #[serde(default)]
    pub last_read_ms: u64,
}

impl LibraryEntry {
    /// Wrap a search result as a fresh entry with the cursor at page zero.
    pub fn new(book: BookSearchResult) -> Self {
        Self {
            book,
            excerpt: None,
            page_count: 0,
            cursor: 0,
            last_read_ms: now_ms(),
        }
    }

    /// Restore the cursor invariant after deserialization or a page-count
    /// change. Entries persisted by older builds may carry a cursor past the
    /// end of the excerpt.
    pub fn normalize(&mut self) {
        if self.page_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= self.page_count {
            self.cursor = self.page_count - 1;
        }
    }

    /// Refresh the last-access timestamp.
    pub fn touch(&mut self) {
        self.last_read_ms = now_ms();
    }
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
