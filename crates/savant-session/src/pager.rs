//! Fixed-width pagination of long text

/// Characters per page. Kept from the original reader behavior.
pub const DEFAULT_PAGE_WINDOW: usize = 300;

/// Sentinel page rendered when a book has no readable excerpt. Callers must
/// always have something to display.
pub const EMPTY_CONTENT_PAGE: &str = "No readable content is available for this book.";

/// An ordered sequence of fixed-width substrings of one source string.
///
/// Page `i` covers characters `[i*W, (i+1)*W)` of the source; the last page
/// may be shorter. An empty source yields exactly one sentinel page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedText {
    pages: Vec<String>,
}

impl PagedText {
    /// Split `source` into pages of `window` characters.
    pub fn paginate(source: &str, window: usize) -> Self {
        let window = window.max(1);
        if source.is_empty() {
            return Self {
                pages: vec![EMPTY_CONTENT_PAGE.to_string()],
            };
        }

        let chars: Vec<char> = source.chars().collect();
        let pages = chars
            .chunks(window)
            .map(|chunk| chunk.iter().collect())
            .collect();
        Self { pages }
    }

    /// Number of pages; always at least 1.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Borrow page `index`, if it exists.
    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Overwrite page `index` with new text.
    pub(crate) fn set_page(&mut self, index: usize, text: String) -> bool {
        match self.pages.get_mut(index) {
            Some(page) => {
                *page = text;
                true
            }
            None => false,
        }
    }

    /// Whether this is the single sentinel page for missing content.
    pub fn is_placeholder(&self) -> bool {
        self.pages.len() == 1 && self.pages[0] == EMPTY_CONTENT_PAGE
    }
}

/// Saturate a requested cursor into `[0, page_count - 1]`.
///
/// Out-of-range requests (including negative ones) clamp silently rather
/// than fail; moving past either end is a no-op.
pub fn clamp_cursor(requested: i64, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    let max = (page_count - 1) as i64;
    requested.clamp(0, max) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_fixed_windows() {
        let source = "a".repeat(750);
        let paged = PagedText::paginate(&source, 300);
        assert_eq!(paged.page_count(), 3);
        assert_eq!(paged.page(0).unwrap().len(), 300);
        assert_eq!(paged.page(1).unwrap().len(), 300);
        assert_eq!(paged.page(2).unwrap().len(), 150);
    }

    #[test]
    fn exact_multiple_has_no_empty_tail_page() {
        let source = "b".repeat(600);
        let paged = PagedText::paginate(&source, 300);
        assert_eq!(paged.page_count(), 2);
    }

    #[test]
    fn short_text_is_one_page() {
        let paged = PagedText::paginate("hello", 300);
        assert_eq!(paged.page_count(), 1);
        assert_eq!(paged.page(0), Some("hello"));
    }

    #[test]
    fn empty_source_yields_sentinel_page() {
        let paged = PagedText::paginate("", 300);
        assert_eq!(paged.page_count(), 1);
        assert_eq!(paged.page(0), Some(EMPTY_CONTENT_PAGE));
        assert!(paged.is_placeholder());
    }

    #[test]
    fn windows_are_counted_in_chars_not_bytes() {
        // Multi-byte characters must not split a page mid-character.
        let source = "ü".repeat(450);
        let paged = PagedText::paginate(&source, 300);
        assert_eq!(paged.page_count(), 2);
        assert_eq!(paged.page(0).unwrap().chars().count(), 300);
        assert_eq!(paged.page(1).unwrap().chars().count(), 150);
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        assert_eq!(clamp_cursor(-1, 3), 0);
        assert_eq!(clamp_cursor(-1_000_000, 3), 0);
        assert_eq!(clamp_cursor(0, 3), 0);
        assert_eq!(clamp_cursor(2, 3), 2);
        assert_eq!(clamp_cursor(3, 3), 2);
        assert_eq!(clamp_cursor(i64::MAX, 3), 2);
        assert_eq!(clamp_cursor(5, 0), 0);
    }
}
