//! The saved-book library collection
//!
//! Unique by book id, ordered by last access descending. Hydrated from the
//! persistent store once at startup and written back after every mutation.

use crate::error::SessionError;
use crate::pager::clamp_cursor;
use savant_domain::traits::LibraryStore;
use savant_domain::{BookSearchResult, LibraryEntry};
use tracing::{info, warn};

/// Fixed storage key the collection is persisted under.
pub const LIBRARY_STORAGE_KEY: &str = "saved_books";

/// The saved-book collection plus its backing store.
#[derive(Debug)]
pub struct Library<S: LibraryStore> {
    entries: Vec<LibraryEntry>,
    store: S,
}

impl<S: LibraryStore> Library<S> {
    /// Load the collection from the store.
    ///
    /// Corrupt persisted data is discarded and the store is reset to an
    /// empty collection; a half-readable library is worse than a fresh one.
    /// Cursors are normalized on load in case older records violate the
    /// cursor invariant.
    pub fn hydrate(store: S) -> Result<Self, SessionError> {
        let mut library = Self {
            entries: Vec::new(),
            store,
        };

        let raw = library
            .store
            .load(LIBRARY_STORAGE_KEY)
            .map_err(|e| SessionError::Store(e.to_string()))?;

        if let Some(raw) = raw {
            match serde_json::from_str::<Vec<LibraryEntry>>(&raw) {
                Ok(mut entries) => {
                    for entry in &mut entries {
                        entry.normalize();
                    }
                    library.entries = entries;
                    library.sort();
                    info!("hydrated library with {} entries", library.entries.len());
                }
                Err(e) => {
                    warn!("discarding corrupt library data: {}", e);
                    library.persist()?;
                }
            }
        }

        Ok(library)
    }

    /// Insert a book unless its id is already present (first-write-wins).
    ///
    /// Returns `true` when a new entry was added.
    pub fn save_book(&mut self, book: BookSearchResult) -> Result<bool, SessionError> {
        if self.entries.iter().any(|e| e.book.id == book.id) {
            return Ok(false);
        }
        self.entries.push(LibraryEntry::new(book));
        self.sort();
        self.persist()?;
        Ok(true)
    }

    /// Mark a book as read now: refresh its timestamp and re-sort.
    pub fn touch(&mut self, id: &str) -> Result<(), SessionError> {
        self.entry_mut(id)?.touch();
        self.sort();
        self.persist()
    }

    /// Cache a generated excerpt and its page count on an entry.
    pub fn set_excerpt(
        &mut self,
        id: &str,
        excerpt: String,
        page_count: usize,
    ) -> Result<(), SessionError> {
        let entry = self.entry_mut(id)?;
        entry.excerpt = Some(excerpt);
        entry.page_count = page_count;
        entry.normalize();
        self.persist()
    }

    /// Move an entry's page cursor, saturating at both ends.
    ///
    /// Returns the cursor actually stored. Also counts as a read access.
    pub fn set_cursor(&mut self, id: &str, requested: i64) -> Result<usize, SessionError> {
        let entry = self.entry_mut(id)?;
        let cursor = clamp_cursor(requested, entry.page_count);
        entry.cursor = cursor;
        entry.touch();
        self.sort();
        self.persist()?;
        Ok(cursor)
    }

    /// Remove a book. Returns `false` when the id was not present.
    pub fn remove(&mut self, id: &str) -> Result<bool, SessionError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.book.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Borrow an entry by id.
    pub fn get(&self, id: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|e| e.book.id == id)
    }

    /// All entries, most recently read first.
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Number of saved books.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut LibraryEntry, SessionError> {
        self.entries
            .iter_mut()
            .find(|e| e.book.id == id)
            .ok_or_else(|| SessionError::UnknownBook { id: id.to_string() })
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.last_read_ms.cmp(&a.last_read_ms));
    }

    fn persist(&mut self) -> Result<(), SessionError> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| SessionError::Store(e.to_string()))?;
        self.store
            .save(LIBRARY_STORAGE_KEY, &json)
            .map_err(|e| SessionError::Store(e.to_string()))
    }
}
