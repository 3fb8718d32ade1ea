//! Savant Session Layer
//!
//! Applies newly extracted values onto existing in-memory state while
//! preserving the invariants of the larger structure:
//!
//! - **Slot replacement**: overwrite exactly one element of a plan's nested
//!   lists by `(key, index)` address, leaving every sibling untouched
//! - **Library**: the saved-book collection, unique by id, ordered by
//!   recency, persisted through a [`savant_domain::traits::LibraryStore`]
//!   after every mutation
//! - **Pagination**: fixed-width character windows over a long excerpt, with
//!   a sentinel page for empty content and a saturating page cursor
//! - **Translation markers**: a literal trailing tag identifying the target
//!   language, doubling as the idempotence check that skips repeat
//!   translations
//! - **In-flight tracking**: at most one outstanding request per slot
//!
//! All operations are synchronous and pure with respect to caller state:
//! reconciliation returns new values instead of mutating shared snapshots.

#![warn(missing_docs)]

mod error;
mod inflight;
mod library;
mod pager;
mod reconcile;
mod translate;

pub use error::SessionError;
pub use inflight::InFlightTracker;
pub use library::{Library, LIBRARY_STORAGE_KEY};
pub use pager::{clamp_cursor, PagedText, DEFAULT_PAGE_WINDOW, EMPTY_CONTENT_PAGE};
pub use reconcile::replace_at_slot;
pub use translate::{is_translated_to, original_text, with_marker, TranslationStatus};
