//! Error types for session reconciliation

use thiserror::Error;

/// Errors that can occur while reconciling session state.
///
/// All variants are recoverable by the caller; none of them leaves state
/// partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No category or day matched the slot's key
    #[error("slot not found: {slot}")]
    SlotNotFound {
        /// Display form of the slot that failed to resolve
        slot: String,
    },

    /// The slot's index is outside the addressed list
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the addressed list
        len: usize,
    },

    /// A meal was offered for an exercise slot or vice versa
    #[error("replacement item kind does not match the slot kind")]
    ItemKindMismatch,

    /// No library entry carries the given id
    #[error("unknown book: {id}")]
    UnknownBook {
        /// The id that failed to resolve
        id: String,
    },

    /// The persistent store failed
    #[error("store error: {0}")]
    Store(String),
}
