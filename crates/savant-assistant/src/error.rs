//! Error types for the Assistant

use savant_extractor::ExtractError;
use savant_session::SessionError;
use thiserror::Error;

/// Errors surfaced by the high-level assistant facade.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The generation service failed
    #[error("generation failed: {0}")]
    Generation(String),

    /// The model's reply could not be turned into the expected value
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    /// Session state could not be reconciled
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// A request for the same slot is already outstanding
    #[error("a request for slot {slot} is already in flight")]
    RequestInFlight {
        /// Display form of the busy slot
        slot: String,
    },

    /// The requested translation language is not supported
    #[error("unsupported language code: {code}")]
    UnknownLanguage {
        /// The code that failed to resolve
        code: String,
    },

    /// Caller input failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
